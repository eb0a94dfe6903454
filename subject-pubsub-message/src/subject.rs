/// Subjects and subscription patterns.
use crate::{
    constants::{DELIMITER, WILDCARD},
    error::SubjectError,
};
use log::trace;
use std::fmt::Display;
use std::str::FromStr;

/// checks the token grammar shared by subjects and patterns.
/// `allow_wildcard` decides whether a `*` token is accepted.
fn validate(raw: &str, allow_wildcard: bool) -> Result<(), SubjectError> {
    if raw.is_empty() {
        return Err(SubjectError::Empty);
    }
    for token in raw.split(DELIMITER) {
        if token.is_empty() {
            return Err(SubjectError::EmptyToken(raw.to_string()));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(SubjectError::InvalidCharacter(raw.to_string()));
        }
        if !allow_wildcard && token == WILDCARD {
            return Err(SubjectError::Wildcard(raw.to_string()));
        }
    }
    Ok(())
}

/// A concrete, dot separated routing key, e.g. `greet.joe`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subject(String);

impl Subject {
    /// ```
    /// use subject_pubsub_message::subject::Subject;
    /// let subject = Subject::new("greet.joe").unwrap();
    /// assert_eq!(subject.tokens().count(), 2);
    /// ```
    pub fn new(raw: &str) -> Result<Subject, SubjectError> {
        validate(raw, false)?;
        Ok(Subject(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tokens(&self) -> std::str::Split<'_, char> {
        self.0.split(DELIMITER)
    }
}

impl FromStr for Subject {
    type Err = SubjectError;

    fn from_str(s: &str) -> Result<Subject, SubjectError> {
        Subject::new(s)
    }
}

impl TryFrom<&str> for Subject {
    type Error = SubjectError;

    fn try_from(s: &str) -> Result<Subject, SubjectError> {
        Subject::new(s)
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> String {
        subject.0
    }
}

/// A subscription pattern. Each `*` token matches exactly one subject token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(String);

impl Pattern {
    /// ```
    /// use subject_pubsub_message::subject::{Pattern, Subject};
    /// let pattern = Pattern::new("greet.*").unwrap();
    /// assert!(pattern.matches(&Subject::new("greet.joe").unwrap()));
    /// assert!(!pattern.matches(&Subject::new("greet.joe.extra").unwrap()));
    /// ```
    pub fn new(raw: &str) -> Result<Pattern, SubjectError> {
        validate(raw, true)?;
        Ok(Pattern(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// true if the pattern holds at least one `*` token.
    pub fn has_wildcard(&self) -> bool {
        self.0.split(DELIMITER).any(|token| token == WILDCARD)
    }

    /// token-wise comparison; differing token counts never match.
    pub fn matches(&self, subject: &Subject) -> bool {
        let mut pattern_tokens = self.0.split(DELIMITER);
        let mut subject_tokens = subject.tokens();
        loop {
            match (pattern_tokens.next(), subject_tokens.next()) {
                (None, None) => return true,
                (Some(p), Some(s)) if p == WILDCARD || p == s => continue,
                (p, s) => {
                    trace!("pattern {} rejected {} at {:?}/{:?}", self, subject, p, s);
                    return false;
                }
            }
        }
    }
}

impl FromStr for Pattern {
    type Err = SubjectError;

    fn from_str(s: &str) -> Result<Pattern, SubjectError> {
        Pattern::new(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = SubjectError;

    fn try_from(s: &str) -> Result<Pattern, SubjectError> {
        Pattern::new(s)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Subject> for Pattern {
    fn from(subject: Subject) -> Pattern {
        Pattern(subject.0)
    }
}
