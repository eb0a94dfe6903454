use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    /// the subject has no tokens
    #[error("Subject is empty")]
    Empty,
    /// a token between two delimiters is empty, e.g. `greet..joe`
    #[error("Empty token in subject: `{0}`")]
    EmptyToken(String),
    /// whitespace is not allowed inside a token
    #[error("Invalid character in subject: `{0}`")]
    InvalidCharacter(String),
    /// wildcards are only allowed in subscription patterns
    #[error("Wildcard not allowed in a publish subject: `{0}`")]
    Wildcard(String),
}
