pub mod error;
pub mod message;
pub mod subject;
pub use message::Msg;
pub use subject::{Pattern, Subject};

pub mod constants {

    /// separates the tokens of a subject.
    pub const DELIMITER: char = '.';

    /// matches exactly one token in a subscription pattern.
    pub const WILDCARD: &str = "*";
}

#[cfg(test)]
mod tests {
    use crate::error::SubjectError;
    use crate::subject::{Pattern, Subject};

    fn subject(s: &str) -> Subject {
        Subject::new(s).unwrap()
    }

    #[test]
    fn subject_parse_pass() {
        assert!(Subject::new("greet.joe").is_ok());
        assert!(Subject::new("greet").is_ok());
        assert!(Subject::new("greet.j*e").is_ok());
    }

    #[test]
    fn subject_parse_fail() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(Subject::new(""), Err(SubjectError::Empty));
        assert_eq!(
            Subject::new("greet..joe"),
            Err(SubjectError::EmptyToken("greet..joe".to_string()))
        );
        assert!(matches!(
            Subject::new(".greet"),
            Err(SubjectError::EmptyToken(_))
        ));
        assert!(matches!(
            Subject::new("greet."),
            Err(SubjectError::EmptyToken(_))
        ));
        assert!(matches!(
            Subject::new("greet.jo e"),
            Err(SubjectError::InvalidCharacter(_))
        ));
        assert_eq!(
            Subject::new("greet.*"),
            Err(SubjectError::Wildcard("greet.*".to_string()))
        );
    }

    #[test]
    fn pattern_parse() {
        assert!(Pattern::new("greet.*").is_ok());
        assert!(Pattern::new("*").is_ok());
        assert!(Pattern::new("*.*.east").is_ok());
        assert_eq!(Pattern::new(""), Err(SubjectError::Empty));
        assert!(Pattern::new("greet.*.").is_err());
        assert!(Pattern::new("greet.*").unwrap().has_wildcard());
        assert!(!Pattern::new("greet.j*").unwrap().has_wildcard());
    }

    #[test]
    fn wildcard_matches_single_token() {
        let pattern = Pattern::new("greet.*").unwrap();
        assert!(pattern.matches(&subject("greet.joe")));
        assert!(pattern.matches(&subject("greet.pam")));
        assert!(!pattern.matches(&subject("greet")));
        assert!(!pattern.matches(&subject("greet.joe.extra")));
        assert!(!pattern.matches(&subject("hello.joe")));
    }

    #[test]
    fn literal_tokens_are_case_sensitive() {
        let pattern = Pattern::new("greet.joe").unwrap();
        assert!(pattern.matches(&subject("greet.joe")));
        assert!(!pattern.matches(&subject("Greet.joe")));
        assert!(!pattern.matches(&subject("greet.jo")));
    }

    #[test]
    fn embedded_star_is_literal() {
        let pattern = Pattern::new("greet.j*").unwrap();
        assert!(pattern.matches(&subject("greet.j*")));
        assert!(!pattern.matches(&subject("greet.joe")));
    }

    #[test]
    fn wildcard_in_any_position() {
        let pattern = Pattern::new("weather.*.east").unwrap();
        assert!(pattern.matches(&subject("weather.us.east")));
        assert!(pattern.matches(&subject("weather.eu.east")));
        assert!(!pattern.matches(&subject("weather.us.west")));

        let all = Pattern::new("*.*").unwrap();
        assert!(all.matches(&subject("greet.bob")));
        assert!(!all.matches(&subject("greet")));
    }
}
