use subject_pubsub_message::error::SubjectError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PubSubError {
    /// the subject or pattern could not be parsed
    #[error("Invalid subject: {0}")]
    InvalidSubject(#[from] SubjectError),
    /// the configuration can't be used to build a channel
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// the channel was drained and accepts no more work
    #[error("Channel is drained")]
    Drained,
}
