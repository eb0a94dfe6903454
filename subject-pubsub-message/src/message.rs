use crate::subject::Subject;
use log::trace;

/// A published message. Every matching subscription receives its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msg {
    /// the concrete subject the message was published on.
    pub subject: String,
    /// the payload, bytes.
    pub payload: Vec<u8>,
}

impl Msg {
    /// Creates a new `Msg` with the given data.
    /// ```
    /// use subject_pubsub_message::message::Msg;
    /// use subject_pubsub_message::subject::Subject;
    /// let subject = Subject::new("greet.joe").unwrap();
    /// let msg = Msg::new(subject, b"hello".to_vec());
    /// assert_eq!(msg.subject, "greet.joe");
    /// ```
    pub fn new(subject: Subject, payload: Vec<u8>) -> Msg {
        trace!("new msg on {}: {} bytes", subject, payload.len());
        Msg {
            subject: subject.into(),
            payload,
        }
    }

    /// returns the payload as utf-8, if it is.
    /// ```
    /// use subject_pubsub_message::message::Msg;
    /// use subject_pubsub_message::subject::Subject;
    /// let msg = Msg::new(Subject::new("greet.pam").unwrap(), b"hello".to_vec());
    /// assert_eq!(msg.payload_str().unwrap(), "hello");
    /// ```
    pub fn payload_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.payload)
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
