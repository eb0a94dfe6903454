pub mod channel;
pub mod config;
pub mod demo;
pub mod error;
pub mod subscription;
mod topics;
pub use channel::{DrainGuard, PubSubChannel};
pub use error::PubSubError;
pub use subject_pubsub_message::error::SubjectError;
pub use subject_pubsub_message::message;
pub use subject_pubsub_message::subject;
pub use subject_pubsub_message::Msg;
pub use subscription::Subscription;
