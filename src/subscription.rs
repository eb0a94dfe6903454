use crate::channel::Shared;
use crate::message::Msg;
use crate::subject::Pattern;
use log::{debug, trace};
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tokio_stream::Stream;

/// A synchronous subscription: messages are buffered until fetched with `next_msg`.
///
/// Dropping the subscription closes it.
#[derive(Debug)]
pub struct Subscription {
    id: String,
    pattern: Pattern,
    receiver: Receiver<Msg>,
    dropped: Arc<AtomicU64>,
    channel: Weak<Shared>,
}

impl Subscription {
    pub(crate) fn new(
        id: String,
        pattern: Pattern,
        receiver: Receiver<Msg>,
        dropped: Arc<AtomicU64>,
        channel: Weak<Shared>,
    ) -> Subscription {
        Subscription {
            id,
            pattern,
            receiver,
            dropped,
            channel,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// messages lost because the queue was full when they were published.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// true while new messages are still delivered to this subscription.
    pub fn is_active(&self) -> bool {
        let Some(shared) = self.channel.upgrade() else {
            return false;
        };
        let active = shared.lock().topics.contains(self.pattern.as_str(), &self.id);
        active
    }

    /// Returns the oldest buffered message, waiting up to `timeout` for one to arrive.
    /// `None` means nothing arrived in time, or the subscription is closed and empty.
    pub async fn next_msg(&mut self, timeout: Duration) -> Option<Msg> {
        match tokio::time::timeout(timeout, self.receiver.recv()).await {
            Ok(Some(msg)) => Some(msg),
            Ok(None) => {
                debug!("subscription {} is closed and drained", self.id);
                None
            }
            Err(_) => {
                trace!("no msg on {} within {:?}", self.pattern, timeout);
                None
            }
        }
    }

    /// Stops new deliveries, calling it again is a no-op.
    pub fn close(&self) {
        let Some(shared) = self.channel.upgrade() else {
            return;
        };
        if shared
            .lock()
            .topics
            .remove_channel(self.pattern.as_str(), &self.id)
        {
            debug!("closed subscription {} on {}", self.id, self.pattern);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.close();
    }
}

/// Yields messages until the subscription is closed and its backlog is empty.
impl Stream for Subscription {
    type Item = Msg;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Msg>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}
