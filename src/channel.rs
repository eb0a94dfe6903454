use crate::config::{Config, MAX_CAPACITY};
use crate::error::PubSubError;
use crate::message::Msg;
use crate::subject::{Pattern, Subject};
use crate::subscription::Subscription;
use crate::topics::{Subscriber, TopicMap};
use log::{debug, info, trace};
use std::ops::Deref;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Default)]
pub(crate) struct State {
    pub topics: TopicMap,
    pub drained: bool,
}

#[derive(Debug)]
pub(crate) struct Shared {
    config: Config,
    state: Mutex<State>,
}

impl Shared {
    /// the registry lock; a panic while holding it leaves the map usable.
    pub fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-process at-most-once pub/sub channel.
///
/// Cloning is cheap, all clones share the same registry.
#[derive(Debug, Clone)]
pub struct PubSubChannel {
    shared: Arc<Shared>,
}

impl PubSubChannel {
    /// Builds a ready to use channel from the given config.
    /// ```
    /// use subject_pubsub::{config::Config, PubSubChannel};
    /// let channel = PubSubChannel::connect(Config::default()).unwrap();
    /// assert_eq!(channel.subscription_count(), 0);
    /// ```
    pub fn connect(config: Config) -> Result<PubSubChannel, PubSubError> {
        if config.capacity == 0 || config.capacity > MAX_CAPACITY {
            return Err(PubSubError::InvalidConfig(format!(
                "capacity must be between 1 and {}, got {}",
                MAX_CAPACITY, config.capacity
            )));
        }
        if config.url.is_empty() {
            return Err(PubSubError::InvalidConfig("url is empty".to_string()));
        }
        info!("connected to: {}", config.url);
        Ok(PubSubChannel {
            shared: Arc::new(Shared {
                config,
                state: Mutex::new(State::default()),
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    /// Publishes the payload on the subject.
    /// Only subscriptions active right now receive it, without a match the message is dropped.
    pub fn publish(&self, subject: &str, payload: impl Into<Vec<u8>>) -> Result<(), PubSubError> {
        let subject = Subject::new(subject)?;
        let msg = Msg::new(subject.clone(), payload.into());

        let mut state = self.shared.lock();
        if state.drained {
            return Err(PubSubError::Drained);
        }
        let delivered = state.topics.publish(&subject, &msg);
        trace!("published on {} to {} subscription(s)", subject, delivered);
        Ok(())
    }

    /// Registers a new subscription on the pattern, it only sees messages published from now on.
    pub fn subscribe(&self, pattern: &str) -> Result<Subscription, PubSubError> {
        let pattern = Pattern::new(pattern)?;
        let (tx, rx) = mpsc::channel(self.shared.config.capacity);
        let dropped = Arc::new(AtomicU64::new(0));
        let client_id = uuid::Uuid::new_v4().to_string();

        let mut state = self.shared.lock();
        if state.drained {
            return Err(PubSubError::Drained);
        }
        state.topics.add_channel(
            pattern.clone(),
            client_id.clone(),
            Subscriber {
                channel: tx,
                dropped: dropped.clone(),
            },
        );
        debug!("subscribed {} to {}", client_id, pattern);

        Ok(Subscription::new(
            client_id,
            pattern,
            rx,
            dropped,
            Arc::downgrade(&self.shared),
        ))
    }

    /// Returns the next message of the subscription, `None` when `timeout` expires first.
    pub async fn next(&self, subscription: &mut Subscription, timeout: Duration) -> Option<Msg> {
        subscription.next_msg(timeout).await
    }

    /// Stops new deliveries to the subscription. Buffered messages can still be read.
    pub fn close(&self, subscription: &Subscription) {
        subscription.close();
    }

    /// Closes every subscription and refuses further publish/subscribe calls.
    /// Buffered messages stay readable.
    pub fn drain(&self) {
        let mut state = self.shared.lock();
        if state.drained {
            return;
        }
        state.drained = true;
        let closed = state.topics.clear();
        info!("drained, closed {} subscription(s)", closed);
    }

    pub fn is_drained(&self) -> bool {
        self.shared.lock().drained
    }

    /// Returns a handle that drains the channel when it goes out of scope.
    pub fn drain_guard(&self) -> DrainGuard {
        DrainGuard {
            channel: self.clone(),
        }
    }

    /// Returns the active subscription count per pattern as json, e.g. `{"greet.*":1}`.
    pub fn query(&self, pattern: Option<&str>) -> String {
        self.shared.lock().topics.query(pattern).to_string()
    }

    pub fn subscription_count(&self) -> usize {
        self.shared.lock().topics.len()
    }
}

/// Drains the channel on drop, on every exit path.
#[derive(Debug)]
pub struct DrainGuard {
    channel: PubSubChannel,
}

impl Deref for DrainGuard {
    type Target = PubSubChannel;

    fn deref(&self) -> &PubSubChannel {
        &self.channel
    }
}

impl Drop for DrainGuard {
    fn drop(&mut self) {
        self.channel.drain();
    }
}
