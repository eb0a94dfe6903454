use crate::message::Msg;
use crate::subject::{Pattern, Subject};
use log::{debug, info, trace, warn};
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{error::TrySendError, Sender};

/// the sending half of a subscription queue.
#[derive(Debug)]
pub(crate) struct Subscriber {
    pub channel: Sender<Msg>,
    /// messages lost because the queue was full.
    pub dropped: Arc<AtomicU64>,
}

type ClientChannelMap = HashMap<String, Subscriber>;

#[derive(Debug)]
struct PatternEntry {
    pattern: Pattern,
    clients: ClientChannelMap,
}

/// The `TopicMap` struct stores the queues of the active subscriptions, keyed by pattern.
#[derive(Debug, Default)]
pub(crate) struct TopicMap {
    map: BTreeMap<String, PatternEntry>,
}

impl TopicMap {
    /// Returns the number of active subscriptions per pattern as a json object.
    /// `None` lists every pattern.
    pub fn query(&self, pattern: Option<&str>) -> Value {
        let counts: Map<String, Value> = match pattern {
            None => self
                .map
                .iter()
                .map(|(k, v)| (k.clone(), json!(v.clients.len())))
                .collect(),
            Some(pattern) => self
                .map
                .get(pattern)
                .map(|v| (pattern.to_string(), json!(v.clients.len())))
                .into_iter()
                .collect(),
        };
        Value::Object(counts)
    }

    /// Adds a subscription queue to the map.
    pub fn add_channel(&mut self, pattern: Pattern, client_id: String, subscriber: Subscriber) {
        let entry = self
            .map
            .entry(pattern.as_str().to_string())
            .or_insert_with(|| PatternEntry {
                pattern,
                clients: ClientChannelMap::new(),
            });
        entry.clients.entry(client_id).or_insert(subscriber);
    }

    /// Removes a subscription queue from the map, returns false if it was not there.
    pub fn remove_channel(&mut self, pattern: &str, client_id: &str) -> bool {
        let Some(entry) = self.map.get_mut(pattern) else {
            return false;
        };
        let removed = entry.clients.remove(client_id).is_some();
        if entry.clients.is_empty() {
            self.map.remove(pattern);
        }
        trace!("patterns: {:?}", self.map.keys().collect::<Vec<_>>());
        removed
    }

    pub fn contains(&self, pattern: &str, client_id: &str) -> bool {
        self.map
            .get(pattern)
            .is_some_and(|entry| entry.clients.contains_key(client_id))
    }

    /// number of active subscriptions.
    pub fn len(&self) -> usize {
        self.map.values().map(|entry| entry.clients.len()).sum()
    }

    /// Removes every subscription queue, returns how many there were.
    pub fn clear(&mut self) -> usize {
        let n = self.len();
        self.map.clear();
        n
    }

    /// Pushes the message to every matching queue and returns the number of deliveries.
    /// Full queues drop the message, queues without a receiver are cleaned up.
    pub fn publish(&mut self, subject: &Subject, msg: &Msg) -> usize {
        let mut delivered = 0;
        let mut dead_channels: Vec<(String, String)> = vec![];

        for (key, entry) in self.map.iter().filter(|(_, e)| e.pattern.matches(subject)) {
            for (client_id, subscriber) in entry.clients.iter() {
                match subscriber.channel.try_send(msg.clone()) {
                    Ok(()) => {
                        trace!("sent msg on {} to {}", subject, client_id);
                        delivered += 1;
                    }
                    Err(TrySendError::Full(_)) => {
                        let dropped = subscriber.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                        warn!(
                            "slow consumer {} on {}, dropping msg ({} dropped so far)",
                            client_id, key, dropped
                        );
                    }
                    Err(TrySendError::Closed(_)) => {
                        // `Subscription` deregisters before its receiver drops,
                        // so this only sees receivers registered without one.
                        debug!("receiver of {} is gone, cleaning up", client_id);
                        dead_channels.push((key.clone(), client_id.clone()));
                    }
                }
            }
        }

        if !dead_channels.is_empty() {
            info!("dead_channels: {:?}", dead_channels);
            for (pattern, client_id) in dead_channels {
                self.remove_channel(&pattern, &client_id);
            }
        }
        delivered
    }
}
