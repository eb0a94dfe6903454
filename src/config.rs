use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// address used when nothing else is configured.
pub const DEFAULT_URL: &str = "nats://127.0.0.1:4222";

/// number of messages buffered per subscription before new ones are dropped.
pub const DEFAULT_CAPACITY: usize = 1024;

/// largest queue tokio's bounded mpsc accepts.
pub const MAX_CAPACITY: usize = usize::MAX >> 3;

/// Configuration handed to `PubSubChannel::connect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// server address, reported on connect.
    pub url: String,
    /// per subscription queue size, 1..=`MAX_CAPACITY`.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// ```
    /// use subject_pubsub::config::{Config, DEFAULT_CAPACITY};
    /// let config = Config::new("nats://demo:4222");
    /// assert_eq!(config.capacity, DEFAULT_CAPACITY);
    /// ```
    pub fn new(url: impl Into<String>) -> Config {
        Config {
            url: url.into(),
            ..Config::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Config {
        self.capacity = capacity;
        self
    }

    /// Reads a json config file, missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("unable to parse config file {}", path.display()))?;
        debug!("config loaded from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Layers the overrides on top of the file config, or the defaults without one.
    /// An empty url (e.g. `NATS_URL=""`) counts as absent, as does an empty url in the file.
    /// ```
    /// use subject_pubsub::config::{Config, DEFAULT_URL};
    /// let config = Config::resolve(None, Some(String::new()), None);
    /// assert_eq!(config.url, DEFAULT_URL);
    /// ```
    pub fn resolve(file: Option<Config>, url: Option<String>, capacity: Option<usize>) -> Config {
        let mut config = file.unwrap_or_default();
        if config.url.is_empty() {
            config.url = DEFAULT_URL.to_string();
        }
        if let Some(url) = url.filter(|url| !url.is_empty()) {
            config.url = url;
        }
        if let Some(capacity) = capacity {
            config.capacity = capacity;
        }
        config
    }
}
