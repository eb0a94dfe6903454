use clap::Parser;

/// log level for the demo
#[derive(clap::ValueEnum, Clone)]
pub enum LogLevel {
    Trace,
    Warn,
    Info,
    Error,
    Debug,
}

/// publishes on greet.* subjects and reads them back through a synchronous subscription
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// server url, default: nats://127.0.0.1:4222
    #[clap(long, env = "NATS_URL")]
    pub url: Option<String>,

    /// messages buffered per subscription
    #[clap(long)]
    pub capacity: Option<usize>,

    /// how long to wait for each message, in milliseconds
    #[clap(long, default_value_t = 10)]
    pub timeout_ms: u64,

    /// json config file
    #[clap(short, long)]
    pub config: Option<String>,

    /// log level, default: info
    #[clap(long, global = true)]
    pub log_level: Option<LogLevel>,
}
