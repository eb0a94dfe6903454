pub mod cli;
use crate::cli::{Cli, LogLevel};
use anyhow::Result;
use clap::Parser;
use std::env;
use std::time::Duration;
use subject_pubsub::{config::Config, demo};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level: &str = match cli.log_level {
        Some(LogLevel::Trace) => "trace",
        Some(LogLevel::Warn) => "warn",
        Some(LogLevel::Info) => "info",
        Some(LogLevel::Error) => "error",
        Some(LogLevel::Debug) => "debug",
        None => "info",
    };
    env::set_var("RUST_LOG", log_level);
    env_logger::init();

    let file = match &cli.config {
        Some(path) => Some(Config::from_file(path)?),
        None => None,
    };
    let config = Config::resolve(file, cli.url, cli.capacity);

    let mut stdout = std::io::stdout().lock();
    demo::run(config, Duration::from_millis(cli.timeout_ms), &mut stdout).await
}
