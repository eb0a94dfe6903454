//! The greet demonstration: at-most-once delivery seen through a synchronous subscription.
use crate::channel::PubSubChannel;
use crate::config::Config;
use crate::message::Msg;
use anyhow::Result;
use log::info;
use std::io::Write;
use std::time::Duration;

/// how long the demo waits for each message.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10);

/// Writes one received message, or its absence, to `out`.
pub fn print_msg<W: Write>(out: &mut W, msg: Option<&Msg>) -> std::io::Result<()> {
    match msg {
        Some(msg) => writeln!(
            out,
            "msg data: {:?} on subject {:?}",
            String::from_utf8_lossy(&msg.payload),
            msg.subject
        ),
        None => writeln!(out, "msg is nil? true"),
    }
}

/// Runs the demo against a fresh channel and writes the transcript to `out`.
///
/// A message published before the subscription exists is never seen; the ones
/// published after it are fetched in order. The channel is drained on return.
pub async fn run<W: Write>(config: Config, timeout: Duration, out: &mut W) -> Result<()> {
    let nc = PubSubChannel::connect(config)?;
    let nc = nc.drain_guard();

    // nobody listens yet, the message is dropped
    nc.publish("greet.joe", "hello")?;

    let mut sub = nc.subscribe("greet.*")?;

    let msg = sub.next_msg(timeout).await;
    writeln!(out, "subscribed after a publish...")?;
    writeln!(out, "msg is nil? {}", msg.is_none())?;

    nc.publish("greet.joe", "hello")?;
    nc.publish("greet.pam", "hello")?;

    let msg = sub.next_msg(timeout).await;
    print_msg(out, msg.as_ref())?;

    let msg = sub.next_msg(timeout).await;
    print_msg(out, msg.as_ref())?;

    nc.publish("greet.bob", "hello")?;

    let msg = sub.next_msg(timeout).await;
    print_msg(out, msg.as_ref())?;

    info!("subscriptions before drain: {}", nc.query(None));
    out.flush()?;
    Ok(())
}
