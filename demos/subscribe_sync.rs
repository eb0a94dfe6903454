use std::time::Duration;
use subject_pubsub::{config::Config, PubSubChannel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initialize the channel, drained when `nc` goes out of scope.
    let channel = PubSubChannel::connect(Config::default())?;
    let nc = channel.drain_guard();

    // subscribe to a wildcard pattern.
    let mut sub = nc.subscribe("weather.*.east")?;

    nc.publish("weather.us.east", "Temperature: 72F")?;
    nc.publish("weather.eu.east", "Temperature: 18C")?;
    nc.publish("weather.us.west", "not delivered")?;

    // fetch the buffered messages one by one.
    while let Some(msg) = sub.next_msg(Duration::from_millis(100)).await {
        println!(
            "Received on {}: {}",
            msg.subject,
            String::from_utf8_lossy(&msg.payload)
        );
    }
    Ok(())
}
