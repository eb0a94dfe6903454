use std::time::Duration;
use subject_pubsub::config::Config;
use subject_pubsub::demo;

#[tokio::test]
async fn demo_transcript() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut out: Vec<u8> = vec![];
    demo::run(Config::default(), Duration::from_millis(10), &mut out)
        .await
        .unwrap();

    let expected = "subscribed after a publish...\n\
                    msg is nil? true\n\
                    msg data: \"hello\" on subject \"greet.joe\"\n\
                    msg data: \"hello\" on subject \"greet.pam\"\n\
                    msg data: \"hello\" on subject \"greet.bob\"\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[tokio::test]
async fn demo_fails_on_invalid_config() {
    let mut out: Vec<u8> = vec![];
    let result = demo::run(
        Config::default().with_capacity(0),
        Duration::from_millis(10),
        &mut out,
    )
    .await;
    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn missing_msg_is_printed_as_nil() {
    let mut out: Vec<u8> = vec![];
    demo::print_msg(&mut out, None).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "msg is nil? true\n");
}
