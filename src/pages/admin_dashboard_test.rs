use super::*;

#[test]
fn stats_failed_message_formats_status() {
    assert_eq!(stats_failed_message(503), "Stats request failed (status 503)");
}
