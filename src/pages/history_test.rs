use super::*;

#[test]
fn history_failed_message_formats_status() {
    assert_eq!(history_failed_message(500), "History request failed (status 500)");
}
