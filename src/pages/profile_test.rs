use super::*;

#[test]
fn validate_topup_amount_parses_plain_numbers() {
    assert_eq!(validate_topup_amount("250"), Ok(250.0));
    assert_eq!(validate_topup_amount(" 99.50 "), Ok(99.5));
}

#[test]
fn validate_topup_amount_rejects_non_numbers() {
    assert_eq!(validate_topup_amount("lots"), Err("Enter a valid amount."));
    assert_eq!(validate_topup_amount(""), Err("Enter a valid amount."));
}

#[test]
fn validate_topup_amount_rejects_zero_and_negative() {
    assert_eq!(validate_topup_amount("0"), Err("Amount must be greater than zero."));
    assert_eq!(validate_topup_amount("-50"), Err("Amount must be greater than zero."));
}

#[test]
fn validate_topup_amount_enforces_ceiling() {
    assert_eq!(validate_topup_amount("10000"), Ok(10_000.0));
    assert_eq!(validate_topup_amount("10000.01"), Err("Maximum top-up is ₹10000.00."));
}

#[test]
fn topup_failed_message_formats_status() {
    assert_eq!(topup_failed_message(402), "Top-up failed (status 402)");
}
