use super::*;

#[test]
fn format_inr_renders_two_decimals() {
    assert_eq!(format_inr(42.5), "₹42.50");
    assert_eq!(format_inr(0.0), "₹0.00");
    assert_eq!(format_inr(1234.567), "₹1234.57");
}

#[test]
fn display_name_takes_email_local_part() {
    assert_eq!(display_name("asha@example.com"), "asha");
}

#[test]
fn display_name_passes_through_plain_usernames() {
    assert_eq!(display_name("ops"), "ops");
}
