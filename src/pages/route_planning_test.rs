use super::*;

#[test]
fn validate_route_query_trims_stations() {
    assert_eq!(
        validate_route_query(" Andheri ", " Ghatkopar "),
        Ok(("Andheri".to_owned(), "Ghatkopar".to_owned()))
    );
}

#[test]
fn validate_route_query_requires_both_stations() {
    assert_eq!(validate_route_query("", "Ghatkopar"), Err("Enter both origin and destination."));
    assert_eq!(validate_route_query("Andheri", "   "), Err("Enter both origin and destination."));
}

#[test]
fn validate_route_query_rejects_identical_stations() {
    assert_eq!(
        validate_route_query("Andheri", "andheri"),
        Err("Origin and destination must differ.")
    );
}

#[test]
fn search_failed_message_formats_status() {
    assert_eq!(search_failed_message(502), "Route search failed (status 502)");
}
