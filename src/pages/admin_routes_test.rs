use super::*;

#[test]
fn validate_new_route_trims_fields() {
    assert_eq!(
        validate_new_route(" Aqua Line ", " BKC ", " Aarey "),
        Ok(("Aqua Line".to_owned(), "BKC".to_owned(), "Aarey".to_owned()))
    );
}

#[test]
fn validate_new_route_requires_all_fields() {
    assert_eq!(
        validate_new_route("", "BKC", "Aarey"),
        Err("Fill in route name, origin, and destination.")
    );
}

#[test]
fn validate_new_route_rejects_identical_endpoints() {
    assert_eq!(
        validate_new_route("Aqua Line", "BKC", "bkc"),
        Err("Origin and destination must differ.")
    );
}

#[test]
fn request_failure_messages_format_status() {
    assert_eq!(routes_failed_message(500), "Route list request failed (status 500)");
    assert_eq!(add_route_failed_message(409), "Adding route failed (status 409)");
}
