use super::*;

#[test]
fn validate_booking_input_trims_stations() {
    assert_eq!(
        validate_booking_input(" Versova ", "Dadar"),
        Ok(("Versova".to_owned(), "Dadar".to_owned()))
    );
}

#[test]
fn validate_booking_input_rejects_missing_or_identical_stations() {
    assert_eq!(validate_booking_input("", "Dadar"), Err("Enter both origin and destination."));
    assert_eq!(
        validate_booking_input("Dadar", "DADAR"),
        Err("Origin and destination must differ.")
    );
}

#[test]
fn parse_ticket_type_maps_select_values() {
    assert_eq!(parse_ticket_type("single"), TicketType::Single);
    assert_eq!(parse_ticket_type("return"), TicketType::Return);
    assert_eq!(parse_ticket_type("anything-else"), TicketType::Single);
}

#[test]
fn booking_failed_message_formats_status() {
    assert_eq!(booking_failed_message(402), "Booking failed (status 402)");
}
