use super::*;

#[test]
fn role_uses_backend_wire_strings() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ROLE_ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::Commuter).unwrap(), "\"ROLE_COMMUTER\"");
    assert_eq!(serde_json::from_str::<Role>("\"ROLE_COMMUTER\"").unwrap(), Role::Commuter);
}

#[test]
fn role_rejects_unknown_strings() {
    assert!(serde_json::from_str::<Role>("\"ROLE_SUPERUSER\"").is_err());
}

#[test]
fn user_deserializes_camel_case_profile() {
    let raw = r#"{
        "userId": 42,
        "username": "asha@example.com",
        "email": "asha@example.com",
        "role": "ROLE_COMMUTER",
        "walletBalance": 150.5
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.user_id, 42);
    assert_eq!(user.role, Role::Commuter);
    assert_eq!(user.wallet_balance, Some(150.5));
}

#[test]
fn user_wallet_balance_defaults_to_none() {
    let raw = r#"{
        "userId": 1,
        "username": "ops",
        "email": "ops@ridemumbai.example",
        "role": "ROLE_ADMIN"
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.wallet_balance, None);
}

#[test]
fn ticket_type_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&TicketType::Return).unwrap(), "\"return\"");
}

#[test]
fn booking_request_serializes_camel_case() {
    let body = BookingRequest {
        origin: "Andheri".to_owned(),
        destination: "Ghatkopar".to_owned(),
        ticket_type: TicketType::Single,
    };
    let raw = serde_json::to_value(&body).unwrap();
    assert_eq!(raw["ticketType"], "single");
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}
