use super::*;

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "Login failed (status 401)");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(409), "Registration failed (status 409)");
}

#[test]
fn profile_failed_message_formats_status() {
    assert_eq!(profile_failed_message(403), "Profile fetch failed (status 403)");
}

#[test]
fn message_or_fallback_prefers_backend_message() {
    let body = r#"{"message":"Bad credentials"}"#;
    assert_eq!(
        message_or_fallback(body, "Login failed (status 401)".to_owned()),
        "Bad credentials"
    );
}

#[test]
fn message_or_fallback_uses_fallback_for_non_json_body() {
    assert_eq!(
        message_or_fallback("<html>gateway error</html>", "Login failed (status 502)".to_owned()),
        "Login failed (status 502)"
    );
}

#[test]
fn message_or_fallback_uses_fallback_when_message_missing() {
    assert_eq!(
        message_or_fallback(r#"{"error":"x"}"#, "Registration failed (status 400)".to_owned()),
        "Registration failed (status 400)"
    );
}
