use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn is_auth_failure_matches_401_and_403_only() {
    assert!(is_auth_failure(401));
    assert!(is_auth_failure(403));
    assert!(!is_auth_failure(400));
    assert!(!is_auth_failure(404));
    assert!(!is_auth_failure(500));
}

#[test]
fn has_content_type_is_case_insensitive() {
    let headers = vec![("content-type".to_owned(), "text/plain".to_owned())];
    assert!(has_content_type(&headers));
    let headers = vec![("Content-Type".to_owned(), "text/plain".to_owned())];
    assert!(has_content_type(&headers));
}

#[test]
fn has_content_type_false_for_other_headers() {
    let headers = vec![("Accept".to_owned(), "application/json".to_owned())];
    assert!(!has_content_type(&headers));
    assert!(!has_content_type(&[]));
}

#[test]
fn request_config_defaults_to_bodyless_get() {
    let config = RequestConfig::get();
    assert_eq!(config.method, Method::Get);
    assert!(config.body.is_none());
    assert!(config.headers.is_empty());
}

#[test]
fn request_config_post_carries_body() {
    let config = RequestConfig::post(serde_json::json!({ "amount": 100.0 }));
    assert_eq!(config.method, Method::Post);
    assert!(config.body.is_some());
}

#[test]
fn fetch_error_display_names_the_failure() {
    assert_eq!(
        FetchError::AuthFailure(401).to_string(),
        "authentication required or forbidden (401)"
    );
    assert_eq!(
        FetchError::Transport("network down".to_owned()).to_string(),
        "request failed: network down"
    );
}
