use super::*;

#[test]
fn validate_register_input_accepts_complete_fields() {
    assert_eq!(
        validate_register_input(" Asha ", " asha@example.com ", "password1", "password1"),
        Ok(("Asha".to_owned(), "asha@example.com".to_owned(), "password1".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(
        validate_register_input("", "a@b.com", "password1", "password1"),
        Err("Fill in all fields.")
    );
    assert_eq!(
        validate_register_input("Asha", "a@b.com", "password1", ""),
        Err("Fill in all fields.")
    );
}

#[test]
fn validate_register_input_rejects_bad_email() {
    assert_eq!(
        validate_register_input("Asha", "not-an-email", "password1", "password1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("Asha", "a@b.com", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_register_input_rejects_mismatched_passwords() {
    assert_eq!(
        validate_register_input("Asha", "a@b.com", "password1", "password2"),
        Err("Passwords do not match.")
    );
}
