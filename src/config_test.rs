use super::*;

#[test]
fn api_url_joins_path_onto_base() {
    assert_eq!(api_url("/auth/login"), "/api/auth/login");
}

#[test]
fn api_url_keeps_nested_paths_intact() {
    assert_eq!(api_url("/admin/routes"), "/api/admin/routes");
}
