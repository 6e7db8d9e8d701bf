use super::*;
use crate::util::auth::{ADMIN_HOME, COMMUTER_HOME};

#[test]
fn commuter_items_start_at_commuter_home() {
    let items = nav_items(Role::Commuter);
    assert_eq!(items[0], ("Dashboard", COMMUTER_HOME));
    assert!(items.iter().all(|(_, path)| !path.starts_with("/admin")));
}

#[test]
fn admin_items_start_at_admin_home() {
    let items = nav_items(Role::Admin);
    assert_eq!(items[0], ("Dashboard", ADMIN_HOME));
    assert!(items.iter().all(|(_, path)| path.starts_with("/admin")));
}

#[test]
fn role_labels_are_human_readable() {
    assert_eq!(role_label(Role::Admin), "Administrator");
    assert_eq!(role_label(Role::Commuter), "Commuter");
}
