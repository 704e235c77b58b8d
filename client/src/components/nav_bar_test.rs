use super::*;

#[test]
fn greeting_uses_trimmed_display_name() {
    assert_eq!(greeting("  Ada Lovelace "), "Hi, Ada Lovelace");
}

#[test]
fn greeting_without_name_is_generic() {
    assert_eq!(greeting(""), "Hi there");
    assert_eq!(greeting("   "), "Hi there");
}

#[test]
fn avatar_initial_is_uppercased_first_char() {
    assert_eq!(avatar_initial("ada"), "A");
    assert_eq!(avatar_initial(" émile"), "É");
    assert_eq!(avatar_initial(""), "?");
}

#[test]
fn page_links_only_for_signed_in_users() {
    assert!(nav_links(false).is_empty());
    let labels: Vec<&str> = nav_links(true).iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, vec!["New", "History"]);
}
