use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn is_link_accepts_http_and_https_only() {
    assert!(is_link("https://example.com/paper"));
    assert!(is_link("  http://example.com "));
    assert!(!is_link("example.com"));
    assert!(!is_link("ftp://example.com"));
    assert!(!is_link("The Feynman Lectures"));
}

#[test]
fn further_reading_groups_keep_display_order() {
    let info = AdditionalInfo {
        related_topics: strings(&["Entropy"]),
        resources: strings(&["https://example.com"]),
        further_study: strings(&["Statistical mechanics"]),
    };
    let headings: Vec<_> = further_reading_groups(info).into_iter().map(|(h, _)| h).collect();
    assert_eq!(headings, vec!["Related Topics", "Resources", "Further Study"]);
}

#[test]
fn further_reading_groups_skip_empty_lists() {
    let info = AdditionalInfo {
        related_topics: Vec::new(),
        resources: strings(&["A book"]),
        further_study: Vec::new(),
    };
    let groups = further_reading_groups(info);
    assert_eq!(groups, vec![("Resources", strings(&["A book"]))]);
}
