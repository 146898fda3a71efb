use super::*;

#[test]
fn fragment_link_names_its_target() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#contact-form"), Some("contact-form"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn external_links_are_not_fragments() {
    assert_eq!(fragment_id("/pricing"), None);
    assert_eq!(fragment_id("https://example.com/#about"), None);
}

#[test]
fn target_clears_header_and_gap() {
    // about.offsetTop = 900, navbar.offsetHeight = 70
    assert_eq!(scroll_target(900.0, 70.0, 20.0), 810.0);
}

#[test]
fn target_near_top_may_go_negative() {
    assert_eq!(scroll_target(0.0, 70.0, 20.0), -90.0);
}

#[test]
fn link_without_href_has_no_target() {
    // A link whose href was removed after the page loaded
    let href: Option<String> = None;
    assert_eq!(fragment_id(&href.unwrap_or_default()), None);
}
