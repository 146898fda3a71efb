use super::*;

#[test]
fn hidden_until_focused() {
    assert_eq!(skip_link_top(false), "-40px");
    assert_eq!(skip_link_top(true), "6px");
}

#[test]
fn base_style_starts_off_screen() {
    assert!(BASE_STYLE.contains("top: -40px"));
    assert!(BASE_STYLE.contains("position: absolute"));
}

#[test]
fn targets_home_landmark() {
    assert_eq!(SKIP_TARGET, "#home");
    assert_eq!(SKIP_TEXT, "Skip to main content");
}

#[test]
fn fresh_page_gets_an_inserted_link() {
    let placement = Placement::for_existing(false);
    assert_eq!(placement, Placement::Inserted);
    assert!(placement.removes_on_detach());
}

#[test]
fn existing_link_is_reused_and_left_in_place() {
    let placement = Placement::for_existing(true);
    assert_eq!(placement, Placement::Reused);
    assert!(!placement.removes_on_detach());
}
