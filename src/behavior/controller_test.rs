use super::*;

#[test]
fn only_complete_document_counts_as_loaded() {
    assert!(is_load_complete("complete"));
    assert!(!is_load_complete("interactive"));
    assert!(!is_load_complete("loading"));
}
