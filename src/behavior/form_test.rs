use super::*;

#[test]
fn filled_form_is_accepted() {
    let outcome = validate(&["Ada", "ada@example.com", "Hello there"]);
    assert_eq!(outcome, FormOutcome::Accepted);
    assert!(outcome.is_accepted());
}

#[test]
fn only_empty_field_is_flagged() {
    let outcome = validate(&["", "ada@example.com"]);
    assert_eq!(outcome, FormOutcome::Rejected { empty: vec![0] });
    assert!(outcome.is_empty_field(0));
    assert!(!outcome.is_empty_field(1));
    assert!(!outcome.is_accepted());
}

#[test]
fn whitespace_counts_as_empty() {
    let outcome = validate(&["   ", "\n\t", "ok"]);
    assert_eq!(outcome, FormOutcome::Rejected { empty: vec![0, 1] });
}

#[test]
fn form_without_required_fields_is_accepted() {
    let none: [&str; 0] = [];
    assert!(validate(&none).is_accepted());
}

#[test]
fn accepted_outcome_flags_nothing() {
    assert!(!FormOutcome::Accepted.is_empty_field(0));
}
