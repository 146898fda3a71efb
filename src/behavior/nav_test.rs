use super::*;

fn page() -> Vec<SectionSpan> {
    vec![
        SectionSpan::new("home", 0.0, 800.0),
        SectionSpan::new("about", 800.0, 600.0),
        SectionSpan::new("services", 1400.0, 900.0),
        SectionSpan::new("contact", 2300.0, 500.0),
    ]
}

fn active_id(spans: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    active_section(spans, scroll_y, 100.0).map(|s| s.id.as_str())
}

#[test]
fn top_of_page_is_home() {
    assert_eq!(active_id(&page(), 0.0), Some("home"));
}

#[test]
fn offset_is_applied_before_lookup() {
    // 700 + 100 lands exactly on the start of `about`
    assert_eq!(active_id(&page(), 700.0), Some("about"));
    assert_eq!(active_id(&page(), 699.0), Some("home"));
}

#[test]
fn every_position_in_a_span_maps_to_that_span() {
    let spans = page();
    for span in &spans {
        let mut y = span.top;
        while y < span.top + span.height {
            let found = active_section(&spans, y - 100.0, 100.0).map(|s| s.id.clone());
            assert_eq!(found.as_deref(), Some(span.id.as_str()), "position {}", y);
            y += 25.0;
        }
    }
}

#[test]
fn upper_bound_is_exclusive() {
    let span = SectionSpan::new("about", 800.0, 600.0);
    assert!(span.contains(800.0));
    assert!(span.contains(1399.9));
    assert!(!span.contains(1400.0));
}

#[test]
fn past_last_section_matches_nothing() {
    assert_eq!(active_id(&page(), 5000.0), None);
}

#[test]
fn overlapping_spans_prefer_later_section() {
    let spans = vec![
        SectionSpan::new("hero", 0.0, 1000.0),
        SectionSpan::new("intro", 500.0, 400.0),
    ];
    assert_eq!(active_id(&spans, 500.0), Some("intro"));
}

#[test]
fn scrolled_threshold_is_strict() {
    assert!(!is_scrolled(0.0, 50.0));
    assert!(!is_scrolled(50.0, 50.0));
    assert!(is_scrolled(50.5, 50.0));
}
