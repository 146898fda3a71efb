use super::*;

#[test]
fn first_card_has_no_delay() {
    let style = hidden_style(0, &BehaviorConfig::default());
    assert_eq!(style.opacity, "0");
    assert_eq!(style.transform, "translateY(30px)");
    assert_eq!(style.transition, "opacity 0.6s ease 0s, transform 0.6s ease 0s");
}

#[test]
fn delays_are_staggered_by_index() {
    let config = BehaviorConfig::default();
    assert_eq!(
        hidden_style(3, &config).transition,
        "opacity 0.6s ease 0.3s, transform 0.6s ease 0.3s"
    );
    assert_eq!(
        hidden_style(12, &config).transition,
        "opacity 0.6s ease 1.2s, transform 0.6s ease 1.2s"
    );
}

#[test]
fn shown_style_resets_offset() {
    assert_eq!(shown_style(), ("1", "translateY(0)"));
}

#[test]
fn custom_translate_is_used() {
    let config = BehaviorConfig {
        reveal_translate: 45.0,
        ..BehaviorConfig::default()
    };
    assert_eq!(hidden_style(1, &config).transform, "translateY(45px)");
}
