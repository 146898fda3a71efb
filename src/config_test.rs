use super::*;

#[test]
fn defaults_match_page_contract() {
    let config = BehaviorConfig::default();
    assert_eq!(config.nav_offset, 100.0);
    assert_eq!(config.scrolled_threshold, 50.0);
    assert_eq!(config.mobile_breakpoint, 768.0);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.counter_start_delay_ms, 500);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
}

#[test]
fn empty_block_yields_defaults() {
    assert_eq!(BehaviorConfig::from_json("  ").unwrap(), BehaviorConfig::default());
    assert_eq!(BehaviorConfig::from_json("{}").unwrap(), BehaviorConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = BehaviorConfig::from_json(r#"{"mobile_breakpoint": 1024, "scroll_gap": 0}"#).unwrap();
    assert_eq!(config.mobile_breakpoint, 1024.0);
    assert_eq!(config.scroll_gap, 0.0);
    assert_eq!(config.nav_offset, 100.0);
}

#[test]
fn malformed_block_is_a_config_error() {
    let err = BehaviorConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}
