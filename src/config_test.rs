use super::*;
use crate::error::Error;

#[test]
fn defaults_match_shipped_timings() {
    let config = StorefrontConfig::default();
    assert_eq!(config.transition.fade_out(), Duration::from_millis(150));
    assert_eq!(config.transition.fade_in(), Duration::from_millis(50));
    assert!(config.transition.scroll_to_top);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn empty_document_is_all_defaults() {
    assert_eq!(StorefrontConfig::from_json("{}").unwrap(), StorefrontConfig::default());
}

#[test]
fn partial_transition_keeps_other_defaults() {
    let config = StorefrontConfig::from_json(r#"{ "transition": { "fade_out_ms": 300 } }"#).unwrap();
    assert_eq!(config.transition.fade_out_ms, 300);
    assert_eq!(config.transition.fade_in_ms, 50);
    assert!(config.transition.scroll_to_top);
}

#[test]
fn log_level_parses_lowercase_names() {
    let config = StorefrontConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(log::Level::from(config.log_level), log::Level::Debug);
}

#[test]
fn malformed_json_is_config_error() {
    let err = StorefrontConfig::from_json("{ transition: ").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = StorefrontConfig::from_json(r#"{ "transition": { "fade_in_ms": "fast" } }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_without_browser_uses_defaults() {
    assert_eq!(StorefrontConfig::load(), StorefrontConfig::default());
}
