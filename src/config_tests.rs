use crate::config::Config;
use crate::domain::market::Market;

// These tests do not mutate the environment; they rely on the dashboard
// variables (DEFAULT_MARKET, WINDOW_WIDTH, WINDOW_HEIGHT) being unset in
// the test environment.

#[test]
fn test_config_defaults() {
    let config = Config::from_env().unwrap();

    assert_eq!(config.default_market, Market::AShare);
    assert!((config.window_width - 1200.0).abs() < f32::EPSILON);
    assert!((config.window_height - 800.0).abs() < f32::EPSILON);
}

#[test]
fn test_default_market_accepts_config_spellings() {
    // The spellings DEFAULT_MARKET supports
    assert_eq!("ashare".parse::<Market>().unwrap(), Market::AShare);
    assert_eq!("hongkong".parse::<Market>().unwrap(), Market::HongKong);
    assert_eq!("us".parse::<Market>().unwrap(), Market::Us);
    assert_eq!("US".parse::<Market>().unwrap(), Market::Us);
}

#[test]
fn test_default_market_rejects_unknown_value() {
    let result = "frankfurt".parse::<Market>();
    assert!(result.is_err());
    let msg = format!("{:?}", result.err().unwrap());
    assert!(msg.contains("Invalid market"));
}
