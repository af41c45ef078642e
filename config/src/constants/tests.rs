//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_policy_is_valid() {
    let policy = MarginPolicy::default();
    assert!(policy.margin_fraction > 0.0);
    assert!(policy.min_margin_cells > 0.0);
    assert_eq!(
        MarginPolicy::new(policy.margin_fraction, policy.min_margin_cells),
        Ok(policy)
    );
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::MarginPolicy;
/// assert!(MarginPolicy::new(-0.1, 0.5).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        MarginPolicy::new(-0.1, 0.5).unwrap_err(),
        ConfigError::InvalidMarginFraction(-0.1)
    );
    assert_eq!(
        MarginPolicy::new(0.05, -1.0).unwrap_err(),
        ConfigError::InvalidMinMarginCells(-1.0)
    );
    assert!(matches!(
        MarginPolicy::new(f64::NAN, 0.5),
        Err(ConfigError::InvalidMarginFraction(_))
    ));
    assert!(matches!(
        MarginPolicy::new(0.05, f64::INFINITY),
        Err(ConfigError::InvalidMinMarginCells(_))
    ));
}

#[test]
fn zero_fraction_is_allowed() {
    let policy = MarginPolicy::new(0.0, 1.0).unwrap();
    assert_eq!(policy.margin(100.0, 0.2), 0.2);
}

#[test]
fn error_messages_name_the_parameter() {
    assert!(ConfigError::InvalidMarginFraction(-1.0)
        .to_string()
        .contains("margin_fraction"));
    assert!(ConfigError::InvalidMinMarginCells(0.0)
        .to_string()
        .contains("min_margin_cells"));
}
