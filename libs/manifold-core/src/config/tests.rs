//! Tests covering kernel configuration behavior.

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.precision, K_PRECISION);
    assert_eq!(cfg.single_precision, SINGLE_PRECISION);
}

#[test]
fn builder_validates_input() {
    let err = KernelConfig::new(0.0).unwrap_err();
    assert_eq!(err, KernelConfigError(ConfigError::InvalidPrecision(0.0)));
    assert!(err.to_string().contains("precision"));
    assert!(KernelConfig::new(f64::NAN).is_err());
}

#[test]
fn builder_keeps_single_precision() {
    let cfg = KernelConfig::new(1.0e-9).unwrap();
    assert_eq!(cfg.precision, 1.0e-9);
    assert_eq!(cfg.single_precision, SINGLE_PRECISION);
}

#[test]
fn default_thresholds_match_constants() {
    let t = PolicyThresholds::DEFAULT;
    assert_eq!(t.elementwise, SEQ_THRESHOLD);
    assert_eq!(t.indexed, INDEXED_SEQ_THRESHOLD);
    assert_eq!(t.copy, COPY_SEQ_THRESHOLD);
}
