//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_precision_is_positive() {
    assert!(K_PRECISION > 0.0, "K_PRECISION must be positive");
}

#[test]
fn test_single_precision_coarser_than_double() {
    assert!(
        SINGLE_PRECISION > K_PRECISION,
        "f32 buffers cannot be more precise than the f64 kernel"
    );
}

// =============================================================================
// THRESHOLD TESTS
// =============================================================================

#[test]
fn test_thresholds_are_ordered() {
    // Cheaper per-element work needs larger batches to amortize dispatch
    assert!(SEQ_THRESHOLD < INDEXED_SEQ_THRESHOLD);
    assert!(INDEXED_SEQ_THRESHOLD < COPY_SEQ_THRESHOLD);
}

#[test]
fn test_default_config_uses_constants() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.precision, K_PRECISION);
}
