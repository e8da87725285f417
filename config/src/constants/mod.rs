//! Centralized configuration values shared across the manifold workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION
// =============================================================================

/// Relative precision of double-precision geometry.
///
/// A mesh's epsilon is never smaller than this value times the largest
/// absolute coordinate of its bounding box.
///
/// # Examples
/// ```
/// use config::constants::K_PRECISION;
/// let scale = 100.0;
/// assert!(K_PRECISION * scale < 1.0e-9);
/// ```
pub const K_PRECISION: f64 = 1.0e-12;

/// Relative precision of single-precision input buffers.
///
/// Meshes imported from `f32` buffers keep a tolerance of at least this value
/// times their bounding box scale.
///
/// # Examples
/// ```
/// use config::constants::SINGLE_PRECISION;
/// assert_eq!(SINGLE_PRECISION, f32::EPSILON as f64);
/// ```
pub const SINGLE_PRECISION: f64 = f32::EPSILON as f64;

// =============================================================================
// EXECUTION POLICY THRESHOLDS
// =============================================================================

/// Workload size at or below which element-wise bulk operations run
/// sequentially.
///
/// # Examples
/// ```
/// use config::constants::SEQ_THRESHOLD;
/// assert_eq!(SEQ_THRESHOLD, 10_000);
/// ```
pub const SEQ_THRESHOLD: usize = 10_000;

/// Workload size at or below which scatter, gather and sequence run
/// sequentially.
///
/// # Examples
/// ```
/// use config::constants::{INDEXED_SEQ_THRESHOLD, SEQ_THRESHOLD};
/// assert!(INDEXED_SEQ_THRESHOLD > SEQ_THRESHOLD);
/// ```
pub const INDEXED_SEQ_THRESHOLD: usize = 100_000;

/// Workload size at or below which plain copies run sequentially.
///
/// # Examples
/// ```
/// use config::constants::{COPY_SEQ_THRESHOLD, INDEXED_SEQ_THRESHOLD};
/// assert!(COPY_SEQ_THRESHOLD > INDEXED_SEQ_THRESHOLD);
/// ```
pub const COPY_SEQ_THRESHOLD: usize = 1_000_000;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.precision > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Relative precision used to derive mesh epsilons.
    pub precision: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// precision.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-10).expect("valid config");
    /// assert_eq!(cfg.precision, 1.0e-10);
    /// ```
    pub fn new(precision: f64) -> Result<Self, ConfigError> {
        if !precision.is_finite() || precision <= 0.0 {
            return Err(ConfigError::InvalidPrecision(precision));
        }
        Ok(Self { precision })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            precision: K_PRECISION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when precision is zero, negative or not finite.
    InvalidPrecision(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrecision(value) => {
                write!(f, "precision must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
