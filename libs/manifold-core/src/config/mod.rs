//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace configuration so geometry components can
//! stay decoupled from literal constants.

use config::constants::{
    ConfigError, GlobalConfig, COPY_SEQ_THRESHOLD, INDEXED_SEQ_THRESHOLD, K_PRECISION,
    SEQ_THRESHOLD, SINGLE_PRECISION,
};

/// Geometry kernel configuration wrapper.
///
/// # Examples
/// ```
/// use manifold_core::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.precision > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Relative precision used to derive mesh epsilons from bounding boxes.
    pub precision: f64,
    /// Relative precision assumed for single-precision input buffers.
    pub single_precision: f64,
}

impl KernelConfig {
    /// Creates a configuration with an explicit relative precision,
    /// validated by the shared config crate.
    ///
    /// # Examples
    /// ```
    /// use manifold_core::config::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-10).unwrap();
    /// assert_eq!(cfg.precision, 1.0e-10);
    /// assert!(KernelConfig::new(-1.0).is_err());
    /// ```
    pub fn new(precision: f64) -> Result<Self, KernelConfigError> {
        GlobalConfig::new(precision)
            .map(|cfg| Self {
                precision: cfg.precision,
                single_precision: SINGLE_PRECISION,
            })
            .map_err(KernelConfigError)
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            precision: K_PRECISION,
            single_precision: SINGLE_PRECISION,
        }
    }
}

/// Workload sizes at or below which each family of bulk primitives stays
/// sequential.
///
/// # Examples
/// ```
/// use manifold_core::config::PolicyThresholds;
/// let t = PolicyThresholds::DEFAULT;
/// assert!(t.elementwise < t.indexed && t.indexed < t.copy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyThresholds {
    /// `for_each` and `transform_reduce`.
    pub elementwise: usize,
    /// `scatter`, `gather` and `sequence`.
    pub indexed: usize,
    /// `copy` and `copy_n`.
    pub copy: usize,
}

impl PolicyThresholds {
    /// Thresholds used by the `*_auto` primitives.
    pub const DEFAULT: Self = Self {
        elementwise: SEQ_THRESHOLD,
        indexed: INDEXED_SEQ_THRESHOLD,
        copy: COPY_SEQ_THRESHOLD,
    };
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfigError(ConfigError);

impl std::fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for KernelConfigError {}

#[cfg(test)]
mod tests;
