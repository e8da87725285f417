//! # Config Crate
//!
//! Centralized configuration constants for the manifold kernel workspace.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{K_PRECISION, SEQ_THRESHOLD};
//!
//! // Mesh epsilon grows with the size of the geometry
//! let scale = 1000.0;
//! let epsilon = K_PRECISION * scale;
//! assert!(epsilon < 1e-8);
//!
//! // Bulk operations at or below the threshold stay on the calling thread
//! let workload = 500;
//! assert!(workload <= SEQ_THRESHOLD);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
