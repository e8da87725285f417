//! # Error Types
//!
//! Error types for manifold operations. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - Invalid primitive sizes produce the `Manifold::invalid()` sentinel, not an error
//! - Malformed input buffers and violated preconditions return an error
//! - Decomposition and composition never fail

use crate::config::KernelConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during manifold operations.
///
/// ## Example
///
/// ```rust
/// use manifold_core::{Manifold, ManifoldError, Mesh};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(0.0, 0.0, 0.0);
/// mesh.add_triangle(0, 1, 2);
///
/// match Manifold::from_mesh(&mesh) {
///     Ok(m) => println!("Success: {} vertices", m.num_vert()),
///     Err(ManifoldError::IndexOutOfBounds(msg)) => eprintln!("Bad index: {}", msg),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ManifoldError {
    /// Mesh buffers have inconsistent lengths.
    ///
    /// Contains a description of the offending buffer.
    #[error("Invalid mesh buffers: {0}")]
    InvalidMesh(String),

    /// A vertex or half-edge index points outside its array.
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(String),

    /// The mesh is not manifold (watertight with consistent orientation).
    #[error("Mesh is not manifold: {0}")]
    NonManifoldError(String),

    /// Smoothing was requested on a mesh that already carries tangents.
    #[error("Mesh already carries {count} halfedge tangent values; smoothing requires a mesh without tangents")]
    TangentsAlreadyPresent {
        /// Number of tangent floats found on the input mesh.
        count: usize,
    },

    /// The tangent builder returned the wrong number of tangents.
    #[error("Tangent builder returned {actual} tangents, expected one per halfedge ({expected})")]
    TangentCountMismatch {
        /// Number of half-edges in the mesh.
        expected: usize,
        /// Number of tangents returned.
        actual: usize,
    },

    /// Invalid kernel configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] KernelConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for manifold operations.
///
/// ## Example
///
/// ```rust
/// use manifold_core::error::ManifoldResult;
/// use manifold_core::Manifold;
///
/// fn create_solid() -> ManifoldResult<Manifold> {
///     // ... construction logic
///     # Ok(Manifold::tetrahedron())
/// }
/// ```
pub type ManifoldResult<T> = Result<T, ManifoldError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let bounds_err = ManifoldError::IndexOutOfBounds("vertex 9 of 8".to_string());
        assert!(bounds_err.to_string().contains("Index out of bounds"));

        let tangent_err = ManifoldError::TangentCountMismatch {
            expected: 36,
            actual: 12,
        };
        assert!(tangent_err.to_string().contains("36"));
        assert!(tangent_err.to_string().contains("12"));
    }

    /// Test error types are Send + Sync for async compatibility.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ManifoldError>();
    }
}
