//! # Solid Constructors
//!
//! Primitive shapes and mesh import.
//!
//! Shapes get their epsilon from their own bounds. Imported meshes also
//! raise the tolerance to single-precision resolution, since their buffers
//! are `f32`.

use tracing::{debug, error};

use super::mesh_impl::{MeshImpl, Status};
use super::Manifold;
use crate::config::KernelConfig;
use crate::core::vec3::Vec3;
use crate::error::ManifoldResult;
use crate::mesh::Mesh;

// =============================================================================
// CUBE
// =============================================================================

/// Unit cube corners: bottom face (z = 0) counter-clockwise, then top face.
const CUBE_VERTS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Two outward-facing triangles per face.
const CUBE_TRIS: [[u32; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [2, 3, 7],
    [2, 7, 6],
    [3, 0, 4],
    [3, 4, 7],
    [1, 2, 6],
    [1, 6, 5],
];

// =============================================================================
// TETRAHEDRON
// =============================================================================

const TETRA_VERTS: [[f64; 3]; 4] = [
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, 1.0],
];

const TETRA_TRIS: [[u32; 3]; 4] = [[2, 0, 1], [0, 3, 1], [2, 3, 0], [1, 3, 2]];

impl Manifold {
    /// Axis-aligned box spanning `[0, size]`, or centered on the origin.
    ///
    /// Returns [`Manifold::invalid`] if any component of `size` is negative
    /// or all of them are zero.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_core::{Manifold, Status, Vec3};
    ///
    /// let cube = Manifold::cube(Vec3::new(2.0, 3.0, 4.0), true);
    /// assert_eq!(cube.num_tri(), 12);
    /// assert_eq!(cube.bounding_box().min, Vec3::new(-1.0, -1.5, -2.0));
    ///
    /// let bad = Manifold::cube(Vec3::new(1.0, -1.0, 1.0), false);
    /// assert!(bad.is_empty());
    /// assert_eq!(bad.status(), Status::InvalidConstruction);
    /// ```
    #[must_use]
    pub fn cube(size: Vec3, center: bool) -> Self {
        if size.min_element() < 0.0 || size.length() == 0.0 {
            debug!(?size, "rejecting cube size");
            return Self::invalid();
        }
        let offset = if center { -size / 2.0 } else { Vec3::ZERO };
        let verts = CUBE_VERTS
            .iter()
            .map(|&p| Vec3::from_array(p) * size + offset)
            .collect();
        Self::from_shape(verts, &CUBE_TRIS)
    }

    /// Regular tetrahedron inscribed in the cube `[-1, 1]³`.
    #[must_use]
    pub fn tetrahedron() -> Self {
        let verts = TETRA_VERTS.iter().map(|&p| Vec3::from_array(p)).collect();
        Self::from_shape(verts, &TETRA_TRIS)
    }

    fn from_shape(verts: Vec<Vec3>, tris: &[[u32; 3]]) -> Self {
        match MeshImpl::from_triangles(verts, tris) {
            Ok(mut mesh) => {
                mesh.set_epsilon(0.0, false);
                Self::from_impl(mesh)
            }
            Err(err) => {
                error!(%err, "primitive failed to build");
                Self::from_impl(MeshImpl::with_status(Status::NotManifold))
            }
        }
    }

    // =========================================================================
    // IMPORT
    // =========================================================================

    /// Imports a closed mesh with the default configuration.
    ///
    /// Fails on inconsistent buffer lengths, out-of-range vertex indices, or
    /// edges that do not pair up.
    pub fn from_mesh(mesh: &Mesh) -> ManifoldResult<Self> {
        Self::from_mesh_with_config(mesh, &KernelConfig::default())
    }

    /// Imports a closed mesh with relative `precision` in place of the
    /// default.
    ///
    /// Fails with [`ManifoldError::Config`](crate::ManifoldError::Config) if `precision` is not positive
    /// and finite.
    pub fn from_mesh_with_precision(mesh: &Mesh, precision: f64) -> ManifoldResult<Self> {
        let config = KernelConfig::new(precision)?;
        Self::from_mesh_with_config(mesh, &config)
    }

    /// Imports a closed mesh, deriving precision from `config`.
    pub fn from_mesh_with_config(mesh: &Mesh, config: &KernelConfig) -> ManifoldResult<Self> {
        let mesh = MeshImpl::from_mesh(mesh, config)?;
        debug!(
            num_vert = mesh.num_vert(),
            num_tri = mesh.num_tri(),
            epsilon = mesh.epsilon(),
            "imported mesh"
        );
        Ok(Self::from_impl(mesh))
    }
}
