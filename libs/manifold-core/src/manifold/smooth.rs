//! Import with smoothing.
//!
//! Tangent generation itself is pluggable through [`TangentBuilder`]. This
//! module validates the inputs, hands them to the builder, and checks what
//! comes back.

use glam::DVec4;
use tracing::debug;

use super::mesh_impl::MeshImpl;
use super::Manifold;
use crate::config::KernelConfig;
use crate::core::ds::Smoothness;
use crate::error::{ManifoldError, ManifoldResult};
use crate::mesh::Mesh;

/// Produces one tangent per half-edge for a freshly imported mesh.
///
/// A tangent's `xyz` is the Bézier handle leaving the half-edge's start
/// vertex; `w` is its weight.
pub trait TangentBuilder {
    /// Builds tangents for `mesh`, honoring the validated `sharpened` edges.
    fn create_tangents(&self, mesh: &MeshImpl, sharpened: &[Smoothness]) -> Vec<DVec4>;
}

/// Tangents along the straight edges, so refinement reproduces the flat mesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTangents;

impl TangentBuilder for LinearTangents {
    fn create_tangents(&self, mesh: &MeshImpl, _sharpened: &[Smoothness]) -> Vec<DVec4> {
        let pos = mesh.vert_pos();
        mesh.halfedges()
            .iter()
            .map(|he| ((pos[he.end_vert as usize] - pos[he.start_vert as usize]) / 3.0).extend(1.0))
            .collect()
    }
}

impl Manifold {
    /// Imports `mesh` and attaches tangents from `builder`.
    ///
    /// Edges not listed in `sharpened` are fully smooth.
    ///
    /// ## Errors
    ///
    /// - [`ManifoldError::TangentsAlreadyPresent`] if `mesh` carries tangents
    /// - [`ManifoldError::IndexOutOfBounds`] for a sharpened half-edge outside the mesh
    /// - [`ManifoldError::TangentCountMismatch`] if the builder returns the wrong count
    /// - any import error of [`Manifold::from_mesh`]
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_core::{LinearTangents, Manifold, Smoothness};
    ///
    /// let mesh = Manifold::tetrahedron().get_mesh();
    /// let smooth = Manifold::smooth(&mesh, &[Smoothness::new(0, 0.0)], &LinearTangents).unwrap();
    /// assert_eq!(smooth.get_mesh().halfedge_tangent.len(), 4 * 12);
    /// ```
    pub fn smooth(
        mesh: &Mesh,
        sharpened: &[Smoothness],
        builder: &impl TangentBuilder,
    ) -> ManifoldResult<Self> {
        if mesh.has_tangents() {
            return Err(ManifoldError::TangentsAlreadyPresent {
                count: mesh.halfedge_tangent.len(),
            });
        }

        let mut imported = MeshImpl::from_mesh(mesh, &KernelConfig::default())?;
        let sharpened = imported.update_sharpened_edges(sharpened)?;
        let tangents = builder.create_tangents(&imported, &sharpened);
        if tangents.len() != imported.num_halfedge() {
            return Err(ManifoldError::TangentCountMismatch {
                expected: imported.num_halfedge(),
                actual: tangents.len(),
            });
        }
        imported.halfedge_tangent = tangents;

        debug!(
            num_tri = imported.num_tri(),
            sharpened = sharpened.len(),
            "smoothed mesh"
        );
        Ok(Self::from_impl(imported))
    }
}
