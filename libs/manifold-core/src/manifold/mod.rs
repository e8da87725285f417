//! # Manifold Module
//!
//! Shared handles to watertight solids.
//!
//! ## Structure
//!
//! - `mesh_impl`: the half-edge mesh and its precision metadata
//! - `csg`: lazy transform nodes realized on first read
//! - `constructors`: cube, tetrahedron and mesh import
//! - `smooth`: import with sharpened edges and generated tangents
//! - `compose`: disjoint union and connected-component split
//!
//! ## Example
//!
//! ```rust
//! use manifold_core::{Manifold, Vec3};
//!
//! let a = Manifold::cube(Vec3::splat(1.0), false);
//! let b = a.translate(Vec3::new(3.0, 0.0, 0.0));
//! let both = Manifold::compose(&[a, b]);
//! assert_eq!(both.decompose().len(), 2);
//! ```

pub mod compose;
pub mod constructors;
pub mod csg;
pub mod mesh_impl;
pub mod smooth;


use std::sync::Arc;

use glam::DAffine3;

use crate::core::vec3::{BoundingBox, Vec3};
use crate::mesh::Mesh;
use csg::CsgNode;
use mesh_impl::{MeshImpl, Status};

// =============================================================================
// MANIFOLD STRUCT
// =============================================================================

/// Cheap-to-clone handle to an immutable solid.
///
/// Clones share the same node. Every operation returns a new handle and
/// leaves its inputs untouched.
#[derive(Debug, Clone)]
pub struct Manifold {
    node: Arc<CsgNode>,
}

impl Manifold {
    pub(crate) fn from_impl(mesh: MeshImpl) -> Self {
        Self::from_node(CsgNode::leaf(mesh))
    }

    pub(crate) fn from_arc(mesh: Arc<MeshImpl>) -> Self {
        Self::from_node(CsgNode::Leaf(mesh))
    }

    fn from_node(node: CsgNode) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Realized mesh behind this handle.
    pub fn mesh_impl(&self) -> Arc<MeshImpl> {
        self.node.to_leaf()
    }

    // =========================================================================
    // SENTINELS
    // =========================================================================

    /// An empty solid.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_impl(MeshImpl::new())
    }

    /// The empty solid returned for invalid constructor parameters.
    #[must_use]
    pub fn invalid() -> Self {
        Self::from_impl(MeshImpl::with_status(Status::InvalidConstruction))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Construction status.
    pub fn status(&self) -> Status {
        self.mesh_impl().status()
    }

    /// Returns true if the solid has no triangles.
    pub fn is_empty(&self) -> bool {
        self.mesh_impl().is_empty()
    }

    /// Number of vertices.
    pub fn num_vert(&self) -> usize {
        self.mesh_impl().num_vert()
    }

    /// Number of triangles.
    pub fn num_tri(&self) -> usize {
        self.mesh_impl().num_tri()
    }

    /// Number of undirected edges.
    pub fn num_edge(&self) -> usize {
        self.mesh_impl().num_edge()
    }

    /// Numerical tolerance of geometric predicates on this solid.
    pub fn epsilon(&self) -> f64 {
        self.mesh_impl().epsilon()
    }

    /// Minimum feature size.
    pub fn tolerance(&self) -> f64 {
        self.mesh_impl().tolerance()
    }

    /// Axis-aligned bounds.
    pub fn bounding_box(&self) -> BoundingBox {
        self.mesh_impl().bounding_box()
    }

    /// Exports the solid to flat buffers.
    pub fn get_mesh(&self) -> Mesh {
        self.mesh_impl().to_mesh()
    }

    /// Returns true if both handles read the same mesh instance.
    pub fn shares_impl(&self, other: &Manifold) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || Arc::ptr_eq(&self.mesh_impl(), &other.mesh_impl())
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Moves the solid by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vec3) -> Self {
        self.transform(&DAffine3::from_translation(offset))
    }

    /// Applies an affine transform. The mesh is computed on first read.
    #[must_use]
    pub fn transform(&self, transform: &DAffine3) -> Self {
        Self::from_node(self.node.transformed(transform))
    }

    /// Returns a copy whose tolerance is `tolerance`, or epsilon if larger.
    #[must_use]
    pub fn set_tolerance(&self, tolerance: f64) -> Self {
        let mut mesh = MeshImpl::clone(&self.mesh_impl());
        mesh.tolerance = tolerance.max(mesh.epsilon);
        Self::from_impl(mesh)
    }
}
