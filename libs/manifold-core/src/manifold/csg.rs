//! Lazy expression tree behind [`Manifold`](super::Manifold) handles.
//!
//! Transforms are recorded rather than applied; the mesh is realized the
//! first time something reads it, and the result is kept.

use std::sync::{Arc, OnceLock};

use glam::DAffine3;
use tracing::trace;

use super::mesh_impl::MeshImpl;

/// Node of the CSG tree.
#[derive(Debug)]
pub enum CsgNode {
    /// A realized mesh.
    Leaf(Arc<MeshImpl>),
    /// A mesh with a pending affine transform.
    Transform {
        /// Untransformed mesh.
        child: Arc<MeshImpl>,
        /// Transform to apply, composed across stacked calls.
        transform: DAffine3,
        /// Memoized result of applying `transform` to `child`.
        realized: OnceLock<Arc<MeshImpl>>,
    },
}

impl CsgNode {
    /// Wraps a finished mesh.
    pub fn leaf(mesh: MeshImpl) -> Self {
        Self::Leaf(Arc::new(mesh))
    }

    /// Returns this node with `transform` applied after any pending one.
    ///
    /// Transforms never nest: a transform of a transform composes the two
    /// matrices over the same child.
    pub fn transformed(&self, transform: &DAffine3) -> Self {
        let (child, pending) = match self {
            Self::Leaf(mesh) => (Arc::clone(mesh), DAffine3::IDENTITY),
            Self::Transform {
                child,
                transform: pending,
                ..
            } => (Arc::clone(child), *pending),
        };
        Self::Transform {
            child,
            transform: *transform * pending,
            realized: OnceLock::new(),
        }
    }

    /// Realizes the node to a mesh.
    pub fn to_leaf(&self) -> Arc<MeshImpl> {
        match self {
            Self::Leaf(mesh) => Arc::clone(mesh),
            Self::Transform {
                child,
                transform,
                realized,
            } => Arc::clone(realized.get_or_init(|| {
                trace!(num_vert = child.num_vert(), "applying pending transform");
                Arc::new(child.transformed(transform))
            })),
        }
    }
}
