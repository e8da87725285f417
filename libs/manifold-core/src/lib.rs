//! Connectivity and bulk-transform core of a manifold mesh kernel.
//!
//! This crate provides index-based half-edge meshes behind shared handles,
//! the sequential/parallel bulk array primitives every mesh operation is
//! built on, and the Compose/Decompose pair that merges solids and splits
//! them into connected components while carrying their precision along.

pub mod config;
pub mod core;
pub mod error;
pub mod manifold;
pub mod mesh;
pub mod parallel;

pub use crate::config::KernelConfig;
pub use crate::core::ds::{HalfEdge, Smoothness};
pub use crate::core::vec3::{BoundingBox, Vec3};
pub use error::{ManifoldError, ManifoldResult};
pub use manifold::mesh_impl::{MeshImpl, Status};
pub use manifold::smooth::{LinearTangents, TangentBuilder};
pub use manifold::Manifold;
pub use mesh::Mesh;
pub use parallel::ExecutionPolicy;
