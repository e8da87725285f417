//! Core data structures and types for the Manifold kernel.
//!
//! Includes vector aliases (`Vec3`), the bounding box, half-edge records and
//! the union-find used for connectivity analysis.

pub mod ds;
pub mod union_find;
pub mod vec3;
