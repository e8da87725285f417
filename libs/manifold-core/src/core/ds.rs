//! Half-edge records and smoothing annotations.
//!
//! Triangles are stored implicitly: half-edges `3t`, `3t + 1` and `3t + 2`
//! belong to triangle `t`, and half-edge `3t + i` runs from corner `i` to
//! corner `(i + 1) % 3`. Only the twin link is stored explicitly.

/// Invalid index sentinel value.
pub const NO_INDEX: u32 = u32::MAX;

/// A half-edge in the half-edge data structure.
///
/// A half-edge is a directed edge. Each edge in a closed mesh is represented
/// by exactly two half-edges, one for each triangle sharing the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HalfEdge {
    /// Index of the vertex at the start of this half-edge.
    pub start_vert: u32,
    /// Index of the vertex at the end of this half-edge.
    pub end_vert: u32,
    /// Index of the paired half-edge (going in the opposite direction).
    pub pair_edge: u32,
}

impl HalfEdge {
    /// Creates a new half-edge.
    pub fn new(start_vert: u32, end_vert: u32, pair_edge: u32) -> Self {
        Self {
            start_vert,
            end_vert,
            pair_edge,
        }
    }

    /// Returns true for the canonical direction of this undirected edge.
    ///
    /// Exactly one of a half-edge and its pair is forward, so iterating only
    /// forward half-edges visits every undirected edge once.
    ///
    /// # Examples
    /// ```
    /// use manifold_core::core::ds::HalfEdge;
    /// assert!(HalfEdge::new(2, 5, 0).is_forward());
    /// assert!(!HalfEdge::new(5, 2, 0).is_forward());
    /// ```
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.start_vert < self.end_vert
    }
}

/// Triangle owning half-edge `edge`.
#[inline]
pub fn face_of(edge: u32) -> u32 {
    edge / 3
}

/// Desired smoothness of one half-edge, consumed before tangent generation.
///
/// The half-edge index is `3 * triangle + i`, where `i = 0` is the edge
/// between triangle corners 0 and 1. A smoothness of zero makes a sharp
/// crease; one (the default for unlisted edges) is fully smooth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothness {
    /// Half-edge index.
    pub halfedge: u32,
    /// Smoothness in `[0, 1]`.
    pub smoothness: f64,
}

impl Smoothness {
    /// Creates a smoothness annotation.
    pub fn new(halfedge: u32, smoothness: f64) -> Self {
        Self {
            halfedge,
            smoothness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_has_opposite_direction() {
        let he = HalfEdge::new(7, 3, 12);
        let pair = HalfEdge::new(he.end_vert, he.start_vert, 0);
        assert_ne!(he.is_forward(), pair.is_forward());
    }

    #[test]
    fn test_triangle_navigation() {
        assert_eq!(face_of(0), 0);
        assert_eq!(face_of(8), 2);
        assert!((6..9).all(|edge| face_of(edge) == 2));
        assert_eq!(face_of(9), 3);
    }

    #[test]
    fn test_no_index_sentinel() {
        assert_eq!(NO_INDEX, u32::MAX);
        assert_eq!(HalfEdge::default().pair_edge, 0);
    }
}
