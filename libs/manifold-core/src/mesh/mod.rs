//! # Mesh Module
//!
//! Flat triangle buffers used to move geometry into and out of the kernel.
//!
//! ## Example
//!
//! ```rust
//! use manifold_core::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
//! let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
//! let v2 = mesh.add_vertex(0.5, 1.0, 0.0);
//! mesh.add_triangle(v0, v1, v2);
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Triangle mesh as flat buffers.
///
/// ## Memory Layout
///
/// - `vertices`: [x0, y0, z0, x1, y1, z1, ...] - 3 floats per vertex
/// - `indices`: [i0, i1, i2, ...] - 3 indices per triangle
/// - `halfedge_tangent`: [x, y, z, w, ...] - 4 floats per half-edge, or empty
///
/// Half-edge `3t + i` of the tangent buffer runs from corner `i` of triangle
/// `t` to corner `(i + 1) % 3`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions: [x0, y0, z0, x1, y1, z1, ...]
    pub vertices: Vec<f32>,

    /// Triangle indices: [i0, i1, i2, ...]
    pub indices: Vec<u32>,

    /// Optional half-edge tangents: [x, y, z, w, ...]
    ///
    /// Empty unless the mesh was smoothed.
    pub halfedge_tangent: Vec<f32>,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create mesh with pre-allocated capacity.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_core::Mesh;
    ///
    /// // Pre-allocate for a cube (8 vertices, 12 triangles)
    /// let mesh = Mesh::with_capacity(8, 12);
    /// assert!(mesh.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity * 3),
            indices: Vec::with_capacity(triangle_capacity * 3),
            halfedge_tangent: Vec::new(),
        }
    }

    // =========================================================================
    // BUILDERS
    // =========================================================================

    /// Add a vertex and return its index.
    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) -> u32 {
        let index = (self.vertices.len() / 3) as u32;
        self.vertices.extend_from_slice(&[x, y, z]);
        index
    }

    /// Add a triangle by vertex indices (counter-clockwise seen from outside).
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Get the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Get the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns true if the mesh carries half-edge tangents.
    #[must_use]
    pub fn has_tangents(&self) -> bool {
        !self.halfedge_tangent.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
