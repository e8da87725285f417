//! # Mesh Implementation
//!
//! The shared, immutable geometry behind every [`Manifold`](super::Manifold)
//! handle: vertex positions, paired half-edges, face normals, optional
//! half-edge tangents, and the precision values (`epsilon`, `tolerance`)
//! that travel with the mesh.
//!
//! Instances are built mutably, then frozen behind an `Arc`. Structural
//! changes always go through a fresh instance.


use std::collections::HashMap;

use glam::{DAffine3, DMat3, DVec4};

use crate::config::KernelConfig;
use crate::core::ds::{face_of, HalfEdge, Smoothness, NO_INDEX};
use crate::core::vec3::{BoundingBox, Vec3};
use crate::error::{ManifoldError, ManifoldResult};
use crate::mesh::Mesh;
use crate::parallel::{
    for_each_auto, for_each_indexed_auto, scatter_auto, sequence_auto, transform_reduce_auto,
    transform_reduce_index_auto,
};

// =============================================================================
// STATUS
// =============================================================================

/// Construction outcome carried by every mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The mesh is valid.
    #[default]
    NoError,
    /// A constructor received parameters that describe no solid.
    InvalidConstruction,
    /// Half-edge pairing failed while building the mesh.
    NotManifold,
}

// =============================================================================
// MESH IMPL
// =============================================================================

/// Half-edge mesh with its precision metadata.
#[derive(Debug, Clone, Default)]
pub struct MeshImpl {
    pub(crate) vert_pos: Vec<Vec3>,
    pub(crate) halfedge: Vec<HalfEdge>,
    pub(crate) face_normal: Vec<Vec3>,
    pub(crate) halfedge_tangent: Vec<DVec4>,
    pub(crate) bbox: BoundingBox,
    pub(crate) epsilon: f64,
    pub(crate) tolerance: f64,
    pub(crate) status: Status,
}

impl MeshImpl {
    /// Creates an empty, valid mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh flagged with `status`.
    #[must_use]
    pub fn with_status(status: Status) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Builds a finished mesh from positions and counter-clockwise triangles.
    ///
    /// Epsilon is left at zero; callers pick the precision source through
    /// [`set_epsilon`](Self::set_epsilon).
    pub fn from_triangles(vert_pos: Vec<Vec3>, tris: &[[u32; 3]]) -> ManifoldResult<Self> {
        let num_vert = vert_pos.len();
        if let Some(bad) = tris.iter().flatten().find(|&&v| v as usize >= num_vert) {
            return Err(ManifoldError::IndexOutOfBounds(format!(
                "vertex {bad} referenced, mesh has {num_vert}"
            )));
        }
        let mut mesh = Self {
            vert_pos,
            ..Self::default()
        };
        mesh.create_halfedges(tris)?;
        mesh.finish();
        Ok(mesh)
    }

    /// Imports flat mesh buffers.
    ///
    /// Buffers are single precision, so the tolerance is raised to the
    /// float resolution at the mesh's scale.
    pub fn from_mesh(mesh: &Mesh, config: &KernelConfig) -> ManifoldResult<Self> {
        if mesh.vertices.len() % 3 != 0 {
            return Err(ManifoldError::InvalidMesh(format!(
                "vertex buffer length {} is not a multiple of 3",
                mesh.vertices.len()
            )));
        }
        if mesh.indices.len() % 3 != 0 {
            return Err(ManifoldError::InvalidMesh(format!(
                "index buffer length {} is not a multiple of 3",
                mesh.indices.len()
            )));
        }
        if mesh.has_tangents() && mesh.halfedge_tangent.len() != 4 * mesh.indices.len() {
            return Err(ManifoldError::InvalidMesh(format!(
                "tangent buffer length {} does not match {} halfedges",
                mesh.halfedge_tangent.len(),
                mesh.indices.len()
            )));
        }

        let vert_pos = mesh
            .vertices
            .chunks_exact(3)
            .map(|p| Vec3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])))
            .collect();
        let tris: Vec<[u32; 3]> = mesh
            .indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();

        let mut result = Self::from_triangles(vert_pos, &tris)?;
        result.halfedge_tangent = mesh
            .halfedge_tangent
            .chunks_exact(4)
            .map(|t| {
                DVec4::new(
                    f64::from(t[0]),
                    f64::from(t[1]),
                    f64::from(t[2]),
                    f64::from(t[3]),
                )
            })
            .collect();
        result.set_epsilon_with(config, 0.0, true);
        Ok(result)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Number of vertices.
    pub fn num_vert(&self) -> usize {
        self.vert_pos.len()
    }

    /// Number of triangles.
    pub fn num_tri(&self) -> usize {
        self.halfedge.len() / 3
    }

    /// Number of half-edges.
    pub fn num_halfedge(&self) -> usize {
        self.halfedge.len()
    }

    /// Number of undirected edges.
    pub fn num_edge(&self) -> usize {
        self.halfedge.len() / 2
    }

    /// Returns true if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.halfedge.is_empty()
    }

    /// Construction status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Numerical tolerance of geometric predicates on this mesh.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Minimum feature size.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Axis-aligned bounds of the vertices.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Vertex positions.
    pub fn vert_pos(&self) -> &[Vec3] {
        &self.vert_pos
    }

    /// Half-edges, three per triangle.
    pub fn halfedges(&self) -> &[HalfEdge] {
        &self.halfedge
    }

    /// Unit face normals, one per triangle.
    pub fn face_normals(&self) -> &[Vec3] {
        &self.face_normal
    }

    /// Half-edge tangents, empty unless the mesh was smoothed.
    pub fn halfedge_tangents(&self) -> &[DVec4] {
        &self.halfedge_tangent
    }

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Replaces the half-edges with those of `tris` and pairs them.
    ///
    /// Fails if a directed edge occurs twice, an edge is degenerate, or a
    /// half-edge has no opposite.
    pub fn create_halfedges(&mut self, tris: &[[u32; 3]]) -> ManifoldResult<()> {
        let mut halfedge = Vec::with_capacity(3 * tris.len());
        let mut directed: HashMap<(u32, u32), u32> = HashMap::with_capacity(3 * tris.len());

        for (tri, verts) in tris.iter().enumerate() {
            for i in 0..3 {
                let edge = (3 * tri + i) as u32;
                let (start, end) = (verts[i], verts[(i + 1) % 3]);
                if start == end {
                    return Err(ManifoldError::NonManifoldError(format!(
                        "triangle {tri} has a degenerate edge at vertex {start}"
                    )));
                }
                if directed.insert((start, end), edge).is_some() {
                    return Err(ManifoldError::NonManifoldError(format!(
                        "directed edge {start} -> {end} appears more than once"
                    )));
                }
                halfedge.push(HalfEdge::new(start, end, NO_INDEX));
            }
        }

        for (edge, he) in halfedge.iter_mut().enumerate() {
            match directed.get(&(he.end_vert, he.start_vert)) {
                Some(&pair) => he.pair_edge = pair,
                None => {
                    return Err(ManifoldError::NonManifoldError(format!(
                        "halfedge {edge} ({} -> {}) has no opposite",
                        he.start_vert, he.end_vert
                    )))
                }
            }
        }

        self.halfedge = halfedge;
        Ok(())
    }

    /// Checks that the half-edges form a closed, consistently paired mesh.
    pub fn is_manifold(&self) -> bool {
        let n = self.halfedge.len();
        if n % 3 != 0 {
            return false;
        }
        let num_vert = self.vert_pos.len();
        let halfedge = &self.halfedge;
        transform_reduce_index_auto(
            0..n,
            true,
            |a, b| a && b,
            |edge| {
                let he = halfedge[edge];
                let pair = he.pair_edge as usize;
                if pair >= n || pair == edge {
                    return false;
                }
                let twin = halfedge[pair];
                (he.start_vert as usize) < num_vert
                    && (he.end_vert as usize) < num_vert
                    && twin.pair_edge as usize == edge
                    && twin.start_vert == he.end_vert
                    && twin.end_vert == he.start_vert
            },
        )
    }

    /// Sets epsilon from the bounding box with the default configuration.
    pub fn set_epsilon(&mut self, min_epsilon: f64, use_single: bool) {
        self.set_epsilon_with(&KernelConfig::default(), min_epsilon, use_single);
    }

    /// Sets epsilon to at least `min_epsilon` and the configured precision at
    /// this mesh's scale; tolerance never drops below epsilon.
    ///
    /// `use_single` marks data that passed through `f32` buffers.
    pub fn set_epsilon_with(&mut self, config: &KernelConfig, min_epsilon: f64, use_single: bool) {
        let scale = self.bbox.scale();
        let epsilon = min_epsilon.max(config.precision * scale);
        self.epsilon = if epsilon.is_finite() { epsilon } else { 0.0 };
        self.tolerance = self.tolerance.max(self.epsilon);
        if use_single {
            let single = config.single_precision * scale;
            if single.is_finite() {
                self.tolerance = self.tolerance.max(single);
            }
        }
    }

    /// Recomputes the bounding box and face normals.
    pub fn finish(&mut self) {
        self.bbox = transform_reduce_auto(
            &self.vert_pos,
            BoundingBox::empty(),
            |a, b| a.union(&b),
            |&p| BoundingBox::new(p, p),
        );

        let (vert_pos, halfedge) = (&self.vert_pos, &self.halfedge);
        let mut face_normal = vec![Vec3::ZERO; halfedge.len() / 3];
        for_each_indexed_auto(&mut face_normal, |tri, normal| {
            let a = vert_pos[halfedge[3 * tri].start_vert as usize];
            let b = vert_pos[halfedge[3 * tri + 1].start_vert as usize];
            let c = vert_pos[halfedge[3 * tri + 2].start_vert as usize];
            *normal = (b - a).cross(c - a).normalize_or_zero();
        });
        self.face_normal = face_normal;
    }

    // =========================================================================
    // REINDEXING
    // =========================================================================

    /// Fills this mesh with the triangles `face_new2old` of `old`.
    ///
    /// Pairs are remapped into the new numbering, so every selected triangle's
    /// neighbours must be selected too. Vertex references still point into
    /// `old`; follow with [`reindex_verts`](Self::reindex_verts).
    ///
    /// Panics if `face_new2old` is not strictly increasing.
    pub fn gather_faces(&mut self, old: &MeshImpl, face_new2old: &[u32]) {
        assert!(
            face_new2old.windows(2).all(|w| w[0] < w[1]),
            "face map must be strictly increasing"
        );
        let mut ids = vec![0u32; face_new2old.len()];
        sequence_auto(&mut ids);
        let mut face_old2new = vec![NO_INDEX; old.num_tri()];
        // SAFETY: a strictly increasing map is injective.
        unsafe { scatter_auto(&ids, face_new2old, &mut face_old2new) };

        let mut halfedge = vec![HalfEdge::default(); 3 * face_new2old.len()];
        for_each_indexed_auto(&mut halfedge, |edge, slot| {
            let old_edge = 3 * face_new2old[edge / 3] as usize + edge % 3;
            let mut he = old.halfedge[old_edge];
            let pair_face = face_old2new[face_of(he.pair_edge) as usize];
            debug_assert_ne!(pair_face, NO_INDEX, "pair triangle was not selected");
            he.pair_edge = 3 * pair_face + he.pair_edge % 3;
            *slot = he;
        });
        self.halfedge = halfedge;

        if !old.halfedge_tangent.is_empty() {
            let mut tangent = vec![DVec4::ZERO; self.halfedge.len()];
            for_each_indexed_auto(&mut tangent, |edge, slot| {
                *slot = old.halfedge_tangent[3 * face_new2old[edge / 3] as usize + edge % 3];
            });
            self.halfedge_tangent = tangent;
        }
    }

    /// Renumbers half-edge vertex references after keeping only the old
    /// vertices `vert_new2old` out of `old_num_vert`.
    ///
    /// Panics if `vert_new2old` is not strictly increasing.
    pub fn reindex_verts(&mut self, vert_new2old: &[u32], old_num_vert: usize) {
        assert!(
            vert_new2old.windows(2).all(|w| w[0] < w[1]),
            "vertex map must be strictly increasing"
        );
        let mut ids = vec![0u32; vert_new2old.len()];
        sequence_auto(&mut ids);
        let mut vert_old2new = vec![NO_INDEX; old_num_vert];
        // SAFETY: a strictly increasing map is injective.
        unsafe { scatter_auto(&ids, vert_new2old, &mut vert_old2new) };

        for_each_auto(&mut self.halfedge, |he| {
            he.start_vert = vert_old2new[he.start_vert as usize];
            he.end_vert = vert_old2new[he.end_vert as usize];
        });
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Returns a copy with `transform` applied.
    ///
    /// Epsilon grows with the largest stretch of the linear part; tolerance
    /// is kept unless epsilon overtakes it. A mirroring transform flips the
    /// triangle winding so the normals stay outward.
    #[must_use]
    pub fn transformed(&self, transform: &DAffine3) -> Self {
        let mut result = self.clone();
        for_each_auto(&mut result.vert_pos, |p| *p = transform.transform_point3(*p));

        let linear = transform.matrix3;
        for_each_auto(&mut result.halfedge_tangent, |t| {
            *t = (linear * t.truncate()).extend(t.w);
        });
        if linear.determinant() < 0.0 {
            result.reverse_orientation();
        }

        result.finish();
        result.set_epsilon(self.epsilon * spectral_norm(linear), false);
        result
    }

    /// Reverses every triangle `(a, b, c)` into `(a, c, b)`.
    ///
    /// Half-edge `3t + i` becomes `3t + 2 - i` with its direction reversed.
    /// Tangents follow the directed edge they describe, which after the flip
    /// is the old twin.
    fn reverse_orientation(&mut self) {
        let flip = |edge: u32| edge - edge % 3 + 2 - edge % 3;
        let old = std::mem::take(&mut self.halfedge);
        let mut halfedge = vec![HalfEdge::default(); old.len()];
        for_each_indexed_auto(&mut halfedge, |edge, slot| {
            let he = old[flip(edge as u32) as usize];
            *slot = HalfEdge::new(he.end_vert, he.start_vert, flip(he.pair_edge));
        });
        self.halfedge = halfedge;

        if !self.halfedge_tangent.is_empty() {
            let tangents = std::mem::take(&mut self.halfedge_tangent);
            let mut flipped = vec![DVec4::ZERO; tangents.len()];
            for_each_indexed_auto(&mut flipped, |edge, slot| {
                *slot = tangents[old[flip(edge as u32) as usize].pair_edge as usize];
            });
            self.halfedge_tangent = flipped;
        }
    }

    // =========================================================================
    // SMOOTHING SUPPORT
    // =========================================================================

    /// Validates sharpened edges and clamps their smoothness to `[0, 1]`.
    pub fn update_sharpened_edges(&self, sharpened: &[Smoothness]) -> ManifoldResult<Vec<Smoothness>> {
        let n = self.halfedge.len();
        sharpened
            .iter()
            .map(|s| {
                if s.halfedge as usize >= n {
                    return Err(ManifoldError::IndexOutOfBounds(format!(
                        "sharpened halfedge {} of {n}",
                        s.halfedge
                    )));
                }
                Ok(Smoothness::new(s.halfedge, s.smoothness.clamp(0.0, 1.0)))
            })
            .collect()
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    /// Exports to flat single-precision buffers.
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(self.num_vert(), self.num_tri());
        for p in &self.vert_pos {
            mesh.add_vertex(p.x as f32, p.y as f32, p.z as f32);
        }
        for tri in self.halfedge.chunks_exact(3) {
            mesh.add_triangle(tri[0].start_vert, tri[1].start_vert, tri[2].start_vert);
        }
        mesh.halfedge_tangent = self
            .halfedge_tangent
            .iter()
            .flat_map(|t| t.to_array().map(|c| c as f32))
            .collect();
        mesh
    }

    /// Corner vertices of triangle `tri`.
    pub fn triangle(&self, tri: usize) -> [u32; 3] {
        let he = &self.halfedge[3 * tri..3 * tri + 3];
        [he[0].start_vert, he[1].start_vert, he[2].start_vert]
    }
}

/// Largest singular value of `m`, by power iteration on `mᵀm`.
pub(crate) fn spectral_norm(m: DMat3) -> f64 {
    let columns = [m.x_axis, m.y_axis, m.z_axis];
    let widest = (0..3)
        .max_by(|&a, &b| columns[a].length_squared().total_cmp(&columns[b].length_squared()))
        .unwrap_or(0);
    if columns[widest].length_squared() == 0.0 {
        return 0.0;
    }

    let gram = m.transpose() * m;
    let mut v = Vec3::AXES[widest];
    for _ in 0..32 {
        let w = gram * v;
        let len = w.length();
        if len == 0.0 {
            return 0.0;
        }
        v = w / len;
    }
    (m * v).length()
}
