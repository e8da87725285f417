//! # Compose / Decompose
//!
//! Disjoint union of solids and its inverse, the split into connected
//! components. Both are purely topological: epsilon and tolerance are carried
//! over, never recomputed.

use std::sync::Arc;

use glam::DVec4;
use tracing::{debug, error, trace};

use super::mesh_impl::{MeshImpl, Status};
use super::Manifold;
use crate::core::ds::{HalfEdge, NO_INDEX};
use crate::core::union_find::{ComponentLabels, UnionFind};
use crate::core::vec3::Vec3;
use crate::parallel::{copy_auto, for_each_auto, gather_auto};

impl Manifold {
    /// Combines solids into one without any geometric check.
    ///
    /// Inputs are concatenated in order. The result takes the largest
    /// epsilon and tolerance of its inputs, and keeps tangents only if every
    /// input has them. The inputs must not overlap; overlapping inputs give a
    /// self-intersecting result.
    ///
    /// If any input carries an error status, the result is empty with the
    /// first such status. A result too large for `u32` indices is empty with
    /// [`Status::InvalidConstruction`].
    #[must_use]
    pub fn compose(manifolds: &[Manifold]) -> Self {
        let meshes: Vec<Arc<MeshImpl>> = manifolds.iter().map(Manifold::mesh_impl).collect();

        if let Some((index, status)) = meshes
            .iter()
            .map(|mesh| mesh.status())
            .enumerate()
            .find(|(_, status)| *status != Status::NoError)
        {
            debug!(index, ?status, "compose input has an error status");
            return Self::from_impl(MeshImpl::with_status(status));
        }

        match meshes.as_slice() {
            [] => return Self::empty(),
            [single] => return Self::from_arc(Arc::clone(single)),
            _ => {}
        }

        let num_vert: usize = meshes.iter().map(|m| m.num_vert()).sum();
        let num_halfedge: usize = meshes.iter().map(|m| m.num_halfedge()).sum();
        if !fits_u32_indices(num_vert, num_halfedge) {
            error!(num_vert, num_halfedge, "composed mesh exceeds u32 indexing");
            return Self::from_impl(MeshImpl::with_status(Status::InvalidConstruction));
        }
        let with_tangents = meshes.iter().all(|m| !m.halfedge_tangent.is_empty());

        let mut combined = MeshImpl::new();
        combined.vert_pos = vec![Vec3::ZERO; num_vert];
        combined.halfedge = vec![HalfEdge::default(); num_halfedge];
        if with_tangents {
            combined.halfedge_tangent = vec![DVec4::ZERO; num_halfedge];
        }

        let (mut vert_offset, mut edge_offset) = (0usize, 0usize);
        for mesh in &meshes {
            copy_auto(&mesh.vert_pos, &mut combined.vert_pos[vert_offset..]);

            let halfedge =
                &mut combined.halfedge[edge_offset..edge_offset + mesh.num_halfedge()];
            copy_auto(&mesh.halfedge, halfedge);
            // offsets are below the totals checked by `fits_u32_indices`
            let (dv, de) = (vert_offset as u32, edge_offset as u32);
            for_each_auto(halfedge, |he| {
                he.start_vert += dv;
                he.end_vert += dv;
                he.pair_edge += de;
            });

            if with_tangents {
                copy_auto(
                    &mesh.halfedge_tangent,
                    &mut combined.halfedge_tangent[edge_offset..],
                );
            }

            combined.epsilon = combined.epsilon.max(mesh.epsilon);
            combined.tolerance = combined.tolerance.max(mesh.tolerance);
            vert_offset += mesh.num_vert();
            edge_offset += mesh.num_halfedge();
        }

        combined.finish();
        debug!(
            inputs = meshes.len(),
            num_vert,
            num_tri = combined.num_tri(),
            epsilon = combined.epsilon,
            "composed manifolds"
        );
        Self::from_impl(combined)
    }

    /// Splits the solid into its connected components.
    ///
    /// Components are ordered by their lowest vertex index and inherit this
    /// solid's epsilon and tolerance. Components without triangles (isolated
    /// vertices) are dropped, so an empty solid yields no components. A
    /// connected solid returns a single handle sharing this one's mesh.
    pub fn decompose(&self) -> Vec<Self> {
        let mesh = self.mesh_impl();
        let num_vert = mesh.num_vert();

        let mut uf = UnionFind::new(num_vert);
        for he in mesh.halfedge.iter().filter(|he| he.is_forward()) {
            uf.union(he.start_vert, he.end_vert);
        }
        let ComponentLabels { count, labels } = uf.connected_components();

        if count == 1 {
            return vec![self.clone()];
        }

        let mut components = Vec::with_capacity(count);
        for label in 0..count as u32 {
            let vert_new2old: Vec<u32> = (0..num_vert as u32)
                .filter(|&v| labels[v as usize] == label)
                .collect();
            let face_new2old: Vec<u32> = (0..mesh.num_tri() as u32)
                .filter(|&t| labels[mesh.halfedge[3 * t as usize].start_vert as usize] == label)
                .collect();
            if face_new2old.is_empty() {
                trace!(label, "skipping component without triangles");
                continue;
            }

            let mut component = MeshImpl::new();
            component.epsilon = mesh.epsilon;
            component.tolerance = mesh.tolerance;
            component.vert_pos = vec![Vec3::ZERO; vert_new2old.len()];
            gather_auto(&vert_new2old, &mesh.vert_pos, &mut component.vert_pos);
            component.gather_faces(&mesh, &face_new2old);
            component.reindex_verts(&vert_new2old, num_vert);
            component.finish();
            components.push(Self::from_impl(component));
        }

        debug!(
            num_vert,
            labels = count,
            components = components.len(),
            "decomposed manifold"
        );
        components
    }
}

/// Returns true if every vertex and half-edge index of a mesh with these
/// counts fits in `u32` below the `NO_INDEX` sentinel.
pub(crate) fn fits_u32_indices(num_vert: usize, num_halfedge: usize) -> bool {
    let limit = NO_INDEX as usize;
    num_vert < limit && num_halfedge < limit
}
