use std::collections::{BTreeMap, HashMap, HashSet};

use crate::mesh::Mesh3D;

/// Counts describing the connectivity of a mesh.
///
/// Built in one pass over the faces; dangling vertex indices are ignored
/// rather than reported, so use [`Mesh3D::check_indices`] for that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub face_count: usize,
    /// Edges used by exactly one face.
    pub boundary_edges: usize,
    /// Edges used by more than two faces.
    pub non_manifold_edges: usize,
    /// Directed edges traversed the same way by two faces, i.e. neighbors
    /// with opposite winding.
    pub inconsistent_edges: usize,
    /// Vertices no face references.
    pub loose_vertices: usize,
    /// Faces whose vertex set repeats an earlier face's.
    pub duplicate_faces: usize,
    /// Number of faces per arity.
    pub arity_counts: BTreeMap<usize, usize>,
}

impl TopologyReport {
    /// Inspects `mesh`.
    #[must_use]
    pub fn of(mesh: &Mesh3D) -> Self {
        let edge_faces = mesh.edge_face_counts();
        let mut report = Self {
            vertex_count: mesh.vertex_count(),
            edge_count: edge_faces.len(),
            face_count: mesh.face_count(),
            boundary_edges: edge_faces.values().filter(|&&n| n == 1).count(),
            non_manifold_edges: edge_faces.values().filter(|&&n| n > 2).count(),
            ..Self::default()
        };

        let mut used = vec![false; mesh.vertex_count()];
        let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        for face in mesh.faces() {
            *report.arity_counts.entry(face.arity()).or_default() += 1;
            for &i in face.indices() {
                if let Some(slot) = used.get_mut(i) {
                    *slot = true;
                }
            }
            for edge in face.edges() {
                *directed.entry(edge).or_default() += 1;
            }
            if !seen.insert(face.sorted_indices()) {
                report.duplicate_faces += 1;
            }
        }
        report.loose_vertices = used.iter().filter(|&&u| !u).count();
        report.inconsistent_edges = directed.values().filter(|&&n| n > 1).count();
        report
    }

    /// `V - E + F`; 2 for a closed genus-0 surface.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count as i64 - self.edge_count as i64 + self.face_count as i64
    }

    /// Returns `true` if every edge is shared by exactly two faces with
    /// opposite traversal.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0 && self.inconsistent_edges == 0
    }
}
