use std::collections::HashMap;

use tracing::debug;

use super::vertex_rings;
use crate::error::{OperationError, Result};
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Conway truncate: cuts every vertex off at `ratio` of each incident edge.
///
/// Each directed edge `a -> b` yields a vertex at `a + (b - a) * ratio`.
/// Original faces keep their place with twice as many corners, and each
/// original vertex is replaced by a face over its cut points. A ratio of
/// 1/3 truncates a regular solid uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Truncate {
    /// Fraction of each edge cut off at both ends, in `(0, 0.5)`.
    pub ratio: f64,
}

impl Default for Truncate {
    fn default() -> Self {
        Self { ratio: 1.0 / 3.0 }
    }
}

impl Truncate {
    /// Creates a truncation cutting `ratio` of every edge at each end.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    /// Derives the truncation of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `ratio` is outside
    /// `(0, 0.5)`, and [`TopologyError::NotClosedManifold`](crate::error::TopologyError::NotClosedManifold)
    /// if `mesh` is open or non-manifold.
    pub fn derive(&self, mesh: &Mesh3D) -> Result<Mesh3D> {
        if !(self.ratio > 0.0 && self.ratio < 0.5) {
            return Err(OperationError::InvalidInput(format!(
                "truncation ratio must be in (0, 0.5), got {}",
                self.ratio
            ))
            .into());
        }
        let rings = vertex_rings(mesh)?;
        let vertices = mesh.vertices();

        let mut out = Mesh3D::new();
        let mut cuts: HashMap<(usize, usize), usize> = HashMap::new();
        let mut cut = |out: &mut Mesh3D, a: usize, b: usize| -> usize {
            *cuts.entry((a, b)).or_insert_with(|| {
                out.add_vertex(vertices[a] + (vertices[b] - vertices[a]) * self.ratio)
            })
        };

        for face in mesh.faces() {
            let mut corners = Vec::with_capacity(face.arity() * 2);
            for (a, b) in face.edges() {
                corners.push(cut(&mut out, a, b));
                corners.push(cut(&mut out, b, a));
            }
            out.add_face(corners);
        }
        for (v, ring) in rings.iter().enumerate() {
            let Some(ring) = ring else { continue };
            let corner: Vec<usize> = ring
                .neighbors
                .iter()
                .map(|&n| cut(&mut out, v, n))
                .collect();
            out.add_face(corner);
        }

        debug!(
            ratio = self.ratio,
            vertices = out.vertex_count(),
            faces = out.face_count(),
            "truncate"
        );
        Ok(out)
    }
}

impl Modifier for Truncate {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        *mesh = self.derive(mesh)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeCube, MakeTetrahedron};
    use crate::operations::query::TopologyReport;
    use crate::operations::Creator;
    use approx::assert_relative_eq;

    #[test]
    fn truncated_cube_counts() {
        let mesh = Truncate::default()
            .derive(&MakeCube::default().create().unwrap())
            .unwrap();
        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 24);
        assert_eq!(report.edge_count, 36);
        assert_eq!(report.face_count, 14);
        assert_eq!(report.arity_counts.get(&8), Some(&6));
        assert_eq!(report.arity_counts.get(&3), Some(&8));
        assert!(report.is_closed_manifold());
    }

    #[test]
    fn uniform_truncation_has_equal_edges() {
        let mesh = Truncate::default()
            .derive(&MakeTetrahedron::default().create().unwrap())
            .unwrap();
        let lengths: Vec<f64> = mesh
            .edges()
            .iter()
            .map(|e| (mesh.vertices()[e.a()] - mesh.vertices()[e.b()]).norm())
            .collect();
        assert_eq!(lengths.len(), 18);
        for length in &lengths {
            assert_relative_eq!(*length, lengths[0], epsilon = 1e-12);
        }
    }

    #[test]
    fn faces_point_outward() {
        let mesh = Truncate::new(0.25)
            .derive(&MakeCube::default().create().unwrap())
            .unwrap();
        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            assert!(normal.dot(&mesh.face_center(face).unwrap().coords) > 0.0);
        }
    }

    #[test]
    fn ratio_out_of_range_is_rejected() {
        let mut mesh = MakeCube::default().create().unwrap();
        let before = mesh.clone();
        assert!(Truncate::new(0.5).modify(&mut mesh).is_err());
        assert!(Truncate::new(0.0).modify(&mut mesh).is_err());
        assert!(Truncate::new(f64::NAN).modify(&mut mesh).is_err());
        assert_eq!(mesh, before);
    }
}
