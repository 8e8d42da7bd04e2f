use std::collections::HashMap;

use nalgebra::center;
use tracing::debug;

use super::vertex_rings;
use crate::error::Result;
use crate::mesh::{EdgeKey, Mesh3D};
use crate::operations::Modifier;

/// Conway ambo (rectification): cuts every vertex down to its edge midpoints.
///
/// The result has one vertex per edge, one face per original face over its
/// edge midpoints and one face per original vertex over the midpoints around
/// it. A cube becomes a cuboctahedron.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ambo;

impl Ambo {
    /// Derives the ambo of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotClosedManifold`](crate::error::TopologyError::NotClosedManifold)
    /// if `mesh` is open or non-manifold, or an index error for dangling faces.
    pub fn derive(&self, mesh: &Mesh3D) -> Result<Mesh3D> {
        let rings = vertex_rings(mesh)?;
        let vertices = mesh.vertices();

        let mut out = Mesh3D::new();
        let mut midpoints: HashMap<EdgeKey, usize> = HashMap::new();
        let mut midpoint = |out: &mut Mesh3D, a: usize, b: usize| -> usize {
            *midpoints
                .entry(EdgeKey::new(a, b))
                .or_insert_with(|| out.add_vertex(center(&vertices[a], &vertices[b])))
        };

        for face in mesh.faces() {
            let ring: Vec<usize> = face
                .edges()
                .map(|(a, b)| midpoint(&mut out, a, b))
                .collect();
            out.add_face(ring);
        }
        for (v, ring) in rings.iter().enumerate() {
            let Some(ring) = ring else { continue };
            let corner: Vec<usize> = ring
                .neighbors
                .iter()
                .map(|&n| midpoint(&mut out, v, n))
                .collect();
            out.add_face(corner);
        }

        debug!(
            vertices = out.vertex_count(),
            faces = out.face_count(),
            "ambo"
        );
        Ok(out)
    }
}

impl Modifier for Ambo {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        *mesh = self.derive(mesh)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeCircle, MakeCube};
    use crate::operations::query::TopologyReport;
    use crate::operations::Creator;
    use approx::assert_relative_eq;

    #[test]
    fn cube_becomes_cuboctahedron() {
        let cube = MakeCube::default().create().unwrap();
        let mesh = Ambo.derive(&cube).unwrap();

        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 12);
        assert_eq!(report.edge_count, 24);
        assert_eq!(report.face_count, 14);
        assert_eq!(report.arity_counts.get(&3), Some(&8));
        assert_eq!(report.arity_counts.get(&4), Some(&6));
        assert!(report.is_closed_manifold());

        let radius = mesh.vertices()[0].coords.norm();
        for p in mesh.vertices() {
            assert_relative_eq!(p.coords.norm(), radius, epsilon = 1e-12);
        }
    }

    #[test]
    fn faces_point_outward() {
        let mesh = Ambo.derive(&MakeCube::default().create().unwrap()).unwrap();
        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            assert!(normal.dot(&mesh.face_center(face).unwrap().coords) > 0.0);
        }
    }

    #[test]
    fn open_mesh_is_rejected_without_mutation() {
        let mut mesh = MakeCircle::default().create().unwrap();
        let before = mesh.clone();
        assert!(Ambo.modify(&mut mesh).is_err());
        assert_eq!(mesh, before);
    }
}
