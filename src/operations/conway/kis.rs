use tracing::debug;

use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Conway kis: raises a pyramid on every face.
///
/// Each n-gon is replaced by n triangles meeting at an apex placed at the
/// face center, lifted `height` along the face normal. Unlike the
/// ring-based operators this also works on open meshes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kis {
    /// Apex offset along the face normal.
    pub height: f64,
}

impl Kis {
    /// Creates a kis operator with the given apex height.
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Derives the kis of `mesh`. Existing vertices keep their indices.
    ///
    /// # Errors
    ///
    /// Returns an index error if a face references a missing vertex.
    pub fn derive(&self, mesh: &Mesh3D) -> Result<Mesh3D> {
        mesh.check_indices()?;
        let mut out = Mesh3D::from_parts(mesh.vertices().to_vec(), Vec::new());
        for face in mesh.faces() {
            let apex = mesh.face_center(face)? + mesh.face_normal(face)? * self.height;
            let apex = out.add_vertex(apex);
            for (a, b) in face.edges() {
                out.add_face([a, b, apex]);
            }
        }
        debug!(
            height = self.height,
            faces = out.face_count(),
            "kis"
        );
        Ok(out)
    }
}

impl Modifier for Kis {
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
    fn cube_becomes_tetrakis_hexahedron() {
        let mesh = Kis::new(0.5)
            .derive(&MakeCube::default().create().unwrap())
            .unwrap();
        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 14);
        assert_eq!(report.edge_count, 36);
        assert_eq!(report.face_count, 24);
        assert!(report.is_closed_manifold());

        assert_relative_eq!(mesh.vertices()[8].coords.norm(), 1.5, epsilon = 1e-12);
        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            assert!(normal.dot(&mesh.face_center(face).unwrap().coords) > 0.0);
        }
    }

    #[test]
    fn open_disk_becomes_a_fan() {
        let disk = MakeCircle::default().with_vertices(6).create().unwrap();
        let mesh = Kis::default().derive(&disk).unwrap();
        assert_eq!(mesh.vertex_count(), 7);
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(TopologyReport::of(&mesh).boundary_edges, 6);
    }
}
