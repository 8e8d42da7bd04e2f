use tracing::{debug, warn};

use super::vertex_rings;
use crate::error::Result;
use crate::math::Point3;
use crate::mesh::{Face, Mesh3D};
use crate::operations::Modifier;

/// Conway dual: swaps the roles of faces and vertices.
///
/// Every face becomes a vertex at its center, and every vertex becomes a
/// face joining the centers of the faces around it. Loose vertices are
/// dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dual;

impl Dual {
    /// Derives the dual of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotClosedManifold`](crate::error::TopologyError::NotClosedManifold)
    /// if `mesh` is open or non-manifold, or an index error for dangling faces.
    pub fn derive(&self, mesh: &Mesh3D) -> Result<Mesh3D> {
        let rings = vertex_rings(mesh)?;
        let centers = mesh
            .faces()
            .iter()
            .map(|face| mesh.face_center(face))
            .collect::<Result<Vec<Point3>>>()?;

        let loose = rings.iter().filter(|ring| ring.is_none()).count();
        if loose > 0 {
            warn!(loose, "dual skipped loose vertices");
        }
        let faces: Vec<Face> = rings
            .into_iter()
            .flatten()
            .map(|ring| Face::new(ring.faces))
            .collect();

        let out = Mesh3D::from_parts(centers, faces);
        debug!(
            vertices = out.vertex_count(),
            faces = out.face_count(),
            "dual"
        );
        Ok(out)
    }
}

impl Modifier for Dual {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        *mesh = self.derive(mesh)?;
        Ok(())
    }
}
