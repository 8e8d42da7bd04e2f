use super::{Ambo, Dual};
use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Conway ortho, `o = daa`: ambo twice, then dual.
///
/// Every n-gon is split into n quads meeting at its center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ortho;

impl Ortho {
    /// Derives the ortho of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns a topology error if `mesh` is open or non-manifold.
    pub fn derive(&self, mesh: &Mesh3D) -> Result<Mesh3D> {
        let once = Ambo.derive(mesh)?;
        let twice = Ambo.derive(&once)?;
        Dual.derive(&twice)
    }
}

impl Modifier for Ortho {
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

    #[test]
    fn cube_ortho_counts() {
        let mut mesh = MakeCube::default().create().unwrap();
        Ortho.modify(&mut mesh).unwrap();

        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 26);
        assert_eq!(report.edge_count, 48);
        assert_eq!(report.face_count, 24);
        assert_eq!(report.arity_counts.get(&4), Some(&24));
        assert_eq!(report.euler_characteristic(), 2);
        assert!(report.is_closed_manifold());

        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            assert!(normal.dot(&mesh.face_center(face).unwrap().coords) > 0.0);
        }
    }

    #[test]
    fn open_input_fails_cleanly() {
        let mut mesh = MakeCircle::default().create().unwrap();
        let before = mesh.clone();
        assert!(Ortho.modify(&mut mesh).is_err());
        assert_eq!(mesh, before);
    }
}
