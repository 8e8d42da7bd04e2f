use super::{Ambo, Dual};
use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Conway join, `j = da`: the dual of the ambo.
///
/// Every original edge becomes a quad. A cube becomes a rhombic
/// dodecahedron.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Join;

impl Join {
    /// Derives the join of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns a topology error if `mesh` is open or non-manifold.
    pub fn derive(&self, mesh: &Mesh3D) -> Result<Mesh3D> {
        Dual.derive(&Ambo.derive(mesh)?)
    }
}

impl Modifier for Join {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        *mesh = self.derive(mesh)?;
        Ok(())
    }
}
