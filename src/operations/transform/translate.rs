use crate::error::Result;
use crate::math::Vector3;
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Translates a mesh by a displacement vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translate {
    /// Displacement applied to every vertex.
    pub displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` modifier.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }
}

impl Modifier for Translate {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        mesh.translate(&self.displacement);
        Ok(())
    }
}
