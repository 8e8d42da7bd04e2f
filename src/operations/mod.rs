pub mod conway;
pub mod creation;
pub mod modification;
pub mod query;
pub mod shaping;
pub mod subdivision;
pub mod transform;

use crate::error::Result;
use crate::mesh::Mesh3D;

/// Builds a new mesh from its own configuration.
///
/// Every call returns a fresh mesh; two calls on equal configurations
/// produce value-equal meshes.
pub trait Creator {
    /// Creates the mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if an internal modification step fails.
    fn create(&self) -> Result<Mesh3D>;
}

/// Edits a mesh in place.
pub trait Modifier {
    /// Applies the modification to `mesh`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input violates the operation's preconditions.
    /// The mesh is left unchanged in that case.
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()>;
}
