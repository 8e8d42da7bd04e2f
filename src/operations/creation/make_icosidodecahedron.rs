use tracing::debug;

use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::conway::Ambo;
use crate::operations::modification::PushToSphere;
use crate::operations::{Creator, Modifier};

use super::{is_degenerate_extent, MakeDodecahedron};

/// Creates an icosidodecahedron inscribed in a sphere of `radius`, as the
/// ambo of a dodecahedron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeIcosidodecahedron {
    /// Values below tolerance, and NaN, give an empty mesh.
    pub radius: f64,
}

impl Default for MakeIcosidodecahedron {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl MakeIcosidodecahedron {
    /// Creates a new `MakeIcosidodecahedron` with the given circumradius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Creator for MakeIcosidodecahedron {
    fn create(&self) -> Result<Mesh3D> {
        if is_degenerate_extent(self.radius) {
            debug!(radius = self.radius, "degenerate icosidodecahedron, returning empty mesh");
            return Ok(Mesh3D::new());
        }
        let mut mesh = Ambo.derive(&MakeDodecahedron::default().create()?)?;
        PushToSphere::new(self.radius).modify(&mut mesh)?;
        Ok(mesh)
    }
}
