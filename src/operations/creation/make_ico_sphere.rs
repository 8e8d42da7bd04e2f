use tracing::debug;

use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::modification::PushToSphere;
use crate::operations::subdivision::PlanarMidEdge;
use crate::operations::{Creator, Modifier};

use super::{is_degenerate_extent, MakeIcosahedron};

/// Creates a geodesic sphere by subdividing an icosahedron and projecting
/// the result onto a sphere.
///
/// Each subdivision splits every triangle into four, so the sphere has
/// `20 * 4^subdivisions` faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeIcoSphere {
    /// Values below tolerance, and NaN, give an empty mesh.
    pub radius: f64,
    pub subdivisions: usize,
}

impl Default for MakeIcoSphere {
    fn default() -> Self {
        Self {
            radius: 1.0,
            subdivisions: 0,
        }
    }
}

impl MakeIcoSphere {
    /// Creates a new `MakeIcoSphere`.
    #[must_use]
    pub fn new(radius: f64, subdivisions: usize) -> Self {
        Self {
            radius,
            subdivisions,
        }
    }
}

impl Creator for MakeIcoSphere {
    fn create(&self) -> Result<Mesh3D> {
        if is_degenerate_extent(self.radius) {
            debug!(radius = self.radius, "degenerate ico sphere, returning empty mesh");
            return Ok(Mesh3D::new());
        }
        let mut mesh = MakeIcosahedron::default().create()?;
        PlanarMidEdge::new(self.subdivisions).modify(&mut mesh)?;
        PushToSphere::new(self.radius).modify(&mut mesh)?;
        Ok(mesh)
    }
}
