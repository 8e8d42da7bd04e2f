use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh3D;
use crate::operations::Creator;

use super::is_degenerate_extent;

/// Creates a regular octahedron with its vertices on the axes at `±size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeOctahedron {
    /// Distance of each vertex from the origin.
    /// Values below tolerance, and NaN, give an empty mesh.
    pub size: f64,
}

impl Default for MakeOctahedron {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl MakeOctahedron {
    /// Creates a new `MakeOctahedron`.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }
}

impl Creator for MakeOctahedron {
    fn create(&self) -> Result<Mesh3D> {
        if is_degenerate_extent(self.size) {
            debug!(size = self.size, "degenerate octahedron, returning empty mesh");
            return Ok(Mesh3D::new());
        }
        let s = self.size;
        let mut mesh = Mesh3D::new();
        mesh.add_vertices([
            Point3::new(s, 0.0, 0.0),
            Point3::new(-s, 0.0, 0.0),
            Point3::new(0.0, s, 0.0),
            Point3::new(0.0, -s, 0.0),
            Point3::new(0.0, 0.0, s),
            Point3::new(0.0, 0.0, -s),
        ]);
        // Equator in order +Z, +X, -Z, -X.
        let equator = [4, 0, 5, 1];
        for i in 0..4 {
            let (a, b) = (equator[i], equator[(i + 1) % 4]);
            mesh.add_face([2, a, b]);
        }
        for i in 0..4 {
            let (a, b) = (equator[i], equator[(i + 1) % 4]);
            mesh.add_face([3, b, a]);
        }
        Ok(mesh)
    }
}
