use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh3D;
use crate::operations::Creator;

use super::is_degenerate_extent;

/// Creates a regular tetrahedron on alternate corners of the cube `±size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeTetrahedron {
    /// Half the edge length of the enclosing cube.
    /// Values below tolerance, and NaN, give an empty mesh.
    pub size: f64,
}

impl Default for MakeTetrahedron {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl MakeTetrahedron {
    /// Creates a new `MakeTetrahedron`.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }
}

impl Creator for MakeTetrahedron {
    fn create(&self) -> Result<Mesh3D> {
        if is_degenerate_extent(self.size) {
            debug!(size = self.size, "degenerate tetrahedron, returning empty mesh");
            return Ok(Mesh3D::new());
        }
        let s = self.size;
        let mut mesh = Mesh3D::new();
        mesh.add_vertices([
            Point3::new(s, s, s),
            Point3::new(s, -s, -s),
            Point3::new(-s, s, -s),
            Point3::new(-s, -s, s),
        ]);
        mesh.add_face([0, 1, 2]);
        mesh.add_face([0, 3, 1]);
        mesh.add_face([0, 2, 3]);
        mesh.add_face([1, 3, 2]);
        Ok(mesh)
    }
}
