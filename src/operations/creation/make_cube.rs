use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh3D;
use crate::operations::Creator;

use super::is_degenerate_extent;

/// Creates an axis-aligned cube centered on the origin.
///
/// Vertices sit at `±size` on every axis, so the edge length is `2 * size`.
/// Faces are ordered bottom, top, front (−Z), back (+Z), left, right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeCube {
    /// Half the edge length.
    /// Values below tolerance, and NaN, give an empty mesh.
    pub size: f64,
}

impl Default for MakeCube {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl MakeCube {
    /// Creates a new `MakeCube` with the given half edge length.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }
}

impl Creator for MakeCube {
    fn create(&self) -> Result<Mesh3D> {
        if is_degenerate_extent(self.size) {
            debug!(size = self.size, "degenerate cube, returning empty mesh");
            return Ok(Mesh3D::new());
        }
        let s = self.size;
        let mut mesh = Mesh3D::new();
        mesh.add_vertices([
            Point3::new(-s, -s, -s),
            Point3::new(s, -s, -s),
            Point3::new(s, -s, s),
            Point3::new(-s, -s, s),
            Point3::new(-s, s, -s),
            Point3::new(s, s, -s),
            Point3::new(s, s, s),
            Point3::new(-s, s, s),
        ]);
        mesh.add_face([0, 1, 2, 3]);
        mesh.add_face([4, 7, 6, 5]);
        mesh.add_face([0, 4, 5, 1]);
        mesh.add_face([3, 2, 6, 7]);
        mesh.add_face([0, 3, 7, 4]);
        mesh.add_face([1, 5, 6, 2]);
        Ok(mesh)
    }
}
