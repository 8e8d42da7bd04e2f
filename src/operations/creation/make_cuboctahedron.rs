use tracing::debug;

use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::conway::Ambo;
use crate::operations::Creator;

use super::{is_degenerate_extent, MakeCube};

/// Creates a cuboctahedron as the ambo of a cube with half edge `size`.
///
/// Vertices land at the cube's edge midpoints, `(±size, ±size, 0)` and
/// permutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeCuboctahedron {
    /// Values below tolerance, and NaN, give an empty mesh.
    pub size: f64,
}

impl Default for MakeCuboctahedron {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl MakeCuboctahedron {
    /// Creates a new `MakeCuboctahedron` with the given half edge length of the source cube.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }
}

impl Creator for MakeCuboctahedron {
    fn create(&self) -> Result<Mesh3D> {
        if is_degenerate_extent(self.size) {
            debug!(size = self.size, "degenerate cuboctahedron, returning empty mesh");
            return Ok(Mesh3D::new());
        }
        Ambo.derive(&MakeCube::new(self.size).create()?)
    }
}
