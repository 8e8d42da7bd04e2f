use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh3D;
use crate::operations::Creator;

use super::is_degenerate_extent;

const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Creates a regular icosahedron inscribed in a sphere of `radius`.
///
/// Vertices are the corners of three orthogonal golden rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeIcosahedron {
    /// Circumradius.
    /// Values below tolerance, and NaN, give an empty mesh.
    pub radius: f64,
}

impl Default for MakeIcosahedron {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl MakeIcosahedron {
    /// Creates a new `MakeIcosahedron`.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Creator for MakeIcosahedron {
    fn create(&self) -> Result<Mesh3D> {
        if is_degenerate_extent(self.radius) {
            debug!(radius = self.radius, "degenerate icosahedron, returning empty mesh");
            return Ok(Mesh3D::new());
        }
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let scale = self.radius / (1.0 + phi * phi).sqrt();
        let corners = [
            (-1.0, phi, 0.0),
            (1.0, phi, 0.0),
            (-1.0, -phi, 0.0),
            (1.0, -phi, 0.0),
            (0.0, -1.0, phi),
            (0.0, 1.0, phi),
            (0.0, -1.0, -phi),
            (0.0, 1.0, -phi),
            (phi, 0.0, -1.0),
            (phi, 0.0, 1.0),
            (-phi, 0.0, -1.0),
            (-phi, 0.0, 1.0),
        ];

        let mut mesh = Mesh3D::new();
        mesh.add_vertices(
            corners
                .iter()
                .map(|&(x, y, z)| Point3::new(x * scale, y * scale, z * scale)),
        );
        for face in FACES {
            mesh.add_face(face);
        }
        Ok(mesh)
    }
}
