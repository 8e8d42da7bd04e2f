use crate::error::Result;
use crate::math::{Point3, TOLERANCE};
use crate::mesh::Mesh3D;
use crate::operations::Creator;

use super::ring_point;

/// How the inside of a circle is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillType {
    /// One n-gon over the rim.
    #[default]
    NGon,
    /// A triangle per rim segment meeting at an extra center vertex.
    TriangleFan,
}

/// Creates a flat disk in the XZ plane, centered on the origin and facing +Y.
///
/// Fewer than three vertices or a zero radius produce an empty mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeCircle {
    pub radius: f64,
    /// Number of rim vertices.
    pub vertices: usize,
    pub fill: FillType,
}

impl Default for MakeCircle {
    fn default() -> Self {
        Self {
            radius: 1.0,
            vertices: 32,
            fill: FillType::NGon,
        }
    }
}

impl MakeCircle {
    /// Creates an n-gon disk of `radius` with `vertices` rim vertices.
    #[must_use]
    pub fn new(radius: f64, vertices: usize) -> Self {
        Self {
            radius,
            vertices,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillType) -> Self {
        self.fill = fill;
        self
    }
}

impl Creator for MakeCircle {
    fn create(&self) -> Result<Mesh3D> {
        let mut mesh = Mesh3D::new();
        let n = self.vertices;
        if n < 3 || self.radius.abs() < TOLERANCE {
            return Ok(mesh);
        }
        mesh.add_vertices((0..n).map(|k| ring_point(self.radius, 0.0, k, n)));

        // The rim runs clockwise seen from above, so walk it backwards.
        match self.fill {
            FillType::NGon => {
                mesh.add_face((0..n).rev().collect::<Vec<_>>());
            }
            FillType::TriangleFan => {
                let center = mesh.add_vertex(Point3::origin());
                for k in 0..n {
                    mesh.add_face([center, (k + 1) % n, k]);
                }
            }
        }
        Ok(mesh)
    }
}
