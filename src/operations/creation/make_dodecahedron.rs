use tracing::debug;

use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::conway::Dual;
use crate::operations::modification::PushToSphere;
use crate::operations::{Creator, Modifier};

use super::{is_degenerate_extent, MakeIcosahedron};

/// Creates a regular dodecahedron inscribed in a sphere of `radius`, as the
/// dual of an icosahedron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeDodecahedron {
    /// Circumradius.
    /// Values below tolerance, and NaN, give an empty mesh.
    pub radius: f64,
}

impl Default for MakeDodecahedron {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl MakeDodecahedron {
    /// Creates a new `MakeDodecahedron`.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Creator for MakeDodecahedron {
    fn create(&self) -> Result<Mesh3D> {
        if is_degenerate_extent(self.radius) {
            debug!(radius = self.radius, "degenerate dodecahedron, returning empty mesh");
            return Ok(Mesh3D::new());
        }
        let icosahedron = MakeIcosahedron::default().create()?;
        let mut mesh = Dual.derive(&icosahedron)?;
        PushToSphere::new(self.radius).modify(&mut mesh)?;
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::TopologyReport;
    use approx::assert_relative_eq;

    #[test]
    fn twelve_planar_pentagons() {
        let mesh = MakeDodecahedron::new(1.5).create().unwrap();
        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 20);
        assert_eq!(report.edge_count, 30);
        assert_eq!(report.arity_counts.get(&5), Some(&12));

        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            let center = mesh.face_center(face).unwrap();
            for p in mesh.face_points(face).unwrap() {
                assert_relative_eq!(normal.dot(&(p - center)), 0.0, epsilon = 1e-12);
                assert_relative_eq!(p.coords.norm(), 1.5, epsilon = 1e-12);
            }
        }
    }
}
