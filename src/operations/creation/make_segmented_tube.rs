use tracing::debug;

use crate::error::Result;
use crate::math::TOLERANCE;
use crate::mesh::Mesh3D;
use crate::operations::Creator;

use super::ring_point;

/// Creates a thick-walled open-ended tube around the Y axis, centered on the
/// origin.
///
/// Outer and inner walls are split into `segments` bands of `vertices`
/// quads and joined by an annulus of quads at each end, so the result is a
/// closed torus-like surface. Fewer than three vertices, no segments, a
/// non-positive height, or an inner radius that is not strictly between zero
/// and the outer radius produce an empty mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeSegmentedTube {
    /// Vertices per ring.
    pub vertices: usize,
    /// Bands along the height.
    pub segments: usize,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub height: f64,
}

impl Default for MakeSegmentedTube {
    fn default() -> Self {
        Self {
            vertices: 32,
            segments: 10,
            outer_radius: 1.0,
            inner_radius: 0.9,
            height: 2.0,
        }
    }
}

impl MakeSegmentedTube {
    fn is_degenerate(&self) -> bool {
        self.vertices < 3
            || self.segments == 0
            || self.height < TOLERANCE
            || self.inner_radius < TOLERANCE
            || self.outer_radius - self.inner_radius < TOLERANCE
    }
}

impl Creator for MakeSegmentedTube {
    #[allow(clippy::cast_precision_loss)]
    fn create(&self) -> Result<Mesh3D> {
        let mut mesh = Mesh3D::new();
        if self.is_degenerate() {
            return Ok(mesh);
        }

        let n = self.vertices;
        let rings = self.segments + 1;
        for radius in [self.outer_radius, self.inner_radius] {
            for j in 0..rings {
                let y = -self.height / 2.0 + self.height * j as f64 / self.segments as f64;
                mesh.add_vertices((0..n).map(|k| ring_point(radius, y, k, n)));
            }
        }
        let outer = |j: usize, k: usize| j * n + k % n;
        let inner = |j: usize, k: usize| (rings + j) * n + k % n;

        for j in 0..self.segments {
            for k in 0..n {
                mesh.add_face([outer(j, k), outer(j + 1, k), outer(j + 1, k + 1), outer(j, k + 1)]);
            }
        }
        for j in 0..self.segments {
            for k in 0..n {
                mesh.add_face([inner(j, k), inner(j, k + 1), inner(j + 1, k + 1), inner(j + 1, k)]);
            }
        }
        let top = self.segments;
        for k in 0..n {
            mesh.add_face([outer(top, k), inner(top, k), inner(top, k + 1), outer(top, k + 1)]);
        }
        for k in 0..n {
            mesh.add_face([outer(0, k), outer(0, k + 1), inner(0, k + 1), inner(0, k)]);
        }

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "created segmented tube"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::query::TopologyReport;
    use approx::assert_relative_eq;

    #[test]
    fn default_tube() {
        let mesh = MakeSegmentedTube::default().create().unwrap();
        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 2 * 11 * 32);
        assert_eq!(report.face_count, 2 * 10 * 32 + 2 * 32);
        assert!(report.is_closed_manifold());
        assert_eq!(report.euler_characteristic(), 0);

        let bounds = mesh.bounds().unwrap();
        assert_relative_eq!(bounds.height(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.width(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn walls_face_away_from_the_wall_interior() {
        let tube = MakeSegmentedTube::default();
        let mesh = tube.create().unwrap();
        let mid_radius = (tube.outer_radius + tube.inner_radius) / 2.0;
        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            let center = mesh.face_center(face).unwrap();
            let radial = Vector3::new(center.x, 0.0, center.z);
            let inside = radial.normalize() * mid_radius + Vector3::new(0.0, center.y.clamp(-0.9, 0.9), 0.0);
            assert!(normal.dot(&(center.coords - inside)) > 0.0);
        }
    }

    #[test]
    fn degenerate_tubes_are_empty() {
        let thin = MakeSegmentedTube {
            inner_radius: 1.0,
            ..MakeSegmentedTube::default()
        };
        assert!(thin.create().unwrap().is_empty());
        let flat = MakeSegmentedTube {
            height: 0.0,
            ..MakeSegmentedTube::default()
        };
        assert!(flat.create().unwrap().is_empty());
    }
}
