use tracing::debug;

use crate::error::Result;
use crate::math::{Point3, TOLERANCE};
use crate::mesh::Mesh3D;
use crate::operations::Creator;

use super::ring_point;

/// Creates a cone or truncated cone (frustum) around the Y axis, centered on
/// the origin with its base at `y = -height / 2`.
///
/// The side is split into `height_segments` bands of `rotation_segments`
/// quads. An end with zero radius collapses to an apex ringed by triangles;
/// an end with a positive radius is closed by an n-gon cap. The base cap,
/// when present, is always face 0.
///
/// - `top_radius = 0` produces a pointed cone
/// - `top_radius > 0` produces a frustum
/// - both radii zero, a non-positive height, a negative radius, no height
///   segments, or fewer than three rotation segments produce an empty mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeCone {
    pub bottom_radius: f64,
    pub top_radius: f64,
    pub height: f64,
    /// Vertices per ring.
    pub rotation_segments: usize,
    /// Bands along the height.
    pub height_segments: usize,
}

impl Default for MakeCone {
    fn default() -> Self {
        Self {
            bottom_radius: 1.0,
            top_radius: 0.0,
            height: 2.0,
            rotation_segments: 32,
            height_segments: 10,
        }
    }
}

impl MakeCone {
    /// Creates a new `MakeCone` with the default segment counts.
    #[must_use]
    pub fn new(bottom_radius: f64, top_radius: f64, height: f64) -> Self {
        Self {
            bottom_radius,
            top_radius,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rotation_segments(mut self, rotation_segments: usize) -> Self {
        self.rotation_segments = rotation_segments;
        self
    }

    #[must_use]
    pub fn with_height_segments(mut self, height_segments: usize) -> Self {
        self.height_segments = height_segments;
        self
    }

    fn is_degenerate(&self) -> bool {
        (self.bottom_radius < TOLERANCE && self.top_radius < TOLERANCE)
            || self.bottom_radius < 0.0
            || self.top_radius < 0.0
            || self.height < TOLERANCE
            || self.height_segments == 0
            || self.rotation_segments < 3
    }
}

impl Creator for MakeCone {
    #[allow(clippy::cast_precision_loss)]
    fn create(&self) -> Result<Mesh3D> {
        let mut mesh = Mesh3D::new();
        if self.is_degenerate() {
            debug!(cone = ?self, "degenerate cone, returning empty mesh");
            return Ok(mesh);
        }

        let n = self.rotation_segments;
        let bands = self.height_segments;
        let has_base = self.bottom_radius >= TOLERANCE;
        let has_top = self.top_radius >= TOLERANCE;
        let bottom_y = -self.height / 2.0;
        let top_y = self.height / 2.0;

        let first_ring = usize::from(!has_base);
        let last_ring = if has_top { bands } else { bands - 1 };
        for j in first_ring..=last_ring {
            let t = j as f64 / bands as f64;
            let radius = self.bottom_radius + (self.top_radius - self.bottom_radius) * t;
            let y = bottom_y + self.height * t;
            mesh.add_vertices((0..n).map(|k| ring_point(radius, y, k, n)));
        }
        let at = |j: usize, k: usize| (j - first_ring) * n + k % n;

        if has_base {
            mesh.add_face((0..n).map(|k| at(first_ring, k)).collect::<Vec<_>>());
        }
        for j in first_ring..last_ring {
            for k in 0..n {
                mesh.add_face([at(j, k), at(j + 1, k), at(j + 1, k + 1), at(j, k + 1)]);
            }
        }
        if !has_base {
            let apex = mesh.add_vertex(Point3::new(0.0, bottom_y, 0.0));
            for k in 0..n {
                mesh.add_face([apex, at(first_ring, k), at(first_ring, k + 1)]);
            }
        }
        if has_top {
            mesh.add_face((0..n).rev().map(|k| at(last_ring, k)).collect::<Vec<_>>());
        } else {
            let apex = mesh.add_vertex(Point3::new(0.0, top_y, 0.0));
            for k in 0..n {
                mesh.add_face([at(last_ring, k), apex, at(last_ring, k + 1)]);
            }
        }

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "created cone"
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

    fn assert_outward(mesh: &Mesh3D, inside: Point3) {
        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            assert!(normal.dot(&(mesh.face_center(face).unwrap() - inside)) > 0.0);
        }
    }

    #[test]
    fn default_cone() {
        let mesh = MakeCone::default().create().unwrap();
        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 10 * 32 + 1);
        assert_eq!(report.face_count, 1 + 288 + 32);
        assert_eq!(report.arity_counts.get(&32), Some(&1));
        assert_eq!(report.arity_counts.get(&4), Some(&288));
        assert_eq!(report.arity_counts.get(&3), Some(&32));
        assert_eq!(report.euler_characteristic(), 2);
        assert!(report.is_closed_manifold());
        assert_eq!(report.loose_vertices, 0);

        let bounds = mesh.bounds().unwrap();
        assert_relative_eq!(bounds.min.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.width(), 2.0, epsilon = 1e-12);

        let base = mesh.face(0).unwrap();
        assert_relative_eq!(mesh.face_normal(base).unwrap(), -Vector3::y(), epsilon = 1e-12);
        assert_outward(&mesh, Point3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn frustum_has_two_caps() {
        let mesh = MakeCone::new(1.0, 0.5, 3.0)
            .with_rotation_segments(16)
            .with_height_segments(4)
            .create()
            .unwrap();
        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 5 * 16);
        assert_eq!(report.face_count, 2 + 4 * 16);
        assert_eq!(report.arity_counts.get(&16), Some(&2));
        assert!(report.is_closed_manifold());
        assert_outward(&mesh, Point3::origin());
    }

    #[test]
    fn inverted_cone_has_apex_below() {
        let mesh = MakeCone::new(0.0, 1.0, 2.0)
            .with_rotation_segments(8)
            .with_height_segments(1)
            .create()
            .unwrap();
        let report = TopologyReport::of(&mesh);
        assert_eq!(report.vertex_count, 9);
        assert_eq!(report.face_count, 9);
        assert!(report.is_closed_manifold());
        assert_outward(&mesh, Point3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn degenerate_configurations_are_empty() {
        let cases = [
            MakeCone::new(0.0, 0.0, 2.0),
            MakeCone::new(1.0, 0.0, 0.0),
            MakeCone::default().with_height_segments(0),
            MakeCone::default().with_rotation_segments(0),
            MakeCone::default().with_rotation_segments(2),
        ];
        for cone in cases {
            assert!(cone.create().unwrap().is_empty(), "{cone:?}");
        }
    }
}
