use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Matrix4, Point3, Vector3, TOLERANCE};
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Reflects a mesh across a plane defined by a point and normal.
///
/// Faces are reversed along with the reflection so they stay outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror {
    /// A point on the mirror plane.
    pub plane_origin: Point3,
    /// Plane normal; need not be normalized.
    pub plane_normal: Vector3,
}

impl Mirror {
    /// Creates a new `Mirror` modifier.
    #[must_use]
    pub fn new(plane_origin: Point3, plane_normal: Vector3) -> Self {
        Self {
            plane_origin,
            plane_normal,
        }
    }

    /// The reflection matrix for this plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the plane normal is zero-length.
    pub fn matrix(&self) -> Result<Matrix4> {
        let n = self
            .plane_normal
            .try_normalize(TOLERANCE)
            .ok_or(GeometryError::ZeroVector("mirror plane normal"))?;
        let householder = Matrix3::identity() - n * n.transpose() * 2.0;
        let linear = householder.to_homogeneous();
        let o = self.plane_origin.coords;
        Ok(Matrix4::new_translation(&o) * linear * Matrix4::new_translation(&(-o)))
    }
}

impl Modifier for Mirror {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        mesh.transform(&self.matrix()?);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCone;
    use crate::operations::query::TopologyReport;
    use crate::operations::Creator;
    use approx::assert_relative_eq;

    #[test]
    fn reflects_across_offset_plane() {
        let mut mesh = Mesh3D::new();
        mesh.add_vertex(Point3::new(3.0, 1.0, 2.0));
        Mirror::new(Point3::new(1.0, 0.0, 0.0), Vector3::x() * 3.0)
            .modify(&mut mesh)
            .unwrap();
        assert_relative_eq!(mesh.vertices()[0], Point3::new(-1.0, 1.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn mirrored_cone_points_down_and_stays_outward() {
        let mut mesh = MakeCone::default().create().unwrap();
        Mirror::new(Point3::origin(), Vector3::y()).modify(&mut mesh).unwrap();

        let bounds = mesh.bounds().unwrap();
        assert_relative_eq!(bounds.min.y, -1.0, epsilon = 1e-12);
        // The base, previously at the bottom, now faces up.
        let base = mesh.face(0).unwrap();
        assert!(mesh.face_normal(base).unwrap().y > 0.99);
        assert!(TopologyReport::of(&mesh).is_closed_manifold());
    }

    #[test]
    fn zero_normal_is_rejected() {
        let mut mesh = MakeCone::default().create().unwrap();
        let before = mesh.clone();
        assert!(Mirror::new(Point3::origin(), Vector3::zeros())
            .modify(&mut mesh)
            .is_err());
        assert_eq!(mesh, before);
    }
}
