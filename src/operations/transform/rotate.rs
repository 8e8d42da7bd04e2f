use crate::error::{GeometryError, Result};
use crate::math::rotation::rotation_about;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Rotates a mesh around an axis through `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotate {
    /// A point on the rotation axis.
    pub origin: Point3,
    /// Axis direction; need not be normalized.
    pub axis: Vector3,
    /// Angle in radians, counter-clockwise looking down the axis.
    pub angle: f64,
}

impl Rotate {
    /// Creates a rotation about `axis` through `origin`.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(origin: Point3, axis: Vector3, angle: f64) -> Self {
        Self {
            origin,
            axis,
            angle,
        }
    }

    /// Rotation about the X axis through the world origin.
    #[must_use]
    pub fn x(angle: f64) -> Self {
        Self::new(Point3::origin(), Vector3::x(), angle)
    }

    /// Rotation about the Y axis through the world origin.
    #[must_use]
    pub fn y(angle: f64) -> Self {
        Self::new(Point3::origin(), Vector3::y(), angle)
    }

    /// Rotation about the Z axis through the world origin.
    #[must_use]
    pub fn z(angle: f64) -> Self {
        Self::new(Point3::origin(), Vector3::z(), angle)
    }
}

impl Modifier for Rotate {
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the axis is zero-length.
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        let axis = self
            .axis
            .try_normalize(TOLERANCE)
            .ok_or(GeometryError::ZeroVector("rotation axis"))?;
        mesh.transform(&rotation_about(&self.origin, &axis, self.angle));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCube;
    use crate::operations::Creator;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_about_offset_axis() {
        let mut mesh = Mesh3D::new();
        mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
        Rotate::new(Point3::new(1.0, 0.0, 0.0), Vector3::z() * 5.0, FRAC_PI_2)
            .modify(&mut mesh)
            .unwrap();
        assert_relative_eq!(mesh.vertices()[0], Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn shorthand_axes() {
        let mut mesh = Mesh3D::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 1.0));
        Rotate::y(FRAC_PI_2).modify(&mut mesh).unwrap();
        assert_relative_eq!(mesh.vertices()[0], Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        Rotate::x(FRAC_PI_2).modify(&mut mesh).unwrap();
        assert_relative_eq!(mesh.vertices()[0], Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        Rotate::z(FRAC_PI_2).modify(&mut mesh).unwrap();
        assert_relative_eq!(mesh.vertices()[0], Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_axis_is_rejected() {
        let mut mesh = MakeCube::default().create().unwrap();
        let before = mesh.clone();
        let result = Rotate::new(Point3::origin(), Vector3::zeros(), 1.0).modify(&mut mesh);
        assert!(result.is_err());
        assert_eq!(mesh, before);
    }

    #[test]
    fn empty_mesh_is_unchanged() {
        let mut mesh = Mesh3D::new();
        Rotate::x(1.0).modify(&mut mesh).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn full_turn_returns_to_start() {
        let original = MakeCube::default().create().unwrap();
        let mut mesh = original.clone();
        let axis = Vector3::new(1.0, 1.0, 0.0);
        Rotate::new(Point3::new(0.3, -1.0, 2.0), axis, 2.0 * std::f64::consts::PI)
            .modify(&mut mesh)
            .unwrap();
        for (a, b) in mesh.vertices().iter().zip(original.vertices()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
        assert_eq!(mesh.faces(), original.faces());
    }
}
