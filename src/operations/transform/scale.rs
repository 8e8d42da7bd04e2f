use crate::error::Result;
use crate::math::{Matrix4, Point3, Vector3};
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Scales a mesh per axis about a center point.
///
/// An odd number of negative factors mirrors the mesh; faces are then
/// reversed so normals keep pointing outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Fixed point of the scaling.
    pub center: Point3,
    /// Scale factor along X, Y and Z.
    pub factors: Vector3,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            factors: Vector3::repeat(1.0),
        }
    }
}

impl Scale {
    /// Creates a per-axis scale about `center`.
    #[must_use]
    pub fn new(center: Point3, factors: Vector3) -> Self {
        Self { center, factors }
    }

    /// Uniform scale about the world origin.
    #[must_use]
    pub fn uniform(factor: f64) -> Self {
        Self {
            factors: Vector3::repeat(factor),
            ..Self::default()
        }
    }

    /// Sets the fixed point.
    #[must_use]
    pub fn with_center(mut self, center: Point3) -> Self {
        self.center = center;
        self
    }
}

impl Modifier for Scale {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        let matrix = Matrix4::new_translation(&self.center.coords)
            * Matrix4::new_nonuniform_scaling(&self.factors)
            * Matrix4::new_translation(&(-self.center.coords));
        mesh.transform(&matrix);
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

    #[test]
    fn per_axis_about_center() {
        let mut mesh = MakeCube::default().create().unwrap();
        Scale::new(Point3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 1.0, 0.5))
            .modify(&mut mesh)
            .unwrap();
        let bounds = mesh.bounds().unwrap();
        assert_relative_eq!(bounds.min, Point3::new(-3.0, -1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn negative_factor_keeps_normals_outward() {
        let mut mesh = MakeCube::default().create().unwrap();
        Scale::uniform(-2.0).modify(&mut mesh).unwrap();
        assert_relative_eq!(mesh.bounds().unwrap().width(), 4.0, epsilon = 1e-12);
        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            assert!(normal.dot(&mesh.face_center(face).unwrap().coords) > 0.0);
        }
    }
}
