use crate::error::Result;
use crate::math::Matrix4;
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Applies an arbitrary 4x4 affine matrix to every vertex.
///
/// If the linear part mirrors space (negative determinant) every face is
/// reversed as well, keeping normals outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralTransform {
    /// The transformation matrix.
    pub matrix: Matrix4,
}

impl Default for GeneralTransform {
    fn default() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` modifier.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }
}

impl Modifier for GeneralTransform {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        mesh.transform(&self.matrix);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeCube;
    use crate::operations::Creator;
    use approx::assert_relative_eq;

    #[test]
    fn identity_is_a_no_op() {
        let original = MakeCube::default().create().unwrap();
        let mut mesh = original.clone();
        GeneralTransform::default().modify(&mut mesh).unwrap();
        assert_eq!(mesh, original);
    }

    #[test]
    fn scale_and_translate() {
        let mut mesh = MakeCube::default().create().unwrap();
        let matrix = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0))
            * Matrix4::new_scaling(2.0);
        GeneralTransform::new(matrix).modify(&mut mesh).unwrap();

        let bounds = mesh.bounds().unwrap();
        assert_relative_eq!(bounds.min, Point3::new(-1.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(bounds.max, Point3::new(3.0, 4.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn negative_determinant_keeps_normals_outward() {
        let mut mesh = MakeCube::default().create().unwrap();
        let matrix = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 1.0, -1.0));
        GeneralTransform::new(matrix).modify(&mut mesh).unwrap();
        for face in mesh.faces() {
            let normal = mesh.face_normal(face).unwrap();
            assert!(normal.dot(&mesh.face_center(face).unwrap().coords) > 0.0);
        }
    }
}
