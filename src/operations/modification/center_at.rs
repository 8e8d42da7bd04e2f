use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Translates the mesh so the center of its bounding box lands on `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterAt {
    /// Where the bounds center ends up. Defaults to the origin.
    pub target: Point3,
}

impl Default for CenterAt {
    fn default() -> Self {
        Self {
            target: Point3::origin(),
        }
    }
}

impl CenterAt {
    /// Creates a modifier centering the mesh on `target`.
    #[must_use]
    pub fn new(target: Point3) -> Self {
        Self { target }
    }
}

impl Modifier for CenterAt {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        if let Some(bounds) = mesh.bounds() {
            mesh.translate(&(self.target - bounds.center()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::creation::MakeCube;
    use crate::operations::Creator;
    use approx::assert_relative_eq;

    #[test]
    fn moves_bounds_center() {
        let mut mesh = MakeCube::default().create().unwrap();
        mesh.translate(&Vector3::new(3.0, -2.0, 7.5));
        CenterAt::default().modify(&mut mesh).unwrap();
        assert_relative_eq!(mesh.bounds().unwrap().center(), Point3::origin(), epsilon = 1e-12);

        CenterAt::new(Point3::new(1.0, 2.0, 3.0)).modify(&mut mesh).unwrap();
        assert_relative_eq!(
            mesh.bounds().unwrap().center(),
            Point3::new(1.0, 2.0, 3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn empty_mesh_is_untouched() {
        let mut mesh = Mesh3D::new();
        CenterAt::default().modify(&mut mesh).unwrap();
        assert!(mesh.is_empty());
    }
}
