use rayon::prelude::*;
use tracing::warn;

use crate::error::Result;
use crate::math::{Point3, TOLERANCE};
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Projects every vertex radially onto a sphere.
///
/// A vertex sitting on the center has no direction and is left in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushToSphere {
    /// Sphere radius. Defaults to 1.
    pub radius: f64,
    /// Sphere center. Defaults to the origin.
    pub center: Point3,
}

impl Default for PushToSphere {
    fn default() -> Self {
        Self {
            radius: 1.0,
            center: Point3::origin(),
        }
    }
}

impl PushToSphere {
    /// Creates a projection onto a sphere of `radius` about the origin.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Sets the sphere center.
    #[must_use]
    pub fn with_center(mut self, center: Point3) -> Self {
        self.center = center;
        self
    }
}

impl Modifier for PushToSphere {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        let skipped: usize = mesh
            .vertices_mut()
            .par_iter_mut()
            .map(|p| match (*p - self.center).try_normalize(TOLERANCE) {
                Some(direction) => {
                    *p = self.center + direction * self.radius;
                    0
                }
                None => 1,
            })
            .sum();
        if skipped > 0 {
            warn!(skipped, "vertices at the sphere center were not projected");
        }
        Ok(())
    }
}
