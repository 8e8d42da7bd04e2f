use crate::error::{GeometryError, OperationError, Result, TopologyError};
use crate::math::TOLERANCE;
use crate::mesh::Mesh3D;

use super::TopologyReport;

/// Validates the structural and geometric consistency of a mesh.
///
/// Always checked: indices in range, arity of at least three, no face
/// visiting a vertex twice, no zero-area face. With `require_closed` the
/// mesh must additionally be a closed, consistently wound manifold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsValid {
    /// Also require a closed manifold.
    pub require_closed: bool,
}

impl IsValid {
    /// Creates a new `IsValid` query that accepts open meshes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the mesh must be closed.
    #[must_use]
    pub fn with_require_closed(mut self, require_closed: bool) -> Self {
        self.require_closed = require_closed;
        self
    }

    /// Executes the validation, returning `true` if the mesh is valid.
    #[must_use]
    pub fn execute(&self, mesh: &Mesh3D) -> bool {
        self.validate(mesh).is_ok()
    }

    /// Like [`execute`](Self::execute), but reports the first problem found.
    ///
    /// # Errors
    ///
    /// Returns an index error for dangling indices,
    /// [`OperationError::InvalidInput`] for malformed faces,
    /// [`GeometryError::Degenerate`] for zero-area faces, and
    /// [`TopologyError::NotClosedManifold`] when closure is required but absent.
    pub fn validate(&self, mesh: &Mesh3D) -> Result<()> {
        mesh.check_indices()?;
        for (i, face) in mesh.faces().iter().enumerate() {
            if face.arity() < 3 {
                return Err(OperationError::InvalidInput(format!(
                    "face {i} has only {} vertices",
                    face.arity()
                ))
                .into());
            }
            if face.has_repeated_index() {
                return Err(OperationError::InvalidInput(format!(
                    "face {i} visits a vertex twice"
                ))
                .into());
            }
            if mesh.face_area(face)? < TOLERANCE {
                return Err(GeometryError::Degenerate(format!("face {i} has zero area")).into());
            }
        }

        if self.require_closed {
            let report = TopologyReport::of(mesh);
            if !report.is_closed_manifold() {
                return Err(TopologyError::NotClosedManifold(format!(
                    "{} boundary, {} non-manifold, {} inconsistently wound edges",
                    report.boundary_edges, report.non_manifold_edges, report.inconsistent_edges
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::{MakeCircle, MakeCube};
    use crate::operations::Creator;

    #[test]
    fn creators_are_valid() {
        let cube = MakeCube::default().create().unwrap();
        assert!(IsValid::new().with_require_closed(true).execute(&cube));

        let disk = MakeCircle::default().create().unwrap();
        assert!(IsValid::new().execute(&disk));
        assert!(!IsValid::new().with_require_closed(true).execute(&disk));
    }

    #[test]
    fn malformed_faces_are_invalid() {
        let mut mesh = MakeCube::default().create().unwrap();
        mesh.add_face([0, 1]);
        assert!(!IsValid::new().execute(&mesh));

        let mut mesh = MakeCube::default().create().unwrap();
        mesh.add_face([0, 1, 0]);
        assert!(!IsValid::new().execute(&mesh));

        let mut mesh = MakeCube::default().create().unwrap();
        mesh.add_face([0, 1, 100]);
        assert!(IsValid::new().validate(&mesh).is_err());
    }

    #[test]
    fn zero_area_face_is_invalid() {
        let mut mesh = Mesh3D::new();
        mesh.add_vertices([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ]);
        mesh.add_face([0, 1, 2]);
        assert!(!IsValid::new().execute(&mesh));
    }
}
