use crate::error::{Result, TopologyError};
use crate::mesh::Mesh3D;

/// Computes the total area of a mesh's faces, or of a subset of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceArea {
    faces: Option<Vec<usize>>,
}

impl SurfaceArea {
    /// Creates a query over every face.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to the given face indices.
    #[must_use]
    pub fn with_faces(mut self, faces: Vec<usize>) -> Self {
        self.faces = Some(faces);
        self
    }

    /// Executes the query, returning the summed face area.
    ///
    /// # Errors
    ///
    /// Returns an index error if a face index or a vertex index is out of range.
    pub fn execute(&self, mesh: &Mesh3D) -> Result<f64> {
        match &self.faces {
            None => mesh.faces().iter().map(|face| mesh.face_area(face)).sum(),
            Some(indices) => indices
                .iter()
                .map(|&index| -> Result<f64> {
                    let face = mesh.faces().get(index).ok_or(
                        TopologyError::FaceIndexOutOfBounds {
                            index,
                            count: mesh.face_count(),
                        },
                    )?;
                    mesh.face_area(face)
                })
                .sum(),
        }
    }
}
