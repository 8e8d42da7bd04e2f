use std::collections::BTreeSet;

use crate::error::{Result, TopologyError};
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Reverses face windings, turning the mesh inside out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipFaces;

impl FlipFaces {
    /// Reverses only the faces at `faces`. Duplicate indices flip once.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceIndexOutOfBounds`] for an unknown face
    /// index. The mesh is unchanged in that case.
    pub fn modify_faces(&self, mesh: &mut Mesh3D, faces: &[usize]) -> Result<()> {
        let count = mesh.face_count();
        let selected: BTreeSet<usize> = faces.iter().copied().collect();
        if let Some(&index) = selected.iter().find(|&&i| i >= count) {
            return Err(TopologyError::FaceIndexOutOfBounds { index, count }.into());
        }
        for index in selected {
            let flipped = mesh.face(index)?.flipped();
            mesh.replace_face(index, flipped)?;
        }
        Ok(())
    }
}

impl Modifier for FlipFaces {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        mesh.flip_faces();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCube;
    use crate::operations::Creator;

    #[test]
    fn flipping_twice_restores_the_mesh() {
        let original = MakeCube::default().create().unwrap();
        let mut mesh = original.clone();
        FlipFaces.modify(&mut mesh).unwrap();
        assert_ne!(mesh, original);
        FlipFaces.modify(&mut mesh).unwrap();
        assert_eq!(mesh, original);
    }

    #[test]
    fn flips_only_selected_faces() {
        let original = MakeCube::default().create().unwrap();
        let mut mesh = original.clone();
        FlipFaces.modify_faces(&mut mesh, &[1, 1]).unwrap();

        assert_eq!(mesh.faces()[0], original.faces()[0]);
        let normal = mesh.face_normal(mesh.face(1).unwrap()).unwrap();
        let before = original.face_normal(original.face(1).unwrap()).unwrap();
        assert!(normal.dot(&before) < 0.0);
    }

    #[test]
    fn bad_index_is_rejected() {
        let mut mesh = MakeCube::default().create().unwrap();
        let before = mesh.clone();
        assert!(FlipFaces.modify_faces(&mut mesh, &[0, 42]).is_err());
        assert_eq!(mesh, before);
    }
}
