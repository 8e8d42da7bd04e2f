use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::math::{Point3, Vector3};
use crate::mesh::Mesh3D;
use crate::operations::Modifier;

/// Extrudes faces individually along their normals.
///
/// Each face gets a new ring of vertices at `v + normal * amount`, scaled
/// about the moved face center by `scale`. One collar quad per edge joins the
/// old ring to the new one and the face itself is rewritten in place as the
/// cap over the new ring, so its index is preserved. With `remove_face` the
/// caps are dropped instead, which opens the mesh.
///
/// Adjacent faces get separate collars with duplicated vertices along the
/// shared edges; weld them with [`Mesh3D::remove_doubles`] if needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrude {
    /// Distance to move each face along its normal.
    pub amount: f64,
    /// Scale applied to the new ring about the moved face center.
    pub scale: f64,
    /// Drop the caps after extruding.
    pub remove_face: bool,
}

impl Default for Extrude {
    fn default() -> Self {
        Self {
            amount: 0.0,
            scale: 1.0,
            remove_face: false,
        }
    }
}

/// Everything needed to extrude one face, gathered before mutation.
struct FacePlan {
    index: usize,
    ring: Vec<usize>,
    points: Vec<Point3>,
}

impl Extrude {
    /// Creates an extrusion by `amount` with unit scale, keeping the caps.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Sets the scale of the extruded ring.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets whether the caps are removed after extruding.
    #[must_use]
    pub fn with_remove_face(mut self, remove_face: bool) -> Self {
        self.remove_face = remove_face;
        self
    }

    /// Extrudes only the faces at `faces`. Duplicate indices are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceIndexOutOfBounds`] for an unknown face
    /// index or [`TopologyError::VertexIndexOutOfBounds`] if a face
    /// references a missing vertex. The mesh is unchanged in either case.
    pub fn modify_faces(&self, mesh: &mut Mesh3D, faces: &[usize]) -> Result<()> {
        let selected: BTreeSet<usize> = faces.iter().copied().collect();
        let plans = selected
            .iter()
            .map(|&index| self.plan(mesh, index))
            .collect::<Result<Vec<_>>>()?;

        for plan in &plans {
            let n = plan.ring.len();
            let first = mesh.add_vertices(plan.points.iter().copied());
            for i in 0..n {
                let j = (i + 1) % n;
                mesh.add_face([plan.ring[i], plan.ring[j], first + j, first + i]);
            }
            mesh.replace_face(plan.index, (first..first + n).collect::<Vec<_>>())?;
        }

        if self.remove_face {
            let caps: Vec<usize> = plans.iter().map(|plan| plan.index).collect();
            mesh.remove_faces(&caps)?;
        }

        debug!(
            faces = plans.len(),
            amount = self.amount,
            scale = self.scale,
            remove_face = self.remove_face,
            "extruded faces"
        );
        Ok(())
    }

    fn plan(&self, mesh: &Mesh3D, index: usize) -> Result<FacePlan> {
        let count = mesh.face_count();
        let face = mesh
            .faces()
            .get(index)
            .ok_or(TopologyError::FaceIndexOutOfBounds { index, count })?;

        let normal: Vector3 = mesh.face_normal(face)?;
        let offset = normal * self.amount;
        let center = mesh.face_center(face)? + offset;
        let points = mesh
            .face_points(face)?
            .into_iter()
            .map(|p| center + (p + offset - center) * self.scale)
            .collect();

        Ok(FacePlan {
            index,
            ring: face.indices().to_vec(),
            points,
        })
    }
}

impl Modifier for Extrude {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        let all: Vec<usize> = (0..mesh.face_count()).collect();
        self.modify_faces(mesh, &all)
    }
}
