use std::collections::HashMap;

use nalgebra::center;
use tracing::debug;

use crate::error::Result;
use crate::mesh::{EdgeKey, Mesh3D};
use crate::operations::Modifier;

/// Subdivides every face by connecting its edge midpoints, without moving
/// any vertex off the original surface.
///
/// Each iteration splits an n-gon into one central n-gon over its edge
/// midpoints and n corner triangles. Midpoints are shared between the two
/// faces of an edge and original vertices keep their indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanarMidEdge {
    /// Number of iterations. Zero leaves the mesh untouched.
    pub subdivisions: usize,
}

impl PlanarMidEdge {
    /// Creates a subdivider running `subdivisions` iterations.
    #[must_use]
    pub fn new(subdivisions: usize) -> Self {
        Self { subdivisions }
    }
}

impl Modifier for PlanarMidEdge {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        if self.subdivisions == 0 {
            return Ok(());
        }
        mesh.check_indices()?;
        for _ in 0..self.subdivisions {
            subdivide_once(mesh);
        }
        debug!(
            iterations = self.subdivisions,
            faces = mesh.face_count(),
            "planar mid-edge subdivision"
        );
        Ok(())
    }
}

/// One iteration; indices must already be validated.
fn subdivide_once(mesh: &mut Mesh3D) {
    let faces = mesh.take_faces();
    let mut midpoints: HashMap<EdgeKey, usize> = HashMap::new();

    for face in &faces {
        let ring: Vec<usize> = face
            .edges()
            .map(|(a, b)| {
                *midpoints.entry(EdgeKey::new(a, b)).or_insert_with(|| {
                    let vertices = mesh.vertices();
                    let mid = center(&vertices[a], &vertices[b]);
                    mesh.add_vertex(mid)
                })
            })
            .collect();

        // ring[i] is the midpoint of the edge leaving corner i.
        let n = ring.len();
        for (i, &corner) in face.indices().iter().enumerate() {
            mesh.add_face([corner, ring[i], ring[(i + n - 1) % n]]);
        }
        mesh.add_face(ring);
    }
}
