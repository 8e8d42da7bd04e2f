use tracing::debug;

use crate::error::Result;
use crate::math::TOLERANCE;
use crate::mesh::{Face, Mesh3D};
use crate::operations::Modifier;

/// Gives a surface thickness by adding an offset copy of it and bridging
/// the two along every boundary edge.
///
/// The copy is moved by `-thickness` along the vertex normals, so a positive
/// thickness grows the shell inwards (below the outward-facing side). Whichever
/// copy ends up inside has its windings reversed. Applied to a surface whose
/// boundary is a set of closed loops, the result is closed with twice the
/// vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solidify {
    /// Offset distance of the inner copy. Zero leaves the mesh untouched.
    pub thickness: f64,
}

impl Solidify {
    /// Creates a solidify modifier with the given thickness.
    #[must_use]
    pub fn new(thickness: f64) -> Self {
        Self { thickness }
    }
}

impl Modifier for Solidify {
    fn modify(&self, mesh: &mut Mesh3D) -> Result<()> {
        if self.thickness.abs() < TOLERANCE {
            return Ok(());
        }

        let normals = mesh.vertex_normals()?;
        let boundary = mesh.boundary_edges();
        let count = mesh.vertex_count();

        let offsets: Vec<_> = mesh
            .vertices()
            .iter()
            .zip(&normals)
            .map(|(p, n)| p - n * self.thickness)
            .collect();
        let copies: Vec<Face> = mesh.faces().iter().map(|face| face.offset(count)).collect();

        let inner_is_copy = self.thickness > 0.0;
        if !inner_is_copy {
            mesh.flip_faces();
        }
        mesh.add_vertices(offsets);
        for face in copies {
            mesh.add_face(if inner_is_copy { face.flipped() } else { face });
        }
        for &(a, b) in &boundary {
            let (a2, b2) = (a + count, b + count);
            if inner_is_copy {
                mesh.add_face([b, a, a2, b2]);
            } else {
                mesh.add_face([a, b, b2, a2]);
            }
        }

        debug!(
            thickness = self.thickness,
            bridged_edges = boundary.len(),
            "solidified mesh"
        );
        Ok(())
    }
}
