use tracing::debug;

use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::modification::{FlipFaces, Solidify};
use crate::operations::shaping::Extrude;
use crate::operations::{Creator, Modifier};
use crate::selection::FaceSelection;

use super::MakeSegmentedTube;

/// Creates a tube whose walls are cut into a lattice of windows.
///
/// Starts from a [`MakeSegmentedTube`], opens a window scaled by
/// `scale_extrude` in every wall quad, and solidifies the remaining frame by
/// `thickness`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeTubeLattice {
    pub vertices: usize,
    pub segments: usize,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub height: f64,
    /// Window size relative to its wall quad.
    pub scale_extrude: f64,
    pub thickness: f64,
}

impl Default for MakeTubeLattice {
    fn default() -> Self {
        let tube = MakeSegmentedTube::default();
        Self {
            vertices: tube.vertices,
            segments: tube.segments,
            outer_radius: tube.outer_radius,
            inner_radius: tube.inner_radius,
            height: tube.height,
            scale_extrude: 0.5,
            thickness: 0.1,
        }
    }
}

impl Creator for MakeTubeLattice {
    fn create(&self) -> Result<Mesh3D> {
        let mut mesh = MakeSegmentedTube {
            vertices: self.vertices,
            segments: self.segments,
            outer_radius: self.outer_radius,
            inner_radius: self.inner_radius,
            height: self.height,
        }
        .create()?;

        let walls = {
            let mut selection = FaceSelection::new(&mesh);
            selection.select_top_faces()?.select_bottom_faces()?.invert();
            selection.indices()
        };

        Extrude::new(0.0)
            .with_scale(self.scale_extrude)
            .with_remove_face(true)
            .modify_faces(&mut mesh, &walls)?;
        FlipFaces.modify(&mut mesh)?;
        Solidify::new(self.thickness).modify(&mut mesh)?;

        debug!(
            windows = walls.len(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "created tube lattice"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::TopologyReport;

    #[test]
    fn small_lattice() {
        let lattice = MakeTubeLattice {
            vertices: 8,
            segments: 2,
            ..MakeTubeLattice::default()
        };
        let mesh = lattice.create().unwrap();
        let report = TopologyReport::of(&mesh);

        // Tube: 48 vertices, 48 faces, 32 of them wall quads.
        let windows = 32;
        let open_vertices = 48 + 4 * windows;
        let open_faces = 16 + 4 * windows;
        assert_eq!(report.vertex_count, 2 * open_vertices);
        assert_eq!(report.face_count, 2 * open_faces + 4 * windows);
        assert!(report.is_closed_manifold());
        assert_eq!(report.loose_vertices, 0);
        // Doubling a torus with 32 holes.
        assert_eq!(report.euler_characteristic(), -64);
    }
}
