use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::modification::{CenterAt, Solidify};
use crate::operations::shaping::Extrude;
use crate::operations::transform::Rotate;
use crate::operations::{Creator, Modifier};

use super::MakeCircle;

/// Decimal places used to weld the shared corners of neighboring cells.
const WELD_PRECISION: i32 = 4;

/// Creates a honeycomb panel: a grid of hexagonal frames, thickened and
/// centered on the origin.
///
/// Hexagons point along Z; odd rows are offset by half a cell. Each cell is
/// inset by `inner_scale` and opened, and the panel is solidified by
/// `height` downwards before centering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeHoneyComb {
    pub row_count: usize,
    pub col_count: usize,
    /// Circumradius of one cell.
    pub cell_radius: f64,
    /// Panel thickness.
    pub height: f64,
    /// Size of each opening relative to its cell.
    pub inner_scale: f64,
}

impl Default for MakeHoneyComb {
    fn default() -> Self {
        Self {
            row_count: 2,
            col_count: 2,
            cell_radius: 0.5,
            height: 0.2,
            inner_scale: 0.9,
        }
    }
}

impl MakeHoneyComb {
    /// Creates a honeycomb of `row_count` by `col_count` cells with the
    /// default cell geometry.
    #[must_use]
    pub fn new(row_count: usize, col_count: usize) -> Self {
        Self {
            row_count,
            col_count,
            ..Self::default()
        }
    }

    fn cell(&self) -> Result<Mesh3D> {
        let mut cell = MakeCircle::new(self.cell_radius, 6).create()?;
        Rotate::y(FRAC_PI_2).modify(&mut cell)?;
        Ok(cell)
    }
}

impl Creator for MakeHoneyComb {
    #[allow(clippy::cast_precision_loss)]
    fn create(&self) -> Result<Mesh3D> {
        let mut mesh = Mesh3D::new();
        let cell = self.cell()?;
        let Some(bounds) = cell.bounds() else {
            return Ok(mesh);
        };
        let width = bounds.width();
        let row_step = bounds.depth() - self.cell_radius / 2.0;

        for i in 0..self.col_count {
            for j in 0..self.row_count {
                let mut segment = cell.clone();
                segment.translate_x(i as f64 * width);
                segment.translate_z(j as f64 * row_step);
                if j % 2 == 1 {
                    segment.translate_x(width / 2.0);
                }
                mesh.append(&segment);
            }
        }

        mesh.remove_doubles(WELD_PRECISION)?;
        Extrude::new(0.0)
            .with_scale(self.inner_scale)
            .with_remove_face(true)
            .modify(&mut mesh)?;
        Solidify::new(self.height).modify(&mut mesh)?;
        CenterAt::default().modify(&mut mesh)?;

        debug!(
            rows = self.row_count,
            cols = self.col_count,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "created honeycomb"
        );
        Ok(mesh)
    }
}
