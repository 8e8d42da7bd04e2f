use crate::error::Result;
use crate::mesh::Mesh3D;
use crate::operations::conway::Truncate;
use crate::operations::Creator;

use super::MakeTetrahedron;

/// Creates a uniform truncated tetrahedron with edge length `√8`.
///
/// The source tetrahedron sits on alternate corners of the cube `±3`, and a
/// third of every edge is cut off at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MakeTruncatedTetrahedron;

impl Creator for MakeTruncatedTetrahedron {
    fn create(&self) -> Result<Mesh3D> {
        Truncate::new(1.0 / 3.0).derive(&MakeTetrahedron::new(3.0).create()?)
    }
}
