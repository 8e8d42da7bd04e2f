//! Conway polyhedron operators.
//!
//! Each operator is a pure derivation from one mesh to a new one, exposed as
//! `derive(&Mesh3D) -> Result<Mesh3D>`, plus a [`Modifier`](crate::Modifier)
//! impl that swaps the derived mesh into place.

mod ambo;
mod dual;
mod join;
mod kis;
mod ortho;
mod truncate;

pub use ambo::Ambo;
pub use dual::Dual;
pub use join::Join;
pub use kis::Kis;
pub use ortho::Ortho;
pub use truncate::Truncate;

use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::mesh::Mesh3D;

/// The faces and neighbors around one vertex, counter-clockwise when seen
/// from outside.
///
/// `faces[k]` lies between the edges to `neighbors[k]` and
/// `neighbors[k + 1]` (wrapping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VertexRing {
    pub neighbors: Vec<usize>,
    pub faces: Vec<usize>,
}

/// Walks the ring of every vertex. Loose vertices get `None`.
///
/// For each face corner `(prev, v, next)` the face sits between the edges
/// `v -> next` and `v -> prev`, so following `next -> prev` links visits the
/// faces around `v` in winding order.
///
/// # Errors
///
/// Returns [`TopologyError::VertexIndexOutOfBounds`] for dangling indices
/// and [`TopologyError::NotClosedManifold`] if a ring does not close, a
/// directed edge appears twice, or a vertex is a non-manifold pinch point.
pub(crate) fn vertex_rings(mesh: &Mesh3D) -> Result<Vec<Option<VertexRing>>> {
    mesh.check_indices()?;

    let count = mesh.vertex_count();
    let mut links: HashMap<(usize, usize), (usize, usize)> = HashMap::new();
    let mut first_out: Vec<Option<usize>> = vec![None; count];
    let mut degree = vec![0usize; count];

    for (f, face) in mesh.faces().iter().enumerate() {
        let indices = face.indices();
        let n = indices.len();
        for (i, &v) in indices.iter().enumerate() {
            let prev = indices[(i + n - 1) % n];
            let next = indices[(i + 1) % n];
            if links.insert((v, next), (prev, f)).is_some() {
                return Err(TopologyError::NotClosedManifold(format!(
                    "directed edge {v} -> {next} is used by more than one face"
                ))
                .into());
            }
            first_out[v].get_or_insert(next);
            degree[v] += 1;
        }
    }

    first_out
        .iter()
        .enumerate()
        .map(|(v, start)| -> Result<Option<VertexRing>> {
            let Some(start) = *start else {
                return Ok(None);
            };
            let mut ring = VertexRing {
                neighbors: Vec::with_capacity(degree[v]),
                faces: Vec::with_capacity(degree[v]),
            };
            let mut next = start;
            loop {
                let &(prev, f) = links.get(&(v, next)).ok_or_else(|| {
                    TopologyError::NotClosedManifold(format!(
                        "vertex {v} lies on an open boundary"
                    ))
                })?;
                ring.neighbors.push(next);
                ring.faces.push(f);
                next = prev;
                if next == start {
                    break;
                }
                if ring.faces.len() >= degree[v] {
                    return Err(TopologyError::NotClosedManifold(format!(
                        "ring around vertex {v} does not close"
                    ))
                    .into());
                }
            }
            if ring.faces.len() != degree[v] {
                return Err(TopologyError::NotClosedManifold(format!(
                    "vertex {v} is shared by more than one fan of faces"
                ))
                .into());
            }
            Ok(Some(ring))
        })
        .collect()
}
