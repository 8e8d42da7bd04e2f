//! Predicate-based face selection.
//!
//! A [`FaceSelection`] borrows the mesh it selects from, so the mesh cannot
//! be restructured while the selection is alive. To scope a modifier, copy the
//! indices out with [`FaceSelection::indices`] and hand them over once the
//! borrow has ended.

use std::collections::BTreeSet;

use crate::error::{GeometryError, Result, TopologyError};
use crate::math::{Vector3, ANGULAR_TOLERANCE, TOLERANCE};
use crate::mesh::{Face, Mesh3D};

/// An ordered, duplicate-free set of faces drawn from one mesh.
///
/// Every `select_*` call adds to the current set. Iteration always follows
/// the mesh's face order, regardless of the order faces were selected in.
#[derive(Debug, Clone)]
pub struct FaceSelection<'a> {
    mesh: &'a Mesh3D,
    selected: BTreeSet<usize>,
}

impl<'a> FaceSelection<'a> {
    /// Creates an empty selection over `mesh`.
    #[must_use]
    pub fn new(mesh: &'a Mesh3D) -> Self {
        Self {
            mesh,
            selected: BTreeSet::new(),
        }
    }

    /// Selects every face of the mesh.
    pub fn select_all(&mut self) -> &mut Self {
        self.selected = (0..self.mesh.face_count()).collect();
        self
    }

    /// Deselects everything.
    pub fn clear(&mut self) -> &mut Self {
        self.selected.clear();
        self
    }

    /// Replaces the selection with its complement within the mesh.
    pub fn invert(&mut self) -> &mut Self {
        self.selected = (0..self.mesh.face_count())
            .filter(|i| !self.selected.contains(i))
            .collect();
        self
    }

    /// Adds the face at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceIndexOutOfBounds`] if the mesh has no such face.
    pub fn select_by_index(&mut self, index: usize) -> Result<&mut Self> {
        let count = self.mesh.face_count();
        if index >= count {
            return Err(TopologyError::FaceIndexOutOfBounds { index, count }.into());
        }
        self.selected.insert(index);
        Ok(self)
    }

    /// Adds every face with exactly `count` vertices.
    pub fn select_by_vertex_count(&mut self, count: usize) -> &mut Self {
        self.select_where(|_, face| face.arity() == count)
    }

    /// Adds every face for which `predicate(index, face)` holds.
    pub fn select_where(&mut self, predicate: impl Fn(usize, &Face) -> bool) -> &mut Self {
        let mesh = self.mesh;
        self.selected.extend(
            mesh.faces()
                .iter()
                .enumerate()
                .filter(|(i, face)| predicate(*i, face))
                .map(|(i, _)| i),
        );
        self
    }

    /// Adds the faces whose normals point furthest up (+Y).
    ///
    /// # Errors
    ///
    /// Returns an error if a face references a missing vertex.
    pub fn select_top_faces(&mut self) -> Result<&mut Self> {
        self.select_extreme_faces(&Vector3::y())
    }

    /// Adds the faces whose normals point furthest down (−Y).
    ///
    /// # Errors
    ///
    /// Returns an error if a face references a missing vertex.
    pub fn select_bottom_faces(&mut self) -> Result<&mut Self> {
        self.select_extreme_faces(&-Vector3::y())
    }

    /// Adds the faces whose normals are most aligned with `direction`.
    ///
    /// Alignment is the dot product of the unit face normal with the unit
    /// direction. All faces within [`ANGULAR_TOLERANCE`] of the maximum are
    /// selected, so ties are included. No angular threshold is applied: on
    /// any non-empty mesh at least one face is selected.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `direction` has zero length,
    /// or an error if a face references a missing vertex.
    pub fn select_extreme_faces(&mut self, direction: &Vector3) -> Result<&mut Self> {
        let direction = direction
            .try_normalize(TOLERANCE)
            .ok_or(GeometryError::ZeroVector("selection direction"))?;

        let alignments = self
            .mesh
            .faces()
            .iter()
            .map(|face| -> Result<f64> { Ok(self.mesh.face_normal(face)?.dot(&direction)) })
            .collect::<Result<Vec<f64>>>()?;

        let Some(max) = alignments.iter().copied().reduce(f64::max) else {
            return Ok(self);
        };
        self.selected.extend(
            alignments
                .iter()
                .enumerate()
                .filter(|&(_, &dot)| dot >= max - ANGULAR_TOLERANCE)
                .map(|(i, _)| i),
        );
        Ok(self)
    }

    /// Adds the faces whose normal deviates from `target` by at most
    /// `tolerance` radians.
    ///
    /// Degenerate faces (zero normal) never match.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `target` has zero length, or
    /// an error if a face references a missing vertex.
    pub fn select_similar_normal(&mut self, target: &Vector3, tolerance: f64) -> Result<&mut Self> {
        let target = target
            .try_normalize(TOLERANCE)
            .ok_or(GeometryError::ZeroVector("target normal"))?;

        let mut matches = Vec::new();
        for (i, face) in self.mesh.faces().iter().enumerate() {
            let normal = self.mesh.face_normal(face)?;
            if normal.norm() < TOLERANCE {
                continue;
            }
            let cos = normal.dot(&target).clamp(-1.0, 1.0);
            if cos.acos() <= tolerance {
                matches.push(i);
            }
        }
        self.selected.extend(matches);
        Ok(self)
    }

    /// Number of selected faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns `true` if the face at `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected face indices in mesh order.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Selected faces in mesh order.
    #[must_use]
    pub fn faces(&self) -> Vec<&'a Face> {
        let faces = self.mesh.faces();
        self.selected.iter().map(|&i| &faces[i]).collect()
    }
}
