pub mod bounds;
pub mod edge;
pub mod face;

pub use bounds::Bounds3;
pub use edge::EdgeKey;
pub use face::Face;

use std::collections::{BTreeSet, HashMap, HashSet};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{Result, TopologyError};
use crate::math::polygon_3d::{centroid, newell_normal, perimeter, polygon_area, polygon_normal};
use crate::math::rotation::{linear_determinant, rotation_matrix, transform_point};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

/// Minimum number of vertices a single rayon task processes in bulk transforms.
const PARALLEL_MIN_LEN: usize = 1024;

/// A polygon mesh: an arena of vertex positions plus faces that reference
/// them by index.
///
/// A vertex's index is its only identity. Faces may have any arity ≥ 3 and
/// are wound counter-clockwise when seen from outside. Meshes produced by
/// creators are closed, edge-manifold and free of loose vertices; during
/// multi-step edits those properties may temporarily not hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh3D {
    vertices: Vec<Point3>,
    faces: Vec<Face>,
}

impl Mesh3D {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from existing vertex and face lists without validation.
    #[must_use]
    pub fn from_parts(vertices: Vec<Point3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    // --- Vertex operations ---

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, point: Point3) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Appends several vertices, returning the index of the first one.
    pub fn add_vertices(&mut self, points: impl IntoIterator<Item = Point3>) -> usize {
        let first = self.vertices.len();
        self.vertices.extend(points);
        first
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if there is no such vertex.
    pub fn vertex(&self, index: usize) -> Result<&Point3> {
        let count = self.vertices.len();
        self.vertices
            .get(index)
            .ok_or_else(|| TopologyError::VertexIndexOutOfBounds { index, count }.into())
    }

    /// Returns a mutable reference to the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if there is no such vertex.
    pub fn vertex_mut(&mut self, index: usize) -> Result<&mut Point3> {
        let count = self.vertices.len();
        self.vertices
            .get_mut(index)
            .ok_or_else(|| TopologyError::VertexIndexOutOfBounds { index, count }.into())
    }

    /// All vertex positions in index order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Mutable access to the vertex positions. The slice cannot grow or
    /// shrink, so face indices stay valid.
    pub fn vertices_mut(&mut self) -> &mut [Point3] {
        &mut self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Face operations ---

    /// Appends a face and returns its index.
    ///
    /// Indices are not checked against the vertex count; a dangling index is
    /// reported when the face is later queried.
    pub fn add_face(&mut self, face: impl Into<Face>) -> usize {
        self.faces.push(face.into());
        self.faces.len() - 1
    }

    /// Returns the face at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceIndexOutOfBounds`] if there is no such face.
    pub fn face(&self, index: usize) -> Result<&Face> {
        let count = self.faces.len();
        self.faces
            .get(index)
            .ok_or_else(|| TopologyError::FaceIndexOutOfBounds { index, count }.into())
    }

    /// All faces in order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the mesh has neither vertices nor faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Replaces the face at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceIndexOutOfBounds`] if there is no such face.
    pub fn replace_face(&mut self, index: usize, face: impl Into<Face>) -> Result<Face> {
        let count = self.faces.len();
        let slot = self
            .faces
            .get_mut(index)
            .ok_or(TopologyError::FaceIndexOutOfBounds { index, count })?;
        Ok(std::mem::replace(slot, face.into()))
    }

    /// Removes the faces at the given indices. The remaining faces keep their
    /// relative order; vertices are untouched and may become loose.
    ///
    /// Duplicate indices are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceIndexOutOfBounds`] if any index is out of
    /// range. The mesh is unchanged in that case.
    pub fn remove_faces(&mut self, indices: &[usize]) -> Result<()> {
        let count = self.faces.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= count) {
            return Err(TopologyError::FaceIndexOutOfBounds { index, count }.into());
        }
        let doomed: HashSet<usize> = indices.iter().copied().collect();
        let mut position = 0;
        self.faces.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });
        trace!(removed = doomed.len(), "removed faces");
        Ok(())
    }

    /// Reverses the winding of every face.
    pub fn flip_faces(&mut self) {
        self.faces.iter_mut().for_each(Face::flip);
    }

    /// Removes every face and returns them, keeping the vertices.
    pub fn take_faces(&mut self) -> Vec<Face> {
        std::mem::take(&mut self.faces)
    }

    /// Removes all vertices and faces.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }

    /// Appends the vertices and faces of `other`, offsetting its face indices
    /// by the current vertex count.
    pub fn append(&mut self, other: &Mesh3D) {
        let offset = self.vertices.len();
        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(other.faces.iter().map(|face| face.offset(offset)));
    }

    /// Checks that every face only references existing vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] for the first
    /// dangling index found.
    pub fn check_indices(&self) -> Result<()> {
        let count = self.vertices.len();
        for face in &self.faces {
            if let Some(&index) = face.indices().iter().find(|&&i| i >= count) {
                return Err(TopologyError::VertexIndexOutOfBounds { index, count }.into());
            }
        }
        Ok(())
    }

    /// Merges vertices whose coordinates are equal after rounding to
    /// `decimal_places` decimals, and returns how many vertices were merged away.
    ///
    /// The first vertex seen at a position is kept as the representative and
    /// survivors keep their relative order; callers should not depend on the
    /// resulting numbering beyond that. Faces are re-indexed, repeated
    /// consecutive indices collapse, and faces that end up with fewer than
    /// three distinct vertices or duplicate another face's vertex set are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if a face references
    /// a missing vertex. The mesh is unchanged in that case.
    #[allow(clippy::cast_possible_truncation)]
    pub fn remove_doubles(&mut self, decimal_places: i32) -> Result<usize> {
        self.check_indices()?;

        let factor = 10f64.powi(decimal_places);
        let quantize = |v: f64| (v * factor).round() as i64;

        let mut representatives: HashMap<[i64; 3], usize> = HashMap::new();
        let mut kept: Vec<Point3> = Vec::with_capacity(self.vertices.len());
        let remap: Vec<usize> = self
            .vertices
            .iter()
            .map(|p| {
                let key = [quantize(p.x), quantize(p.y), quantize(p.z)];
                *representatives.entry(key).or_insert_with(|| {
                    kept.push(*p);
                    kept.len() - 1
                })
            })
            .collect();

        let merged = self.vertices.len() - kept.len();
        let face_count = self.faces.len();
        let mut seen: HashSet<Vec<usize>> = HashSet::with_capacity(face_count);
        let faces = std::mem::take(&mut self.faces);
        for face in faces {
            let mut indices: Vec<usize> = face.indices().iter().map(|&i| remap[i]).collect();
            indices.dedup();
            while indices.len() > 1 && indices.first() == indices.last() {
                indices.pop();
            }
            let face = Face::new(indices);
            if face.arity() < 3 || face.has_repeated_index() {
                continue;
            }
            if seen.insert(face.sorted_indices()) {
                self.faces.push(face);
            }
        }

        self.vertices = kept;
        debug!(
            merged,
            dropped_faces = face_count - self.faces.len(),
            "removed double vertices"
        );
        Ok(merged)
    }

    /// Drops vertices that no face references and re-indexes the faces.
    /// Returns the number of vertices removed.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if a face references
    /// a missing vertex. The mesh is unchanged in that case.
    pub fn remove_loose_vertices(&mut self) -> Result<usize> {
        self.check_indices()?;

        let mut used = vec![false; self.vertices.len()];
        for face in &self.faces {
            for &i in face.indices() {
                used[i] = true;
            }
        }

        let mut remap = vec![usize::MAX; self.vertices.len()];
        let mut kept = Vec::with_capacity(self.vertices.len());
        for (i, p) in self.vertices.iter().enumerate() {
            if used[i] {
                remap[i] = kept.len();
                kept.push(*p);
            }
        }

        let removed = self.vertices.len() - kept.len();
        for face in &mut self.faces {
            for index in face.indices_mut() {
                *index = remap[*index];
            }
        }
        self.vertices = kept;
        Ok(removed)
    }

    // --- Geometric queries ---

    /// Positions of the face's vertices in winding order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if the face
    /// references a missing vertex.
    pub fn face_points(&self, face: &Face) -> Result<Vec<Point3>> {
        face.indices().iter().map(|&i| self.vertex(i).copied()).collect()
    }

    /// Outward unit normal of the face (Newell's method), or the zero vector
    /// for a degenerate face.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if the face
    /// references a missing vertex.
    pub fn face_normal(&self, face: &Face) -> Result<Vector3> {
        Ok(polygon_normal(&self.face_points(face)?))
    }

    /// Arithmetic mean of the face's vertex positions.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if the face
    /// references a missing vertex.
    pub fn face_center(&self, face: &Face) -> Result<Point3> {
        Ok(centroid(&self.face_points(face)?))
    }

    /// Area of the face.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if the face
    /// references a missing vertex.
    pub fn face_area(&self, face: &Face) -> Result<f64> {
        Ok(polygon_area(&self.face_points(face)?))
    }

    /// Sum of the face's edge lengths.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if the face
    /// references a missing vertex.
    pub fn face_perimeter(&self, face: &Face) -> Result<f64> {
        Ok(perimeter(&self.face_points(face)?))
    }

    /// Axis-aligned bounds of all vertices, `None` for a mesh without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::from_points(&self.vertices)
    }

    /// Mean of all vertex positions (the origin for an empty mesh).
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        centroid(&self.vertices)
    }

    /// Per-vertex normals: the area-weighted average of the normals of the
    /// faces around each vertex. Loose vertices get the zero vector.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexIndexOutOfBounds`] if a face references
    /// a missing vertex.
    pub fn vertex_normals(&self) -> Result<Vec<Vector3>> {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for face in &self.faces {
            let weighted = newell_normal(&self.face_points(face)?);
            for &i in face.indices() {
                normals[i] += weighted;
            }
        }
        for normal in &mut normals {
            *normal = normal.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros);
        }
        Ok(normals)
    }

    // --- Derived edges ---

    /// All distinct edges, sorted by vertex index.
    #[must_use]
    pub fn edges(&self) -> Vec<EdgeKey> {
        let edges: BTreeSet<EdgeKey> = self
            .faces
            .iter()
            .flat_map(|face| face.edges().map(|(a, b)| EdgeKey::new(a, b)))
            .collect();
        edges.into_iter().collect()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_face_counts().len()
    }

    /// How many faces use each edge.
    #[must_use]
    pub fn edge_face_counts(&self) -> HashMap<EdgeKey, usize> {
        let mut counts = HashMap::new();
        for face in &self.faces {
            for (a, b) in face.edges() {
                *counts.entry(EdgeKey::new(a, b)).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Directed edges used by exactly one face, oriented as they appear in
    /// that face, in face order.
    #[must_use]
    pub fn boundary_edges(&self) -> Vec<(usize, usize)> {
        let counts = self.edge_face_counts();
        self.faces
            .iter()
            .flat_map(|face| face.edges())
            .filter(|&(a, b)| counts.get(&EdgeKey::new(a, b)) == Some(&1))
            .collect()
    }

    // --- Bulk transforms ---

    /// Applies a 4x4 transform to every vertex.
    ///
    /// Vertices are processed in parallel over disjoint chunks. If the
    /// transform mirrors space, every face is flipped so normals stay
    /// outward. A mesh without vertices is left untouched.
    pub fn transform(&mut self, matrix: &Matrix4) {
        if self.vertices.is_empty() {
            return;
        }
        self.vertices
            .par_iter_mut()
            .with_min_len(PARALLEL_MIN_LEN)
            .for_each(|p| *p = transform_point(matrix, p));
        if linear_determinant(matrix) < 0.0 {
            self.flip_faces();
        }
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: &Vector3) {
        self.vertices
            .par_iter_mut()
            .with_min_len(PARALLEL_MIN_LEN)
            .for_each(|p| *p += *offset);
    }

    /// Moves every vertex along X.
    pub fn translate_x(&mut self, dx: f64) {
        self.translate(&Vector3::new(dx, 0.0, 0.0));
    }

    /// Moves every vertex along Y.
    pub fn translate_y(&mut self, dy: f64) {
        self.translate(&Vector3::new(0.0, dy, 0.0));
    }

    /// Moves every vertex along Z.
    pub fn translate_z(&mut self, dz: f64) {
        self.translate(&Vector3::new(0.0, 0.0, dz));
    }

    /// Scales every vertex uniformly about the origin.
    pub fn scale(&mut self, factor: f64) {
        self.transform(&Matrix4::new_scaling(factor));
    }

    /// Rotates every vertex about the X axis (radians, right-hand rule).
    pub fn rotate_x(&mut self, angle: f64) {
        self.transform(&rotation_matrix(&Vector3::x(), angle));
    }

    /// Rotates every vertex about the Y axis (radians, right-hand rule).
    pub fn rotate_y(&mut self, angle: f64) {
        self.transform(&rotation_matrix(&Vector3::y(), angle));
    }

    /// Rotates every vertex about the Z axis (radians, right-hand rule).
    pub fn rotate_z(&mut self, angle: f64) {
        self.transform(&rotation_matrix(&Vector3::z(), angle));
    }
}
