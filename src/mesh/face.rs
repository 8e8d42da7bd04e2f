/// A polygon referencing mesh vertices by index.
///
/// Indices are ordered counter-clockwise when viewed from outside the mesh,
/// which defines the outward normal. A face holds no positions of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    /// Creates a face from an ordered list of vertex indices.
    #[must_use]
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    /// The vertex indices in winding order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of vertices (3 = triangle, 4 = quad, more = n-gon).
    #[must_use]
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// Directed edges `(from, to)` in winding order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }

    /// Returns `true` if the face references vertex `index`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Returns `true` if some vertex index occurs more than once.
    #[must_use]
    pub fn has_repeated_index(&self) -> bool {
        self.indices
            .iter()
            .enumerate()
            .any(|(i, a)| self.indices[i + 1..].contains(a))
    }

    /// Reverses the winding, flipping the outward normal.
    pub fn flip(&mut self) {
        self.indices.reverse();
    }

    /// Returns a copy with reversed winding.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let mut face = self.clone();
        face.flip();
        face
    }

    /// Returns a copy with every index shifted by `offset`.
    #[must_use]
    pub fn offset(&self, offset: usize) -> Self {
        Self {
            indices: self.indices.iter().map(|i| i + offset).collect(),
        }
    }

    /// Sorted indices; equal for faces over the same vertex multiset.
    #[must_use]
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut sorted = self.indices.clone();
        sorted.sort_unstable();
        sorted
    }

    pub(crate) fn indices_mut(&mut self) -> &mut Vec<usize> {
        &mut self.indices
    }
}

impl From<Vec<usize>> for Face {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl<const N: usize> From<[usize; N]> for Face {
    fn from(indices: [usize; N]) -> Self {
        Self::new(indices.to_vec())
    }
}
