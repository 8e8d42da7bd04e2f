/// Undirected edge between two vertex indices, stored as `(min, max)`.
///
/// Edges are never stored in a mesh; they are derived from consecutive face
/// indices on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    a: usize,
    b: usize,
}

impl EdgeKey {
    /// Creates the key for the edge between `v0` and `v1` in either order.
    #[must_use]
    pub fn new(v0: usize, v1: usize) -> Self {
        if v0 <= v1 {
            Self { a: v0, b: v1 }
        } else {
            Self { a: v1, b: v0 }
        }
    }

    /// The smaller vertex index.
    #[must_use]
    pub fn a(&self) -> usize {
        self.a
    }

    /// The larger vertex index.
    #[must_use]
    pub fn b(&self) -> usize {
        self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_order_independent() {
        assert_eq!(EdgeKey::new(3, 7), EdgeKey::new(7, 3));
        assert_eq!(EdgeKey::new(7, 3).a(), 3);
        assert_eq!(EdgeKey::new(7, 3).b(), 7);
    }
}
