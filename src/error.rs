use thiserror::Error;

/// Top-level error type for the meshcraft crate.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector: {0}")]
    ZeroVector(&'static str),
}

/// Errors related to the index structure of a mesh.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("vertex index {index} is out of bounds (vertex count {count})")]
    VertexIndexOutOfBounds { index: usize, count: usize },

    #[error("face index {index} is out of bounds (face count {count})")]
    FaceIndexOutOfBounds { index: usize, count: usize },

    #[error("mesh is not a closed manifold: {0}")]
    NotClosedManifold(String),
}

/// Errors related to mesh operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;
