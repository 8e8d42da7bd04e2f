pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod selection;

pub use error::{MeshError, Result};
pub use mesh::{Bounds3, EdgeKey, Face, Mesh3D};
pub use operations::{Creator, Modifier};
pub use selection::FaceSelection;
