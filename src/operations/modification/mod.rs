mod center_at;
mod flip_faces;
mod push_to_sphere;
mod solidify;

pub use center_at::CenterAt;
pub use flip_faces::FlipFaces;
pub use push_to_sphere::PushToSphere;
pub use solidify::Solidify;
