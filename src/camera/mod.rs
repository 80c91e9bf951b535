//! Camera system: the free-look camera entity and its uniform-facing types.

pub mod camera_utils;
pub mod fly_camera;

// Re-export main types
pub use camera_utils::{Camera, MatrixUniform};
pub use fly_camera::{FlyCamera, FlyCameraDescriptor};
