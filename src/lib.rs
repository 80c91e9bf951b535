// src/lib.rs
//! # Vantage
//!
//! Free-look camera view transforms for wgpu projects.
//!
//! A [`FlyCamera`] holds a position and an Euler-angle orientation in a Z-up
//! world. On demand it derives a right-handed basis, builds a look-at view
//! matrix, and publishes it to the shader uniform named `"view"` through an
//! explicit [`RenderContext`]. Nothing is cached between frames and no
//! crate-global GPU state is touched.

pub mod camera;
pub mod gfx;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use camera::camera_utils::Camera;
pub use camera::fly_camera::{FlyCamera, FlyCameraDescriptor, VIEW_UNIFORM};
pub use gfx::context::{ContextError, RenderContext};
pub use gfx::shader_uniforms::ShaderUniforms;

/// Acquires a headless [`RenderContext`], blocking on wgpu's async setup
pub fn headless() -> Result<RenderContext, ContextError> {
    pollster::block_on(RenderContext::headless())
}
