//! GPU-facing half of the crate: the explicit rendering context and the
//! named-uniform interface cameras publish into.

pub mod context;
pub mod shader_uniforms;

// Re-export commonly used types
pub use context::RenderContext;
pub use shader_uniforms::ShaderUniforms;
