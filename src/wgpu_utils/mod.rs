// src/wgpu_utils/mod.rs
//! Thin wgpu helpers shared by the uniform plumbing.

pub mod binding_types;
pub mod uniform_buffer;

// Re-export main types
pub use uniform_buffer::UniformBuffer;
