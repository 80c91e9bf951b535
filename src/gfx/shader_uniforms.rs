//! Host-side view of a shader's 4x4 matrix uniforms.

use cgmath::Matrix4;

use crate::camera::camera_utils::MatrixUniform;
use crate::wgpu_utils::{binding_types, uniform_buffer::UniformBuffer};

/// The matrix uniforms a shader declares, each backed by its own GPU buffer.
///
/// Together the entries form one bind group, with binding indices following
/// declaration order. Writes to names that were never declared are dropped
/// without error, the way GL drops writes to an unmatched uniform location.
pub struct ShaderUniforms {
    uniforms: Vec<(String, UniformBuffer<MatrixUniform>)>,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl ShaderUniforms {
    /// Creates buffers for `names`, each initialised to the identity matrix,
    /// and builds the bind group over them.
    pub fn new(device: &wgpu::Device, names: &[&str]) -> Self {
        let uniforms: Vec<(String, UniformBuffer<MatrixUniform>)> = names
            .iter()
            .map(|name| {
                let buffer = UniformBuffer::new_with_data(device, &MatrixUniform::default());
                ((*name).to_owned(), buffer)
            })
            .collect();

        let layout_entries: Vec<wgpu::BindGroupLayoutEntry> = (0..uniforms.len() as u32)
            .map(|binding| wgpu::BindGroupLayoutEntry {
                binding,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: binding_types::uniform(),
                count: None,
            })
            .collect();
        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("shader uniforms layout"),
                entries: &layout_entries,
            });

        let group_entries: Vec<wgpu::BindGroupEntry> = uniforms
            .iter()
            .enumerate()
            .map(|(i, (_, buffer))| wgpu::BindGroupEntry {
                binding: i as u32,
                resource: buffer.binding_resource(),
            })
            .collect();
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shader uniforms"),
            layout: &bind_group_layout,
            entries: &group_entries,
        });

        Self {
            uniforms,
            bind_group_layout,
            bind_group,
        }
    }

    /// Uploads `matrix` column-major to the uniform `name`.
    ///
    /// Unknown names are silently ignored; uploads whose bytes match the
    /// previous ones are skipped.
    pub fn set_mat4(&mut self, queue: &wgpu::Queue, name: &str, matrix: Matrix4<f32>) {
        match self.uniforms.iter_mut().find(|(n, _)| n == name) {
            Some((_, buffer)) => buffer.update_content(queue, matrix.into()),
            None => log::trace!("uniform \"{name}\" not declared, write dropped"),
        }
    }

    /// Layout for attaching these uniforms to a render pipeline.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Declared uniform names, in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.uniforms.iter().map(|(name, _)| name.as_str())
    }
}
