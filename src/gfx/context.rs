use thiserror::Error;

/// Failures while acquiring a GPU context.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("no suitable graphics adapter")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("graphics device request failed")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Owns the wgpu device and queue that uniform uploads go through.
///
/// Every GPU-touching operation in this crate takes the context explicitly;
/// there is no crate-global binding to a "current" device or shader.
pub struct RenderContext {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl RenderContext {
    /// Wraps an existing device/queue pair, for embedding in an application
    /// that already set up wgpu.
    pub fn from_raw(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self { device, queue }
    }

    /// Acquires a context with no surface attached.
    pub async fn headless() -> Result<Self, ContextError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await?;
        log::debug!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("vantage device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        Ok(Self { device, queue })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
