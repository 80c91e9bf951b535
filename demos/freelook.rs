//! Headless demo: walk a camera in a circle and republish the view transform
//! each frame.
//!
//! Run with `RUST_LOG=info cargo run --example freelook`.

use anyhow::Result;
use cgmath::Vector3;
use vantage::{FlyCamera, FlyCameraDescriptor, ShaderUniforms, VIEW_UNIFORM};

fn main() -> Result<()> {
    env_logger::init();

    let ctx = vantage::headless()?;
    let mut uniforms = ShaderUniforms::new(ctx.device(), &[VIEW_UNIFORM]);

    let mut camera = FlyCamera::new(&FlyCameraDescriptor {
        position: Vector3::new(0.0, 0.0, 2.0),
        eulers: Vector3::new(0.0, 90.0, 0.0),
    });

    for frame in 0..8 {
        camera.walk(0.0, 0.25);
        camera.look(12.0, 0.0);
        camera.update(&ctx, &mut uniforms);
        log::info!(
            "frame {frame}: position {:?}, forwards {:?}",
            camera.position,
            camera.forwards()
        );
    }

    Ok(())
}
