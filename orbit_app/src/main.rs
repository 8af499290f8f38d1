//! Orbiting-camera demo
//!
//! Exercises the renderer-facing surface of `lumen_math`: rotates an eye
//! point around its target with Rodrigues' formula, rebuilds the view and
//! projection matrices every frame, and logs the flat arrays a renderer
//! would upload as shader uniforms.
//!
//! Usage: `orbit_app [config.ron|config.toml]`

mod config;

use config::OrbitConfig;
use lumen_math::prelude::*;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match OrbitConfig::load_from_file(&path) {
            Ok(config) => {
                log::info!("Loaded orbit config from {path}");
                config
            }
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => OrbitConfig::default(),
    };

    let proj = transform::perspective(config.fov, config.aspect, config.near, config.far);
    let axis = config.up.normalize();
    let step = scalar::deg_to_rad(config.degrees_per_frame);

    let mut offset = config.eye.sub(config.at);
    for frame in 0..config.frames {
        offset = transform::rotate_vector_axis_angle(offset, axis, step);
        let eye = config.at.add(offset);

        let view = transform::look_at(eye, config.at, config.up);
        let view_proj = proj.multiply(&view);

        // the bytes a renderer would hand to its uniform-upload call
        let uniform: &[u8] = bytemuck::bytes_of(&view_proj);

        log::info!("frame {frame}: eye = {eye}");
        log::debug!(
            "frame {frame}: view_proj = {:?} ({} bytes)",
            view_proj.to_array(),
            uniform.len()
        );
    }

    log::info!("Orbit complete after {} frames", config.frames);
}
