//! Render host for the hue-cycling quad demo.
//!
//! The crate glues a `winit` window, a `wgpu` device/surface pair, and a
//! two-stage GLSL pipeline together. The overall flow is:
//!
//! ```text
//!   CLI / tintquad
//!          │ RendererConfig + ColorSource
//!          ▼
//!   Renderer::run ──▶ winit event loop ──▶ GpuState::render()
//!          ▲                                      │
//!          │                                      └─▶ u_Color UBO ─▶ quad draw
//! ```
//!
//! `GpuState` owns all GPU resources (surface, device, pipeline, geometry,
//! uniforms) while `Renderer` is the thin entry point that spins up the
//! window loop. The color written each frame comes from the injected
//! [`ColorSource`]; this crate knows nothing about how it is produced.

mod compile;
mod gpu;
mod pacer;
mod types;
mod window;

use anyhow::Result;

pub use compile::{read_shader_source, ShaderError};
pub use types::{
    BoxedColorSource, ColorSource, RendererConfig, DEFAULT_FRAGMENT_SHADER, DEFAULT_SURFACE_SIZE,
    DEFAULT_VERTEX_SHADER,
};

/// Thin entry point owning the renderer configuration.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Runs the window loop until the window is closed.
    ///
    /// Window, surface, adapter, and device failures are errors; everything
    /// after initialisation follows the log-and-continue policy.
    pub fn run(self, source: BoxedColorSource) -> Result<()> {
        window::run_windowed(self.config, source)
    }
}
