//! Orchestrates a launch by translating CLI input into a renderer
//! configuration and wiring the color cycle engine into the window loop.
//!
//! Functions:
//!
//! - `run` drives the main execution path.
//! - `initialise_tracing` configures logging.

use anyhow::{Context, Result};
use cycle::{HueCycle, Step};
use renderer::{ColorSource, Renderer, RendererConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::{parse_surface_size, Cli};

/// Adapts the hue cycle engine to the renderer's per-frame color seam.
struct EngineColorSource {
    cycle: HueCycle,
}

impl ColorSource for EngineColorSource {
    fn next_color(&mut self) -> [f32; 3] {
        self.cycle.tick()
    }
}

pub fn initialise_tracing() {
    let default_filter = "warn,tintquad=info,renderer=info,cycle=info,naga=error,wgpu=error,wgpu_core=error,wgpu_hal=error,winit=error";
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let requested_size = cli
        .size
        .as_deref()
        .map(parse_surface_size)
        .transpose()
        .context("invalid --size value")?;

    let mut config = RendererConfig::default();
    if let Some(size) = requested_size {
        config.surface_size = size;
    }
    if let Some(vert) = cli.vert {
        config.vertex_shader = vert;
    }
    if let Some(frag) = cli.frag {
        config.fragment_shader = frag;
    }
    config.target_fps = match cli.fps {
        Some(v) if v > 0.0 => Some(v),
        _ => None,
    };

    tracing::info!(
        width = config.surface_size.0,
        height = config.surface_size.1,
        vert = %config.vertex_shader.display(),
        frag = %config.fragment_shader.display(),
        "starting tintquad"
    );

    let source = EngineColorSource {
        cycle: HueCycle::new(Step::DEFAULT),
    };
    Renderer::new(config).run(Box::new(source))
}
