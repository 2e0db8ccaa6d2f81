use std::path::PathBuf;

/// Conventional locations for the quad's shader stages, relative to the
/// working directory.
pub const DEFAULT_VERTEX_SHADER: &str = "res/shaders/triangle/triangle.vert";
pub const DEFAULT_FRAGMENT_SHADER: &str = "res/shaders/triangle/triangle.frag";

/// Default window size in physical pixels.
pub const DEFAULT_SURFACE_SIZE: (u32, u32) = (640, 480);

/// Produces the tint written to the `u_Color` uniform.
///
/// Invoked exactly once per frame tick, immediately before the uniform write
/// and draw for that frame.
pub trait ColorSource {
    fn next_color(&mut self) -> [f32; 3];
}

/// Convenient alias for owning color sources behind trait objects.
pub type BoxedColorSource = Box<dyn ColorSource>;

/// Immutable configuration passed to the renderer at start-up.
///
/// `RendererConfig` mirrors CLI flags and tells the renderer which shader
/// files to compile, how large the window should be, and whether to cap the
/// frame rate.
#[derive(Clone, Debug)]
pub struct RendererConfig {
    /// Window size in physical pixels.
    pub surface_size: (u32, u32),
    /// Path to the vertex shader source.
    pub vertex_shader: PathBuf,
    /// Path to the fragment shader source.
    pub fragment_shader: PathBuf,
    /// Optional FPS cap; `None` renders every vsync callback.
    pub target_fps: Option<f32>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            surface_size: DEFAULT_SURFACE_SIZE,
            vertex_shader: PathBuf::from(DEFAULT_VERTEX_SHADER),
            fragment_shader: PathBuf::from(DEFAULT_FRAGMENT_SHADER),
            target_fps: None,
        }
    }
}
