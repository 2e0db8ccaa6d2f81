//! GPU plumbing for the quad demo.
//!
//! - `context` owns the wgpu instance/device/surface wiring and reconfigures
//!   the swapchain when the window resizes.
//! - `pipeline` uploads the static quad and builds the render pipeline from
//!   the two compiled GLSL stages.
//! - `uniforms` mirrors the shader's tint block and is written through the
//!   queue each frame.
//! - `state` glues everything together behind the `GpuState` API used by
//!   `window`.

mod context;
mod pipeline;
mod state;
mod uniforms;

pub(crate) use state::GpuState;
