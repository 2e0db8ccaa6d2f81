use anyhow::Result;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use wgpu::naga::ShaderStage;
use winit::dpi::PhysicalSize;

use crate::compile::{compile_shader, load_shader_source};
use crate::types::RendererConfig;

use super::context::GpuContext;
use super::pipeline::{create_uniform_layout, QuadGeometry, QuadPipeline};
use super::uniforms::TintUniforms;

/// Owns the GPU context and every resource behind the per-frame draw.
pub(crate) struct GpuState {
    context: GpuContext,
    geometry: QuadGeometry,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    uniforms: TintUniforms,
    pipeline: Option<QuadPipeline>,
}

impl GpuState {
    pub(crate) fn new<T>(
        target: &T,
        initial_size: PhysicalSize<u32>,
        config: &RendererConfig,
    ) -> Result<Self>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let context = GpuContext::new(target, initial_size)?;
        let device = &context.device;

        let uniform_layout = create_uniform_layout(device);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniform buffer"),
            size: std::mem::size_of::<TintUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform bind group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let geometry = QuadGeometry::new(device);

        let vertex = compile_shader(
            device,
            ShaderStage::Vertex,
            &load_shader_source(&config.vertex_shader),
            "quad vertex",
        );
        let fragment = compile_shader(
            device,
            ShaderStage::Fragment,
            &load_shader_source(&config.fragment_shader),
            "quad fragment",
        );
        // A failed stage is logged and dropped; frames then clear to black
        // with no draw, the same degraded behavior as a null program.
        let pipeline = match (vertex, fragment) {
            (Ok(vertex), Ok(fragment)) => Some(QuadPipeline::new(
                device,
                &uniform_layout,
                context.surface_format,
                &vertex,
                &fragment,
            )),
            (vertex, fragment) => {
                for err in [vertex.err(), fragment.err()].into_iter().flatten() {
                    tracing::error!(error = %err, "continuing without a quad pipeline");
                }
                None
            }
        };

        let uniforms = TintUniforms::new();
        context
            .queue
            .write_buffer(&uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        Ok(Self {
            context,
            geometry,
            uniform_buffer,
            uniform_bind_group,
            uniforms,
            pipeline,
        })
    }

    pub(crate) fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    pub(crate) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
    }

    /// Renders one frame: write the tint uniform, clear, draw the quad,
    /// present.
    pub(crate) fn render(&mut self, color: [f32; 3]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.surface.get_current_texture()?;

        self.uniforms.set_color(color);
        self.context.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms),
        );

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("render encoder"),
                });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(pipeline) = &self.pipeline {
                render_pass.set_pipeline(&pipeline.pipeline);
                render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.geometry.vertex_buffer.slice(..));
                render_pass.set_index_buffer(
                    self.geometry.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                render_pass.draw_indexed(0..self.geometry.index_count, 0, 0..1);
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
