use crate::animator::FrameView;
use crate::constants::{POINT_OPACITY, POINT_SIZE};
use crate::error::ForgeError;
use glam::Vec3;
use wgpu::util::DeviceExt;

mod points;
use points::{create_point_resources, PointResources, PointUniforms};

/// WebGPU point-sprite renderer for a particle field of fixed size.
///
/// Colors are uploaded once at construction; positions are streamed every frame.
pub struct PointRenderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointResources,
    position_vb: wgpu::Buffer,
    color_vb: wgpu::Buffer,
    capacity: u32,
    width: u32,
    height: u32,
}

impl<'a> PointRenderer<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
        colors: &[Vec3],
    ) -> Result<Self, ForgeError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ForgeError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        let caps = surface.get_capabilities(&adapter);
        // Colors are authored in display space, so write them without an sRGB encode
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(caps.formats[0]);
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes[0]
        };
        let width = width.max(1);
        let height = height.max(1);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let points = create_point_resources(&device, format);
        let capacity = colors.len() as u32;
        let position_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("points_positions"),
            size: (std::mem::size_of::<Vec3>() * colors.len().max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let color_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("points_colors"),
            contents: bytemuck::cast_slice(colors),
            usage: wgpu::BufferUsages::VERTEX,
        });
        log::info!(
            "[gpu] renderer ready format={:?} alpha={:?} size={}x{} points={}",
            format,
            alpha_mode,
            width,
            height,
            capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            position_vb,
            color_vb,
            capacity,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface at its current size, e.g. after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, view: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        let (w, h) = view.viewport.physical_size();
        self.resize_if_needed(w, h);

        let count = (view.positions.len() as u32).min(self.capacity);
        let uniforms = PointUniforms {
            view_proj: view.view_proj.to_cols_array_2d(),
            point_size: POINT_SIZE,
            aspect: self.width as f32 / self.height as f32,
            opacity: POINT_OPACITY,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.points.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.queue.write_buffer(
            &self.position_vb,
            0,
            bytemuck::cast_slice(&view.positions[..count as usize]),
        );

        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.points.pipeline);
            rpass.set_bind_group(0, &self.points.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.points.corner_vb.slice(..));
            rpass.set_vertex_buffer(1, self.position_vb.slice(..));
            rpass.set_vertex_buffer(2, self.color_vb.slice(..));
            rpass.draw(0..6, 0..count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
