use std::collections::HashMap;
use std::num::NonZeroU64;
use std::ops::Range;
use std::sync::Arc;

use anyhow::{Context, Result};
use glam::Vec4;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::NavCommand;
use crate::math::srgb_to_linear;
use crate::mesh::Topology;
use crate::scene::{CommandList, Scene};
use crate::types::DrawUniform;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
/// Room for this many draws before the uniform buffer has to grow
const INITIAL_DRAW_CAPACITY: u64 = 256;

struct Pipelines {
    triangles: wgpu::RenderPipeline,
    strips: wgpu::RenderPipeline,
    lines: wgpu::RenderPipeline,
}

impl Pipelines {
    /// Fans are expanded to indexed triangle lists, so they share the list pipeline.
    fn for_topology(&self, topology: Topology) -> &wgpu::RenderPipeline {
        match topology {
            Topology::TriangleList | Topology::TriangleFan => &self.triangles,
            Topology::TriangleStrip => &self.strips,
            Topology::LineStrip => &self.lines,
        }
    }
}

/// Index data turning every distinct fan size into a triangle list.
struct FanIndices {
    buffer: wgpu::Buffer,
    ranges: HashMap<u32, Range<u32>>,
}

/// Draws one scene with a single flat-colour shader, plus the egui overlay.
pub struct SceneRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    vertex_buffer: wgpu::Buffer,
    fan_indices: Option<FanIndices>,
    uniform_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    uniform_stride: u64,
    uniform_capacity: u64,
    pipelines: Pipelines,
    frame: CommandList,
    linear_output: bool,
    show_ui: bool,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
}

impl SceneRenderer {
    pub async fn new(window: Arc<Window>, scene: &Scene, show_ui: bool) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create window surface")?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);
        let (device, queue) = Self::request_device(&adapter).await?;

        let config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &config);
        let depth_view = Self::create_depth_view(&device, &config);

        let vertices: Vec<[f32; 3]> = scene.vertex_data().iter().map(|v| v.to_array()).collect();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let fan_indices = Self::create_fan_indices(&device, &scene.layout().fan_sizes());

        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let uniform_stride =
            wgpu::util::align_to(std::mem::size_of::<DrawUniform>() as u64, alignment);
        let uniform_capacity = INITIAL_DRAW_CAPACITY.max(scene.draw_count() as u64);
        let uniform_layout = Self::create_uniform_layout(&device);
        let uniform_buffer = Self::create_uniform_buffer(&device, uniform_stride * uniform_capacity);
        let uniform_bind_group =
            Self::create_uniform_bind_group(&device, &uniform_layout, &uniform_buffer);

        let pipelines = Self::create_pipelines(&device, &uniform_layout, config.format);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!(
            "Renderer ready: {} vertices, {} draws per frame, {:?}",
            vertices.len(),
            scene.draw_count(),
            config.format
        );

        Ok(Self {
            device,
            queue,
            surface,
            linear_output: config.format.is_srgb(),
            config,
            depth_view,
            vertex_buffer,
            fan_indices,
            uniform_layout,
            uniform_buffer,
            uniform_bind_group,
            uniform_stride,
            uniform_capacity,
            pipelines,
            frame: CommandList::default(),
            show_ui,
            egui_renderer,
            egui_state,
            egui_ctx,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find appropriate adapter")
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("Failed to create device")
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_depth_view(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_fan_indices(device: &wgpu::Device, sizes: &[u32]) -> Option<FanIndices> {
        if sizes.is_empty() {
            return None;
        }
        let mut indices = Vec::new();
        let mut ranges = HashMap::new();
        for &size in sizes {
            let start = indices.len() as u32;
            indices.extend(Topology::fan_indices(size));
            ranges.insert(size, start..indices.len() as u32);
        }
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Fan Indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Some(FanIndices { buffer, ranges })
    }

    fn create_uniform_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<DrawUniform>() as u64),
                },
                count: None,
            }],
            label: Some("draw_uniform_layout"),
        })
    }

    fn create_uniform_buffer(device: &wgpu::Device, size: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Draw Uniforms"),
            size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_uniform_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    size: NonZeroU64::new(std::mem::size_of::<DrawUniform>() as u64),
                }),
            }],
            label: Some("draw_uniform_bind_group"),
        })
    }

    fn create_pipelines(
        device: &wgpu::Device,
        uniform_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> Pipelines {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Flat Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/flat.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Flat Pipeline Layout"),
            bind_group_layouts: &[uniform_layout],
            push_constant_ranges: &[],
        });

        let create = |label: &str, topology: wgpu::PrimitiveTopology| {
            let is_line = matches!(topology, wgpu::PrimitiveTopology::LineStrip);
            // Filled faces are pushed back slightly so wire lines on top of them win
            let bias = if is_line {
                wgpu::DepthBiasState::default()
            } else {
                wgpu::DepthBiasState {
                    constant: 1,
                    slope_scale: 1.0,
                    clamp: 0.0,
                }
            };

            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::LessEqual,
                    stencil: wgpu::StencilState::default(),
                    bias,
                }),
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        Pipelines {
            triangles: create("Triangle Pipeline", wgpu::PrimitiveTopology::TriangleList),
            strips: create("Strip Pipeline", wgpu::PrimitiveTopology::TriangleStrip),
            lines: create("Line Pipeline", wgpu::PrimitiveTopology::LineStrip),
        }
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        winit::dpi::PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_view(&self.device, &self.config);
    }

    /// Forward a window event to egui. Returns (consumed, repaint wanted).
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    fn output_colour(&self, colour: Vec4) -> Vec4 {
        if self.linear_output {
            srgb_to_linear(colour)
        } else {
            colour
        }
    }

    fn upload_uniforms(&mut self) {
        let count = self.frame.commands.len() as u64;
        if count > self.uniform_capacity {
            self.uniform_capacity = count.next_power_of_two();
            log::debug!("Growing uniform buffer to {} draws", self.uniform_capacity);
            self.uniform_buffer =
                Self::create_uniform_buffer(&self.device, self.uniform_stride * self.uniform_capacity);
            self.uniform_bind_group = Self::create_uniform_bind_group(
                &self.device,
                &self.uniform_layout,
                &self.uniform_buffer,
            );
        }

        let stride = self.uniform_stride as usize;
        let mut bytes = vec![0u8; stride * self.frame.commands.len()];
        for (slot, command) in bytes.chunks_exact_mut(stride).zip(&self.frame.commands) {
            let uniform = DrawUniform::new(
                command.model_view,
                self.frame.projection,
                self.output_colour(command.colour),
            );
            let data = bytemuck::bytes_of(&uniform);
            slot[..data.len()].copy_from_slice(data);
        }
        if !bytes.is_empty() {
            self.queue.write_buffer(&self.uniform_buffer, 0, &bytes);
        }
    }

    /// Draw one frame. Returns a camera command when an overlay button was pressed.
    pub fn render(
        &mut self,
        scene: &Scene,
        window: &Window,
    ) -> std::result::Result<Option<NavCommand>, wgpu::SurfaceError> {
        let aspect = self.config.width as f32 / self.config.height as f32;
        scene.render(aspect, &mut self.frame);
        self.upload_uniforms();

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        let clear = self.output_colour(self.frame.clear_colour);
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.x as f64,
                            g: clear.y as f64,
                            b: clear.z as f64,
                            a: clear.w as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            if let Some(fans) = &self.fan_indices {
                render_pass.set_index_buffer(fans.buffer.slice(..), wgpu::IndexFormat::Uint32);
            }

            for (i, command) in self.frame.commands.iter().enumerate() {
                let range = command.range;
                let offset = (i as u64 * self.uniform_stride) as u32;
                render_pass.set_pipeline(self.pipelines.for_topology(range.topology));
                render_pass.set_bind_group(0, &self.uniform_bind_group, &[offset]);
                match range.topology {
                    Topology::TriangleFan => {
                        let indices = self
                            .fan_indices
                            .as_ref()
                            .and_then(|fans| fans.ranges.get(&range.count));
                        if let Some(indices) = indices {
                            render_pass.draw_indexed(indices.clone(), range.first as i32, 0..1);
                        }
                    }
                    _ => render_pass.draw(range.first..range.end(), 0..1),
                }
            }
        }

        let command = if self.show_ui {
            self.render_overlay(scene, window, &mut encoder, &view)
        } else {
            None
        };

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(command)
    }

    fn render_overlay(
        &mut self,
        scene: &Scene,
        window: &Window,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) -> Option<NavCommand> {
        let mut command = None;
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let Some(fovy) = scene.fovy_degrees() else {
                return;
            };
            egui::Window::new("Field of view")
                .resizable(false)
                .collapsible(false)
                .default_pos(egui::pos2(10.0, 10.0))
                .show(ctx, |ui| {
                    ui.label(format!("{fovy:.0}°"));
                    ui.horizontal(|ui| {
                        if ui.button("Widen").clicked() {
                            command = Some(NavCommand::WidenFov);
                        }
                        if ui.button("Narrow").clicked() {
                            command = Some(NavCommand::NarrowFov);
                        }
                    });
                });
        });

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        command
    }
}
