use crate::client::GameFrame;
use crate::shared::{
    diamond_corners, Cell, Direction, GridConfig, SpriteBank, DIRECTION_COUNT,
    FRAMES_PER_DIRECTION, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::window::{InputEvent, Window};
use anyhow::{Context, Result};
use futures::executor::block_on;
use nalgebra_glm::*;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Mat4([[f32; 4]; 4]);

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vec4([f32; 4]);

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct GridVertexInput {
    grid_xy: [f32; 2],
    grid_rgba: [f32; 4],
}

impl GridVertexInput {
    const ATTRIB: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    fn buffer_layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as _,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIB,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteVertexInput {
    sprite_xy: [f32; 2],
    sprite_uv: [f32; 2],
}

impl SpriteVertexInput {
    const ATTRIB: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2
    ];

    fn buffer_layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as _,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIB,
        }
    }
}

// Fill colors, normalized from the palette the grid was designed with.
const GRID_RGBA: [f32; 4] = [100. / 255., 149. / 255., 237. / 255., 1.];
const HIGHLIGHT_RGBA: [f32; 4] = [1., 1., 0., 1.];

pub struct GameRenderState<'a> {
    // Grid layout.
    config: GridConfig,

    // State.
    surface_config: wgpu::SurfaceConfiguration,
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,

    // Textures.
    sprite_tex: (wgpu::Texture, wgpu::TextureView),
    sprite_frame_size: (u32, u32),
    sprite_atlas_size: (u32, u32),

    // General purpose IBOs: one for quad strips, one for closed outlines.
    quad_ibo: wgpu::Buffer,
    loop_ibo: wgpu::Buffer,

    // Misc bind group.
    misc_bind_group: wgpu::BindGroup,
    view_uniform: wgpu::Buffer,
    generic_sampler: wgpu::Sampler,

    // Grid rendering.
    fill_pipeline: wgpu::RenderPipeline,
    outline_pipeline: wgpu::RenderPipeline,
    outline_bind_group: wgpu::BindGroup,
    outline_const_uniform: wgpu::Buffer,

    // Sprite rendering.
    sprite_pipeline: wgpu::RenderPipeline,
    sprite_bind_group: wgpu::BindGroup,
}

impl<'a> GameRenderState<'a> {
    pub fn new(window: &'a Window, config: GridConfig, sprites: &SpriteBank) -> Result<Self> {
        // General initialization of render state.
        let (surface, device, queue, surface_config) = {
            // Instance.
            let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            });

            // Surface.
            let surface = instance.create_surface(&window.window)?;

            // Physical device.
            let physical_device =
                block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::LowPower,
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                }))
                .context("could not find a suitable GPU")?;

            // Logical device and command queue.
            let (device, queue) = block_on(physical_device.request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    ..Default::default()
                },
                None,
            ))?;

            //
            let surface_config = wgpu::SurfaceConfiguration {
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                format: wgpu::TextureFormat::Bgra8Unorm,
                width: SCREEN_WIDTH,
                height: SCREEN_HEIGHT,
                present_mode: wgpu::PresentMode::Fifo,
                desired_maximum_frame_latency: 1,
                alpha_mode: wgpu::CompositeAlphaMode::Auto,
                view_formats: vec![],
            };
            surface.configure(&device, &surface_config);

            (surface, device, queue, surface_config)
        };

        // Pack the character frames into one atlas, one direction per row.
        let (frame_w, frame_h) = sprites.frame_size();
        let atlas_w = frame_w * FRAMES_PER_DIRECTION as u32;
        let atlas_h = frame_h * DIRECTION_COUNT as u32;
        let sprite_tex = {
            let mut atlas = image::RgbaImage::new(atlas_w, atlas_h);
            for direction in Direction::ALL {
                for index in 0..FRAMES_PER_DIRECTION {
                    image::imageops::replace(
                        &mut atlas,
                        sprites.frame(direction, index),
                        (index as u32 * frame_w) as i64,
                        (direction as u32 * frame_h) as i64,
                    );
                }
            }

            let texture = device.create_texture_with_data(
                &queue,
                &wgpu::TextureDescriptor {
                    label: Some("Sprite Atlas Texture"),
                    size: wgpu::Extent3d {
                        width: atlas_w,
                        height: atlas_h,
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: wgpu::TextureDimension::D2,
                    format: wgpu::TextureFormat::Rgba8Unorm,
                    usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                    view_formats: &[],
                },
                wgpu::util::TextureDataOrder::LayerMajor,
                &atlas,
            );

            let view = texture.create_view(&<_>::default());
            (texture, view)
        };

        // Generic generic_sampler used for all textures.
        let generic_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        // Generic index buffer for a stream of quads, drawn as restarted
        // triangle strips.
        let quad_ibo = {
            #[rustfmt::skip]
            let ibo_data: Vec<u16> = (0..13107)
                .into_iter()
                .flat_map(|i| [i * 4 + 0, i * 4 + 3, i * 4 + 1, i * 4 + 2, u16::MAX])
                .collect();
            assert_eq!(ibo_data.len(), 65535);

            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Quad Index Buffer"),
                contents: bytemuck::cast_slice(&ibo_data),
                usage: wgpu::BufferUsages::INDEX,
            })
        };

        // Same idea for closed 4-corner outlines, drawn as restarted line
        // strips.
        let loop_ibo = {
            #[rustfmt::skip]
            let ibo_data: Vec<u16> = (0..2048)
                .into_iter()
                .flat_map(|i| [i * 4 + 0, i * 4 + 1, i * 4 + 2, i * 4 + 3, i * 4 + 0, u16::MAX])
                .collect();

            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Outline Index Buffer"),
                contents: bytemuck::cast_slice(&ibo_data),
                usage: wgpu::BufferUsages::INDEX,
            })
        };

        // Create camera buffer.
        let view_uniform = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("View Uniform"),
            size: std::mem::size_of::<Mat4>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // The viewport never moves: pixel coordinates with the origin at the
        // window's top-left corner, written once.
        {
            let w = SCREEN_WIDTH as f32;
            let h = SCREEN_HEIGHT as f32;
            let view = Mat3::identity()
                * scaling2d(&Vec2::new(2. / w, -2. / h))
                * translation2d(&Vec2::new(-w / 2., -h / 2.));
            queue.write_buffer(
                &view_uniform,
                0,
                bytemuck::cast_slice(&[Mat4(nalgebra_glm::mat3_to_mat4(&view).into())]),
            );
        }

        // Misc bind group.
        let misc_bind_group = {
            let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Misc Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::NonFiltering),
                        count: None,
                    },
                ],
            });

            let group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Misc Bind Group"),
                layout: &layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: view_uniform.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&generic_sampler),
                    },
                ],
            });

            (group, layout)
        };

        // Create the grid fill pipeline.
        let fill_pipeline = {
            // Shader.
            let shader = device.create_shader_module(wgpu::include_wgsl!("shaders/grid.wgsl"));

            // Pipeline layout.
            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Grid Fill Pipeline Layout"),
                bind_group_layouts: &[&misc_bind_group.1],
                push_constant_ranges: &[],
            });

            // Render pipeline.
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Grid Fill Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_main",
                    buffers: &[GridVertexInput::buffer_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    strip_index_format: Some(wgpu::IndexFormat::Uint16),
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
            })
        };

        // Const uniform for the outline color.
        let outline_const_uniform = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Outline Const Uniform"),
            usage: wgpu::BufferUsages::UNIFORM,
            contents: bytemuck::cast_slice(&[Vec4([1.0, 1.0, 1.0, 1.0])]),
        });

        // Create the grid outline pipeline.
        let (outline_pipeline, outline_bind_group) = {
            // Shader.
            let shader = device.create_shader_module(wgpu::include_wgsl!("shaders/outline.wgsl"));

            // Bind group.
            let bind_group = {
                let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Outline Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

                let group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Outline Bind Group"),
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: outline_const_uniform.as_entire_binding(),
                    }],
                });

                (group, layout)
            };

            // Pipeline layout.
            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Outline Pipeline Layout"),
                bind_group_layouts: &[&misc_bind_group.1, &bind_group.1],
                push_constant_ranges: &[],
            });

            // Render pipeline.
            let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Outline Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_main",
                    buffers: &[GridVertexInput::buffer_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineStrip,
                    strip_index_format: Some(wgpu::IndexFormat::Uint16),
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
            });

            (pipeline, bind_group.0)
        };

        // Create the character sprite pipeline.
        let (sprite_pipeline, sprite_bind_group) = {
            // Shader.
            let shader = device.create_shader_module(wgpu::include_wgsl!("shaders/sprite.wgsl"));

            // Bind group.
            let bind_group = {
                let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Sprite Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: false },
                        },
                        count: None,
                    }],
                });

                let group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Sprite Bind Group"),
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&sprite_tex.1),
                    }],
                });

                (group, layout)
            };

            // Pipeline layout.
            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Sprite Pipeline Layout"),
                bind_group_layouts: &[&misc_bind_group.1, &bind_group.1],
                push_constant_ranges: &[],
            });

            // Render pipeline.
            let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Sprite Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_main",
                    buffers: &[SpriteVertexInput::buffer_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_config.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    strip_index_format: Some(wgpu::IndexFormat::Uint16),
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
            });

            (pipeline, bind_group.0)
        };

        Ok(Self {
            config,

            surface,
            device,
            queue,
            surface_config,

            sprite_tex,
            sprite_frame_size: (frame_w, frame_h),
            sprite_atlas_size: (atlas_w, atlas_h),

            quad_ibo,
            loop_ibo,

            misc_bind_group: misc_bind_group.0,
            view_uniform,
            generic_sampler,

            fill_pipeline,
            outline_pipeline,
            outline_bind_group,
            outline_const_uniform,

            sprite_pipeline,
            sprite_bind_group,
        })
    }

    pub fn handle_events<'e>(&mut self, input_events: impl Iterator<Item = &'e InputEvent>) {
        for &event in input_events {
            match event {
                InputEvent::WindowResize { width, height } if width > 0 && height > 0 => {
                    self.surface_config.width = width;
                    self.surface_config.height = height;
                    self.surface.configure(&self.device, &self.surface_config);
                }

                // Most events are ignored.
                _ => {}
            }
        }
    }

    pub fn render(&mut self, game_frame: GameFrame) {
        let (grid_vertex_input, grid_quads) = self.process_grid_state(&game_frame);
        let sprite_vertex_input = self.process_sprite_state(&game_frame);

        // Begin rendering.
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(_) => {
                // Surface lost or outdated; reconfigure and drop the frame.
                self.surface.configure(&self.device, &self.surface_config);
                return;
            }
        };
        let view = output.texture.create_view(&<_>::default());
        let mut encoder = self.device.create_command_encoder(&<_>::default());
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
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

        // Misc group holds the view matrix and sampler for every pipeline.
        render_pass.set_bind_group(0, &self.misc_bind_group, &[]);

        // Grid fill.
        {
            render_pass.set_pipeline(&self.fill_pipeline);
            render_pass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.set_vertex_buffer(0, grid_vertex_input.slice(..));
            render_pass.draw_indexed(0..grid_quads * 5, 0, 0..1);
        }

        // Grid outlines.
        {
            render_pass.set_pipeline(&self.outline_pipeline);
            render_pass.set_bind_group(1, &self.outline_bind_group, &[]);
            render_pass.set_index_buffer(self.loop_ibo.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.set_vertex_buffer(0, grid_vertex_input.slice(..));
            render_pass.draw_indexed(0..grid_quads * 6, 0, 0..1);
        }

        // Character sprite.
        {
            render_pass.set_pipeline(&self.sprite_pipeline);
            render_pass.set_bind_group(1, &self.sprite_bind_group, &[]);
            render_pass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.set_vertex_buffer(0, sprite_vertex_input.slice(..));
            render_pass.draw_indexed(0..4, 0, 0..1);
        }

        // End rendering.
        drop(render_pass);
        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    fn process_grid_state(&mut self, game_frame: &GameFrame) -> (wgpu::Buffer, u32) {
        let grid_size = self.config.grid_size;
        let mut grid_vertices = Vec::with_capacity((grid_size * grid_size * 4) as usize);

        // Painter's order: back rows first, so nearer diamonds overdraw.
        for row in (0..grid_size).rev() {
            for col in 0..grid_size {
                let rgba = if game_frame.hover == Some(Cell::new(col, row)) {
                    HIGHLIGHT_RGBA
                } else {
                    GRID_RGBA
                };

                let [left, top, right, bottom] = diamond_corners(&self.config, col, row);
                grid_vertices.extend_from_slice(&[
                    GridVertexInput {
                        grid_xy: [left.x, left.y],
                        grid_rgba: rgba,
                    },
                    GridVertexInput {
                        grid_xy: [top.x, top.y],
                        grid_rgba: rgba,
                    },
                    GridVertexInput {
                        grid_xy: [right.x, right.y],
                        grid_rgba: rgba,
                    },
                    GridVertexInput {
                        grid_xy: [bottom.x, bottom.y],
                        grid_rgba: rgba,
                    },
                ]);
            }
        }

        let grid_vertex_input = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Grid Vertex Buffer"),
                contents: bytemuck::cast_slice(&grid_vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        (grid_vertex_input, grid_vertices.len() as u32 / 4)
    }

    fn process_sprite_state(&mut self, game_frame: &GameFrame) -> wgpu::Buffer {
        let (frame_w, frame_h) = self.sprite_frame_size;
        let (fw, fh) = (frame_w as f32, frame_h as f32);
        let (aw, ah) = (
            self.sprite_atlas_size.0 as f32,
            self.sprite_atlas_size.1 as f32,
        );

        // Bottom-center of the sprite sits on the tile's bottom-center.
        let x = game_frame.player_xy[0] + self.config.tile_width / 2. - fw / 2.;
        let y = game_frame.player_xy[1] + self.config.tile_height - fh;

        // Atlas cell for (facing, frame), normalized.
        let u = game_frame.frame as f32 * fw / aw;
        let v = game_frame.facing as u8 as f32 * fh / ah;
        let (du, dv) = (fw / aw, fh / ah);

        let sprite_vertices = [
            SpriteVertexInput {
                sprite_xy: [x, y],
                sprite_uv: [u, v],
            },
            SpriteVertexInput {
                sprite_xy: [x + fw, y],
                sprite_uv: [u + du, v],
            },
            SpriteVertexInput {
                sprite_xy: [x + fw, y + fh],
                sprite_uv: [u + du, v + dv],
            },
            SpriteVertexInput {
                sprite_xy: [x, y + fh],
                sprite_uv: [u, v + dv],
            },
        ];

        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sprite Vertex Buffer"),
                contents: bytemuck::cast_slice(&sprite_vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
    }
}
