use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use scene_demos::cli::Cli;
use scene_demos::config::DemoConfig;
use scene_demos::input::Key;
use scene_demos::renderer::SceneRenderer;
use scene_demos::scene::Scene;
use scene_demos::scenes::build_scene;

struct App {
    config: DemoConfig,
    show_ui: bool,
    scene: Scene,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
}

impl App {
    fn new(config: DemoConfig, show_ui: bool, scene: Scene) -> Self {
        Self {
            config,
            show_ui,
            scene,
            window: None,
            renderer: None,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        match renderer.render(&self.scene, window) {
            Ok(Some(command)) => {
                if self.scene.apply(command) {
                    window.request_redraw();
                }
            }
            Ok(None) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                renderer.resize(renderer.size());
                window.request_redraw();
            }
            Err(e) => log::warn!("Skipping frame: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(format!("Scene demos: {}", self.scene.name()))
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            &self.scene,
            self.show_ui,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            let (consumed, repaint) = renderer.handle_event(window, &event);
            if repaint {
                window.request_redraw();
            }
            if consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => match Key::from_key_code(code) {
                Some(key) => {
                    if self.scene.handle_key(key) {
                        self.request_redraw();
                    }
                }
                None => log::trace!("Ignoring key {code:?}"),
            },
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                self.request_redraw();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

fn print_layout(scene: &Scene) {
    println!("Scene '{}' vertex buffer:", scene.name());
    for (key, range) in scene.layout().ranges() {
        println!(
            "  {:<20} first {:>6}  count {:>6}  {:?}",
            key.to_string(),
            range.first,
            range.count,
            range.topology
        );
    }
    println!(
        "  total {} vertices, {} draws per frame",
        scene.layout().vertex_count(),
        scene.draw_count()
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let scene = build_scene(cli.scene, &config)
        .with_context(|| format!("Failed to build scene '{}'", cli.scene))?;

    if cli.print_layout {
        print_layout(&scene);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = App::new(config, !cli.no_ui, scene);

    println!("Scene demos - Controls: WASD move/orbit, Q/E turn, Z/X up/down, +/- field of view, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
