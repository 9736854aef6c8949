//! Main application handler
//!
//! Drives the fixed frame loop: poll input, advance the game controller,
//! hand the resulting draw list to the renderer.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

#[cfg(debug_assertions)]
use winit::keyboard::{KeyCode, PhysicalKey};

use super::config::AppConfig;
use super::debug_ui::DebugUIState;
use super::input::InputCollector;
use super::renderer::{Renderer, Theme, scene};
use super::window::window_attributes_from_config;
use crate::game::{DrawList, Game};

/// Main application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    game: Game,
    theme: Theme,
    /// Draw list produced by the last controller update
    frame: DrawList,
    debug_ui: DebugUIState,
    last_update: Option<Instant>,
    input_collector: InputCollector,
}

impl App {
    /// Creates a new application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting");
        info!(?config.window, "Window configuration");

        let game = Game::new([config.window.width as f32, config.window.height as f32]);
        let debug_ui = DebugUIState::new(config.debug.overlay);

        Self {
            config,
            window: None,
            renderer: None,
            game,
            theme: Theme::default(),
            frame: DrawList::new(),
            debug_ui,
            last_update: None,
            input_collector: InputCollector::new(),
        }
    }

    /// Creates a new application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }

    /// Toggles debug window (debug builds only)
    #[cfg(debug_assertions)]
    fn toggle_debug_window(&mut self) {
        self.debug_ui.toggle_window();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = window_attributes_from_config(&self.config.window);

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    let size = window.inner_size();
                    let scale_factor = window.scale_factor() as f32;
                    info!(
                        window.width = size.width,
                        window.height = size.height,
                        window.scale = scale_factor,
                        "Window created successfully"
                    );

                    let window = Arc::new(window);

                    self.input_collector.set_scale_factor(scale_factor);
                    self.game.resolution_change([
                        size.width as f32 / scale_factor,
                        size.height as f32 / scale_factor,
                    ]);

                    // Initialize renderer using tokio runtime
                    // We create a runtime here because winit's event loop is synchronous
                    let renderer = tokio::runtime::Runtime::new()
                        .expect("Failed to create tokio runtime")
                        .block_on(async { Renderer::new(window.clone()).await });

                    match renderer {
                        Ok(renderer) => {
                            info!("Renderer initialized successfully");
                            self.renderer = Some(renderer);
                            self.window = Some(window);
                            self.last_update = Some(Instant::now());
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to initialize renderer");
                        }
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(last_update) = self.last_update {
            let now = Instant::now();
            let delta_time = (now - last_update).as_secs_f32();
            self.last_update = Some(now);

            // One controller step per frame, from the current input snapshot
            let snapshot = self.input_collector.state().pointer_snapshot();
            self.frame = self.game.update(&snapshot);

            // Advance frame AFTER the update so edge states settle
            self.input_collector.advance_frame();

            self.game.world_mut().tick(delta_time);

            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Feed events to input collector FIRST (before egui)
        self.input_collector.handle_window_event(&event);

        // Update scale factor if needed
        if let Some(window) = &self.window {
            let scale_factor = window.scale_factor() as f32;
            self.input_collector.set_scale_factor(scale_factor);
        }

        // Let egui handle the event for UI interactions
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            let _ = renderer.handle_event(window, &event);
        }

        // Handle debug hotkeys (debug builds only)
        #[cfg(debug_assertions)]
        if let WindowEvent::KeyboardInput { event, .. } = &event
            && event.state.is_pressed()
            && let PhysicalKey::Code(KeyCode::Backquote) = event.physical_key
        {
            self.toggle_debug_window();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
                // Geometry rebuilds before the next frame's hit test
                let scale_factor = self
                    .window
                    .as_ref()
                    .map_or(1.0, |w| w.scale_factor() as f32);
                self.game.resolution_change([
                    new_size.width as f32 / scale_factor,
                    new_size.height as f32 / scale_factor,
                ]);
            }
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    let config = renderer.config().clone();
                    let frame = &self.frame;
                    let theme = &self.theme;
                    let game = &self.game;
                    let debug_ui = &mut self.debug_ui;

                    match renderer.draw(window, |ctx| {
                        egui::CentralPanel::default()
                            .frame(egui::Frame::NONE)
                            .show(ctx, |ui| {
                                scene::paint(ui.painter(), theme, frame);
                            });

                        debug_ui.render(ctx, game, &config);
                    }) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            warn!("Surface lost, reconfiguring");
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("Out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => {
                            error!(error = %e, "Render error");
                        }
                    }
                }
            }
            _ => {}
        }
    }
}
