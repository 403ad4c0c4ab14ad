mod app;
mod demo;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use hecs::{Entity, World};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

use glutin::prelude::GlSurface;
use glutin::surface::WindowSurface;

use egui_glow::EguiGlow;

use rts_camera::constants::{CLICK_DRAG_THRESHOLD, MAX_FRAME_DT};
use rts_camera::{
    CameraConfig, CameraController, CameraEvent, ConfigWarning, InputEvent, InputState,
    PointerButton,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Run with PUFFIN=1 and connect puffin_viewer to inspect frame times
    if std::env::var_os("PUFFIN").is_some() {
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        match puffin_http::Server::new(&addr) {
            Ok(server) => {
                puffin::set_scopes_on(true);
                std::mem::forget(server);
                tracing::info!(%addr, "puffin profiling server listening");
            }
            Err(err) => tracing::warn!("failed to start puffin server: {err}"),
        }
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Camera
    camera: CameraController,
    input: InputState,
    keys_pressed: HashSet<KeyCode>,

    // Demo world
    world: World,
    landmarks: Vec<Entity>,

    // UI / host state
    status: String,
    warnings: Vec<ConfigWarning>,
    pointer_confined: bool,
    left_press_pos: Option<Vec2>,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop);

        let mut world = World::new();
        let scene = demo::load_scene(&mut world).expect("Failed to load demo scene");

        let mut config = CameraConfig::default();
        config.limits_enabled = true;
        config.world_rect = scene.world_rect;
        for warning in config.validate() {
            tracing::warn!("camera config: {warning}");
        }

        let size = window.inner_size();
        let camera = CameraController::new(config, size.width as f32, size.height as f32);

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            camera,
            input: InputState::new(),
            keys_pressed: HashSet::new(),
            world,
            landmarks: scene.landmarks,
            status: String::from("Ready"),
            warnings: Vec::new(),
            pointer_confined: false,
            left_press_pos: None,
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event).consumed;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.camera.resize(size.width as f32, size.height as f32);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                state.input.modifier_held = modifiers.state().control_key();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match event.state {
                            ElementState::Pressed => {
                                state.handle_key_pressed(key);
                                state.keys_pressed.insert(key);
                            }
                            ElementState::Released => {
                                state.keys_pressed.remove(&key);
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                let delta = pos - state.input.pointer_pos;
                state.input.pointer_pos = pos;
                if !egui_consumed {
                    let input = state.input;
                    state
                        .camera
                        .handle_event(InputEvent::PointerMotion { delta }, &input);
                }
            }
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                if !egui_consumed {
                    if let Some(button) = map_button(button) {
                        state.handle_button(button, button_state == ElementState::Pressed);
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if !egui_consumed {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                    };
                    let input = state.input;
                    if scroll > 0.0 {
                        state.camera.handle_event(InputEvent::WheelUp, &input);
                    } else if scroll < 0.0 {
                        state.camera.handle_event(InputEvent::WheelDown, &input);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

/// Map a winit button onto the closed set the controller recognizes.
fn map_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Right),
        _ => None,
    }
}

impl AppState {
    fn handle_key_pressed(&mut self, key: KeyCode) {
        if key == KeyCode::Escape {
            self.camera.cancel_focus();
            return;
        }

        // 1-9 focus the corresponding landmark with the configured defaults
        let digit = match key {
            KeyCode::Digit1 => Some(0),
            KeyCode::Digit2 => Some(1),
            KeyCode::Digit3 => Some(2),
            KeyCode::Digit4 => Some(3),
            KeyCode::Digit5 => Some(4),
            KeyCode::Digit6 => Some(5),
            KeyCode::Digit7 => Some(6),
            KeyCode::Digit8 => Some(7),
            KeyCode::Digit9 => Some(8),
            _ => None,
        };
        if let Some(index) = digit {
            if let Some(&entity) = self.landmarks.get(index) {
                self.camera.focus_to_entity(&self.world, entity, 0.0, 0.0);
            }
        }
    }

    fn handle_button(&mut self, button: PointerButton, pressed: bool) {
        let input = self.input;
        if pressed {
            let consumed = self
                .camera
                .handle_event(InputEvent::ButtonPressed { button }, &input);
            // Plain left press is free for click-to-focus
            if !consumed && button == PointerButton::Left {
                self.left_press_pos = Some(self.input.pointer_pos);
            }
        } else {
            let consumed = self
                .camera
                .handle_event(InputEvent::ButtonReleased { button }, &input);
            if !consumed && button == PointerButton::Left {
                if let Some(press_pos) = self.left_press_pos.take() {
                    let travel = (self.input.pointer_pos - press_pos).length();
                    if travel <= CLICK_DRAG_THRESHOLD {
                        let target = self.camera.screen_to_world(self.input.pointer_pos);
                        self.camera.focus_to(target, 0.0, 0.0);
                    }
                }
            }
        }
    }

    fn update_and_render(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();

        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame_time = now;

        // Derive directional strengths from held keys
        self.input.pan_left = key_strength(&self.keys_pressed, &[KeyCode::KeyA, KeyCode::ArrowLeft]);
        self.input.pan_right =
            key_strength(&self.keys_pressed, &[KeyCode::KeyD, KeyCode::ArrowRight]);
        self.input.pan_up = key_strength(&self.keys_pressed, &[KeyCode::KeyW, KeyCode::ArrowUp]);
        self.input.pan_down = key_strength(&self.keys_pressed, &[KeyCode::KeyS, KeyCode::ArrowDown]);

        self.camera.tick(dt, &self.input);

        for event in self.camera.drain_events() {
            match event {
                CameraEvent::FocusStarted { position, zoom } => {
                    self.status = format!(
                        "Focusing ({:.0}, {:.0}) at zoom {:.2}",
                        position.x, position.y, zoom
                    );
                }
                CameraEvent::FocusFinished => {
                    self.status = String::from("Focus complete");
                }
            }
        }

        self.apply_pointer_confinement();

        // Run UI and paint the world through the camera
        let camera = &mut self.camera;
        let world = &self.world;
        let status = self.status.clone();
        let mut warnings = Vec::new();
        self.egui_glow.run(&self.window, |ctx| {
            warnings = demo::settings_panel(ctx, &mut camera.config, &status);
            let painter = ctx.layer_painter(egui::LayerId::background());
            demo::draw_world(&painter, camera, world, ctx.pixels_per_point());
        });

        if warnings != self.warnings {
            for warning in &warnings {
                tracing::warn!("camera config: {warning}");
            }
            self.warnings = warnings;
        }

        // Render
        unsafe {
            use glow::HasContext;
            self.gl.clear_color(0.08, 0.09, 0.11, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.egui_glow.paint(&self.window);
        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }

    fn apply_pointer_confinement(&mut self) {
        let want = self.camera.config.confine_pointer;
        if want == self.pointer_confined {
            return;
        }
        let mode = if want {
            CursorGrabMode::Confined
        } else {
            CursorGrabMode::None
        };
        match self.window.set_cursor_grab(mode) {
            Ok(()) => self.pointer_confined = want,
            Err(err) => {
                tracing::warn!("pointer confinement not available: {err}");
                self.camera.config.confine_pointer = false;
                self.pointer_confined = false;
            }
        }
    }
}

fn key_strength(keys: &HashSet<KeyCode>, codes: &[KeyCode]) -> f32 {
    if codes.iter().any(|code| keys.contains(code)) {
        1.0
    } else {
        0.0
    }
}
