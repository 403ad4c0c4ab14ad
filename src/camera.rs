//! The stateful camera controller.
//!
//! One instance owns all camera state (position, zoom, velocity, drag, focus)
//! and is driven by the host through three entry points: `tick` once per
//! simulation step, `handle_event` per discrete input event, and the focus
//! operations. Within a tick the order is fixed: direction, velocity,
//! position, clamp - clamping a stale position would allow a one-tick
//! out-of-bounds excursion.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::Position;
use crate::config::CameraConfig;
use crate::constants::ZOOM_EPSILON;
use crate::events::{CameraEvent, EventQueue};
use crate::input::{self, InputEvent, InputState, PointerButton};
use crate::limits::{self, WorldRect};
use crate::tween::FocusTween;

pub struct CameraController {
    pub config: CameraConfig,
    /// World-space position of the camera center
    pub position: Vec2,
    /// Uniform zoom scalar (world units per viewport pixel)
    pub zoom: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    velocity: Vec2,
    /// Button that started the active drag, if any
    drag_button: Option<PointerButton>,
    /// Running focus transition, if any
    focus: Option<FocusTween>,
    events: EventQueue,
}

impl CameraController {
    pub fn new(config: CameraConfig, viewport_width: f32, viewport_height: f32) -> Self {
        let zoom = 1.0_f32.min(config.zoom_max).max(config.zoom_min);
        Self {
            config,
            position: Vec2::ZERO,
            zoom,
            viewport_width,
            viewport_height,
            velocity: Vec2::ZERO,
            drag_button: None,
            focus: None,
            events: EventQueue::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_button.is_some()
    }

    pub fn is_focusing(&self) -> bool {
        self.focus.is_some()
    }

    /// Drain pending notifications. Call once per frame.
    pub fn drain_events(&mut self) -> impl Iterator<Item = CameraEvent> + '_ {
        self.events.drain()
    }

    fn input_suppressed(&self) -> bool {
        self.focus.is_some() && self.config.focus_suppresses_input
    }

    /// Advance the camera one fixed simulation step.
    pub fn tick(&mut self, dt: f32, input: &InputState) {
        puffin::profile_function!();

        let suppressed = self.input_suppressed();

        if let Some(tween) = &mut self.focus {
            let done = tween.advance(dt);
            let (position, zoom) = tween.current();
            self.position = position;
            self.zoom = zoom;
            if done {
                self.focus = None;
                if self.config.limits_enabled {
                    self.apply_limits();
                }
                self.events.push(CameraEvent::FocusFinished);
            }
        }

        if suppressed {
            // Inputs are frozen, but the bounds invariant still holds every tick
            if self.config.limits_enabled {
                self.apply_limits();
            }
            return;
        }

        let direction = self.compute_direction(input);
        let target_velocity = direction * (self.config.pan_speed / self.zoom.max(ZOOM_EPSILON));

        // Bounded-rate approach: at most acceleration * dt of change per step
        let max_step = self.config.acceleration * dt;
        let diff = target_velocity - self.velocity;
        if diff.length() <= max_step {
            self.velocity = target_velocity;
        } else {
            self.velocity += diff.normalize_or_zero() * max_step;
        }

        self.position += self.velocity * dt;

        if self.config.limits_enabled {
            self.apply_limits();
        }
    }

    /// Desired movement direction from keyboard and edge-scroll, length <= 1.
    ///
    /// The two sources sum before the single normalization cap; simultaneous
    /// edge-scroll and opposite keyboard input partially cancel.
    pub fn compute_direction(&self, input: &InputState) -> Vec2 {
        let mut direction = Vec2::ZERO;

        if self.config.keyboard_enabled {
            direction += input.keyboard_axis();
        }

        if self.config.edge_scroll_enabled && self.drag_button.is_none() {
            let margin = self.config.edge_margin;
            let pointer = input.pointer_pos;
            if pointer.x <= margin {
                direction.x -= 1.0;
            } else if pointer.x >= self.viewport_width - margin {
                direction.x += 1.0;
            }
            if pointer.y <= margin {
                direction.y -= 1.0;
            } else if pointer.y >= self.viewport_height - margin {
                direction.y += 1.0;
            }
        }

        if direction.length() > 1.0 {
            direction = direction.normalize();
        }
        direction
    }

    /// React to a discrete input event. Returns true when consumed; the host
    /// should then stop propagating the event.
    pub fn handle_event(&mut self, event: InputEvent, input: &InputState) -> bool {
        if self.input_suppressed() {
            return false;
        }

        match event {
            InputEvent::ButtonPressed { button } => {
                if self.drag_button.is_none() && input::starts_drag(button, input.modifier_held) {
                    self.drag_button = Some(button);
                    // Residual keyboard momentum must not compound with the drag
                    self.velocity = Vec2::ZERO;
                    true
                } else {
                    false
                }
            }
            InputEvent::ButtonReleased { button } => {
                // Only the button that started the drag can end it
                if self.drag_button == Some(button) {
                    self.drag_button = None;
                    true
                } else {
                    false
                }
            }
            InputEvent::PointerMotion { delta } => {
                if self.drag_button.is_some() {
                    // Grab-and-pull: the world follows the pointer
                    self.position -=
                        delta * (self.config.drag_sensitivity / self.zoom.max(ZOOM_EPSILON));
                    if self.config.limits_enabled {
                        self.apply_limits();
                    }
                    true
                } else {
                    false
                }
            }
            InputEvent::WheelUp => {
                self.adjust_zoom(self.config.zoom_step);
                true
            }
            InputEvent::WheelDown => {
                self.adjust_zoom(-self.config.zoom_step);
                true
            }
        }
    }

    fn adjust_zoom(&mut self, delta: f32) {
        // min before max: the lower bound wins if the configured range is inverted
        self.zoom = (self.zoom + delta)
            .min(self.config.zoom_max)
            .max(self.config.zoom_min);
    }

    /// Clamp the current position so the visible rectangle stays in bounds.
    pub fn apply_limits(&mut self) {
        self.position = limits::clamp_position(
            self.position,
            self.zoom,
            self.viewport(),
            &self.config.world_rect,
        );
    }

    /// Start an animated transition of position and zoom.
    ///
    /// `zoom <= 0` and `duration <= 0` fall back to the configured defaults.
    /// The resolved zoom is clamped to the zoom range, and the target position
    /// is pre-clamped for that zoom when world limits are enabled, so the
    /// animation never overshoots into an invalid region. A running transition
    /// is superseded silently.
    pub fn focus_to(&mut self, target: Vec2, zoom: f32, duration: f32) {
        let zoom = if zoom > 0.0 { zoom } else { self.config.focus_zoom };
        let zoom = zoom.min(self.config.zoom_max).max(self.config.zoom_min);
        let duration = if duration > 0.0 {
            duration
        } else {
            self.config.focus_duration
        };
        let target = if self.config.limits_enabled {
            limits::clamp_position(target, zoom, self.viewport(), &self.config.world_rect)
        } else {
            target
        };

        self.focus = None;
        self.velocity = Vec2::ZERO;
        tracing::debug!(?target, zoom, duration, "starting focus transition");
        self.events.push(CameraEvent::FocusStarted {
            position: target,
            zoom,
        });
        self.focus = Some(FocusTween::new(
            self.position,
            target,
            self.zoom,
            zoom,
            duration,
            self.config.focus_curve,
            self.config.focus_ease,
        ));
    }

    /// Focus on an entity's current position (a snapshot - the transition does
    /// not track the entity afterwards). No-op if the entity has no position.
    pub fn focus_to_entity(&mut self, world: &World, entity: Entity, zoom: f32, duration: f32) {
        let target = match world.get::<&Position>(entity) {
            Ok(pos) => pos.vec2(),
            Err(_) => return,
        };
        self.focus_to(target, zoom, duration);
    }

    /// Final (position, zoom) of the running focus transition, if any.
    pub fn focus_target(&self) -> Option<(Vec2, f32)> {
        self.focus.as_ref().map(|tween| tween.target())
    }

    /// Stop a running focus transition where it is. Position and zoom keep
    /// whatever values were reached; no finished notification is emitted.
    pub fn cancel_focus(&mut self) {
        if self.focus.take().is_some() {
            tracing::debug!("focus transition cancelled");
        }
    }

    /// Convert a viewport-local pixel coordinate to world space.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.position + (screen - self.viewport() * 0.5) * self.zoom
    }

    /// Convert a world coordinate to viewport-local pixels.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) / self.zoom.max(ZOOM_EPSILON) + self.viewport() * 0.5
    }

    /// The world-space rectangle currently visible.
    pub fn visible_rect(&self) -> WorldRect {
        let size = self.viewport() * self.zoom;
        WorldRect::new(self.position - size * 0.5, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CameraEvent;

    const DT: f32 = 1.0 / 60.0;

    fn make_controller() -> CameraController {
        let mut config = CameraConfig::default();
        config.keyboard_enabled = true;
        config.edge_scroll_enabled = false;
        config.limits_enabled = false;
        CameraController::new(config, 1920.0, 1080.0)
    }

    fn idle_input() -> InputState {
        let mut input = InputState::new();
        // Park the pointer mid-viewport so edge-scroll tests opt in explicitly
        input.pointer_pos = Vec2::new(960.0, 540.0);
        input
    }

    fn finished_count(camera: &mut CameraController) -> usize {
        camera
            .drain_events()
            .filter(|e| *e == CameraEvent::FocusFinished)
            .count()
    }

    #[test]
    fn test_direction_magnitude_capped() {
        let mut camera = make_controller();
        camera.config.edge_scroll_enabled = true;

        let mut input = idle_input();
        input.pan_right = 1.0;
        input.pan_down = 1.0;
        // Pointer in the bottom-right corner stacks edge-scroll on top
        input.pointer_pos = Vec2::new(1920.0, 1080.0);

        let direction = camera.compute_direction(&input);
        assert!(direction.length() <= 1.0 + 1e-5);
        assert!(direction.x > 0.0 && direction.y > 0.0);
    }

    #[test]
    fn test_edge_scroll_pushes_outward() {
        let mut camera = make_controller();
        camera.config.edge_scroll_enabled = true;
        camera.config.keyboard_enabled = false;

        let mut input = idle_input();
        input.pointer_pos = Vec2::new(0.0, 540.0);
        assert_eq!(camera.compute_direction(&input), Vec2::new(-1.0, 0.0));

        input.pointer_pos = Vec2::new(1920.0, 540.0);
        assert_eq!(camera.compute_direction(&input), Vec2::new(1.0, 0.0));

        input.pointer_pos = Vec2::new(960.0, 0.0);
        assert_eq!(camera.compute_direction(&input), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_edge_scroll_near_edge_wins_ties() {
        let mut camera = make_controller();
        camera.config.edge_scroll_enabled = true;
        camera.config.keyboard_enabled = false;
        // Margin over half the extent: both edge conditions overlap mid-viewport
        camera.config.edge_margin = 1200.0;

        let mut input = idle_input();
        input.pointer_pos = Vec2::new(960.0, 540.0);
        let direction = camera.compute_direction(&input);
        // Both conditions overlap; the near-edge branch wins on each axis
        assert!(direction.x < 0.0);
        assert!(direction.y < 0.0);
    }

    #[test]
    fn test_edge_scroll_ignored_while_dragging() {
        let mut camera = make_controller();
        camera.config.edge_scroll_enabled = true;
        camera.config.keyboard_enabled = false;

        let mut input = idle_input();
        input.pointer_pos = Vec2::new(0.0, 0.0);
        assert!(camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Middle
            },
            &input,
        ));
        assert_eq!(camera.compute_direction(&input), Vec2::ZERO);
    }

    #[test]
    fn test_opposite_keyboard_and_edge_partially_cancel() {
        let mut camera = make_controller();
        camera.config.edge_scroll_enabled = true;

        let mut input = idle_input();
        input.pointer_pos = Vec2::new(0.0, 540.0); // edge pushes -x
        input.pan_right = 1.0; // keyboard pushes +x
        assert_eq!(camera.compute_direction(&input), Vec2::ZERO);
    }

    #[test]
    fn test_velocity_change_bounded_by_acceleration() {
        let mut camera = make_controller();
        camera.config.pan_speed = 1_000_000.0;
        camera.config.acceleration = 100.0;

        let mut input = idle_input();
        input.pan_right = 1.0;

        let before = camera.velocity;
        camera.tick(DT, &input);
        let change = (camera.velocity - before).length();
        assert!(change <= camera.config.acceleration * DT + 1e-3);
    }

    #[test]
    fn test_velocity_converges_to_target() {
        let mut camera = make_controller();
        let mut input = idle_input();
        input.pan_right = 1.0;

        for _ in 0..120 {
            camera.tick(DT, &input);
        }
        // zoom 1.0: target velocity is pan_speed on +x
        assert!((camera.velocity.x - camera.config.pan_speed).abs() < 1e-2);
        assert_eq!(camera.velocity.y, 0.0);
        assert!(camera.position.x > 0.0);
    }

    #[test]
    fn test_pan_speed_scales_inverse_with_zoom() {
        let mut camera = make_controller();
        camera.zoom = 2.0;
        let mut input = idle_input();
        input.pan_right = 1.0;

        for _ in 0..240 {
            camera.tick(DT, &input);
        }
        assert!((camera.velocity.x - camera.config.pan_speed / 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_wheel_clamped_at_min() {
        let mut camera = make_controller();
        camera.config.zoom_min = 0.5;
        camera.config.zoom_max = 3.0;
        camera.config.zoom_step = 0.1;
        camera.zoom = 0.5;

        let input = idle_input();
        assert!(camera.handle_event(InputEvent::WheelDown, &input));
        assert_eq!(camera.zoom, 0.5);
    }

    #[test]
    fn test_wheel_saturates_at_max() {
        let mut camera = make_controller();
        let input = idle_input();
        for _ in 0..100 {
            camera.handle_event(InputEvent::WheelUp, &input);
        }
        assert_eq!(camera.zoom, camera.config.zoom_max);
        camera.handle_event(InputEvent::WheelUp, &input);
        assert_eq!(camera.zoom, camera.config.zoom_max);
    }

    #[test]
    fn test_drag_press_motion_release() {
        let mut camera = make_controller();
        let input = idle_input();

        assert!(camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Middle
            },
            &input,
        ));
        assert!(camera.is_dragging());
        assert_eq!(camera.velocity, Vec2::ZERO);

        // Pointer right by 10px pulls the camera left by 10 world units at zoom 1
        assert!(camera.handle_event(
            InputEvent::PointerMotion {
                delta: Vec2::new(10.0, 0.0)
            },
            &input,
        ));
        assert_eq!(camera.position, Vec2::new(-10.0, 0.0));

        assert!(camera.handle_event(
            InputEvent::ButtonReleased {
                button: PointerButton::Middle
            },
            &input,
        ));
        assert!(!camera.is_dragging());
    }

    #[test]
    fn test_drag_scales_with_sensitivity_and_zoom() {
        let mut camera = make_controller();
        camera.config.drag_sensitivity = 2.0;
        camera.zoom = 2.0;
        let input = idle_input();

        camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Right,
            },
            &input,
        );
        camera.handle_event(
            InputEvent::PointerMotion {
                delta: Vec2::new(4.0, -6.0),
            },
            &input,
        );
        // delta * sensitivity / zoom = (4, -6) * 2 / 2 = (4, -6), inverted
        assert_eq!(camera.position, Vec2::new(-4.0, 6.0));
    }

    #[test]
    fn test_release_of_other_button_ignored() {
        let mut camera = make_controller();
        let input = idle_input();

        camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Middle,
            },
            &input,
        );
        assert!(!camera.handle_event(
            InputEvent::ButtonReleased {
                button: PointerButton::Right
            },
            &input,
        ));
        assert!(camera.is_dragging());
    }

    #[test]
    fn test_second_press_during_drag_ignored() {
        let mut camera = make_controller();
        let input = idle_input();

        camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Middle,
            },
            &input,
        );
        assert!(!camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Right
            },
            &input,
        ));
        // Original drag still owned by the middle button
        assert!(!camera.handle_event(
            InputEvent::ButtonReleased {
                button: PointerButton::Right
            },
            &input,
        ));
        assert!(camera.is_dragging());
    }

    #[test]
    fn test_left_press_requires_modifier() {
        let mut camera = make_controller();
        let mut input = idle_input();

        assert!(!camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Left
            },
            &input,
        ));
        assert!(!camera.is_dragging());

        input.modifier_held = true;
        assert!(camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Left
            },
            &input,
        ));
        assert!(camera.is_dragging());
    }

    #[test]
    fn test_motion_without_drag_not_consumed() {
        let mut camera = make_controller();
        let input = idle_input();
        assert!(!camera.handle_event(
            InputEvent::PointerMotion {
                delta: Vec2::new(5.0, 5.0)
            },
            &input,
        ));
        assert_eq!(camera.position, Vec2::ZERO);
    }

    #[test]
    fn test_drag_applies_limits() {
        let mut camera = make_controller();
        camera.config.limits_enabled = true;
        camera.config.world_rect =
            WorldRect::new(Vec2::new(-4096.0, -4096.0), Vec2::new(8192.0, 8192.0));
        let input = idle_input();

        camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Middle,
            },
            &input,
        );
        camera.handle_event(
            InputEvent::PointerMotion {
                delta: Vec2::new(100_000.0, 0.0),
            },
            &input,
        );
        // half_visible.x = 960 at zoom 1.0
        assert_eq!(camera.position.x, -4096.0 + 960.0);
    }

    #[test]
    fn test_tick_applies_limits_without_input() {
        let mut camera = make_controller();
        camera.config.limits_enabled = true;
        camera.config.world_rect =
            WorldRect::new(Vec2::new(-4096.0, -4096.0), Vec2::new(8192.0, 8192.0));
        camera.position = Vec2::new(99_999.0, 0.0);

        camera.tick(DT, &idle_input());
        assert_eq!(camera.position.x, 4096.0 - 960.0);
    }

    #[test]
    fn test_focus_scenario_runs_to_completion() {
        let mut camera = make_controller();
        camera.zoom = 0.85;

        camera.focus_to(Vec2::new(1000.0, 600.0), 1.0, 0.4);

        let events: Vec<_> = camera.drain_events().collect();
        assert_eq!(
            events,
            vec![CameraEvent::FocusStarted {
                position: Vec2::new(1000.0, 600.0),
                zoom: 1.0
            }]
        );
        assert!(camera.is_focusing());

        let input = idle_input();
        camera.tick(0.2, &input);
        assert!(camera.is_focusing());
        assert!(camera.position != Vec2::ZERO);

        camera.tick(0.2, &input);
        assert!(!camera.is_focusing());
        assert_eq!(camera.position, Vec2::new(1000.0, 600.0));
        assert_eq!(camera.zoom, 1.0);
        assert_eq!(finished_count(&mut camera), 1);

        // No stray notifications afterwards
        camera.tick(DT, &input);
        assert_eq!(finished_count(&mut camera), 0);
    }

    #[test]
    fn test_focus_defaults_and_zoom_clamp() {
        let mut camera = make_controller();
        camera.config.focus_zoom = 99.0; // above zoom_max

        camera.focus_to(Vec2::new(10.0, 10.0), 0.0, -1.0);
        let events: Vec<_> = camera.drain_events().collect();
        assert_eq!(
            events,
            vec![CameraEvent::FocusStarted {
                position: Vec2::new(10.0, 10.0),
                zoom: camera.config.zoom_max
            }]
        );
    }

    #[test]
    fn test_focus_target_preclamped() {
        let mut camera = make_controller();
        camera.config.limits_enabled = true;
        camera.config.world_rect =
            WorldRect::new(Vec2::new(-4096.0, -4096.0), Vec2::new(8192.0, 8192.0));

        camera.focus_to(Vec2::new(99_999.0, 0.0), 1.0, 0.4);
        let events: Vec<_> = camera.drain_events().collect();
        assert_eq!(
            events,
            vec![CameraEvent::FocusStarted {
                position: Vec2::new(4096.0 - 960.0, 0.0),
                zoom: 1.0
            }]
        );
    }

    #[test]
    fn test_new_focus_supersedes_running_one() {
        let mut camera = make_controller();
        let input = idle_input();

        camera.focus_to(Vec2::new(1000.0, 0.0), 1.0, 1.0);
        camera.tick(0.1, &input);
        camera.focus_to(Vec2::new(-500.0, 200.0), 2.0, 0.2);

        // Finish the second transition
        camera.tick(0.2, &input);
        assert_eq!(camera.position, Vec2::new(-500.0, 200.0));
        assert_eq!(camera.zoom, 2.0);

        // The superseded transition never finished
        assert_eq!(finished_count(&mut camera), 1);
    }

    #[test]
    fn test_cancel_focus_keeps_reached_values() {
        let mut camera = make_controller();
        let input = idle_input();

        camera.focus_to(Vec2::new(1000.0, 600.0), 1.0, 1.0);
        camera.tick(0.5, &input);
        let mid_position = camera.position;
        let mid_zoom = camera.zoom;
        assert!(mid_position != Vec2::ZERO);

        camera.cancel_focus();
        assert!(!camera.is_focusing());
        assert_eq!(camera.position, mid_position);
        assert_eq!(camera.zoom, mid_zoom);

        // Silent: no finished notification now or later
        camera.tick(1.0, &input);
        assert_eq!(finished_count(&mut camera), 0);
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut camera = make_controller();
        camera.cancel_focus();
        assert!(!camera.is_focusing());
        assert!(camera.drain_events().next().is_none());
    }

    #[test]
    fn test_suppression_blocks_events_and_motion() {
        let mut camera = make_controller();
        camera.config.focus_suppresses_input = true;
        camera.focus_to(Vec2::new(100.0, 100.0), 1.5, 1.0);
        camera.drain_events().count();

        let zoom_before = camera.zoom;
        let mut input = idle_input();
        input.pan_right = 1.0;

        assert!(!camera.handle_event(InputEvent::WheelUp, &input));
        assert_eq!(camera.zoom, zoom_before);
        assert!(!camera.handle_event(
            InputEvent::ButtonPressed {
                button: PointerButton::Middle
            },
            &input,
        ));
        assert!(!camera.is_dragging());

        // Keyboard input contributes nothing while suppressed
        camera.tick(0.1, &input);
        assert_eq!(camera.velocity, Vec2::ZERO);

        // Input resumes once the transition completes
        camera.tick(1.0, &input);
        assert!(!camera.is_focusing());
        camera.tick(DT, &input);
        assert!(camera.velocity.x > 0.0);
    }

    #[test]
    fn test_suppression_off_allows_input_during_focus() {
        let mut camera = make_controller();
        camera.config.focus_suppresses_input = false;
        camera.focus_to(Vec2::new(100.0, 100.0), 1.5, 1.0);

        let input = idle_input();
        let zoom_before = camera.zoom;
        assert!(camera.handle_event(InputEvent::WheelUp, &input));
        assert!((camera.zoom - (zoom_before + camera.config.zoom_step)).abs() < 1e-6);
    }

    #[test]
    fn test_suppressed_tick_still_clamps() {
        let mut camera = make_controller();
        camera.focus_to(Vec2::new(5_000.0, 0.0), 1.0, 1.0);

        // Limits switched on mid-flight: the frozen integrator still clamps
        camera.config.limits_enabled = true;
        camera.config.world_rect = WorldRect::new(Vec2::new(-100.0, -100.0), Vec2::new(200.0, 200.0));

        camera.tick(0.5, &idle_input());
        let rect = camera.config.world_rect;
        assert!(camera.position.x >= rect.origin.x);
        assert!(camera.position.x <= rect.max().x);
    }

    #[test]
    fn test_focus_to_entity_snapshots_position() {
        let mut camera = make_controller();
        let mut world = World::new();
        let entity = world.spawn((Position::new(300.0, -120.0),));

        camera.focus_to_entity(&world, entity, 1.0, 0.5);
        let events: Vec<_> = camera.drain_events().collect();
        assert_eq!(
            events,
            vec![CameraEvent::FocusStarted {
                position: Vec2::new(300.0, -120.0),
                zoom: 1.0
            }]
        );

        // Moving the entity afterwards does not retarget the transition
        world.get::<&mut Position>(entity).unwrap().x = 9_999.0;
        camera.tick(0.5, &idle_input());
        assert_eq!(camera.position, Vec2::new(300.0, -120.0));
    }

    #[test]
    fn test_focus_to_entity_without_position_is_noop() {
        let mut camera = make_controller();
        let mut world = World::new();
        let entity = world.spawn(());

        camera.focus_to_entity(&world, entity, 1.0, 0.5);
        assert!(!camera.is_focusing());
        assert!(camera.drain_events().next().is_none());
    }

    #[test]
    fn test_screen_world_roundtrip() {
        let mut camera = make_controller();
        camera.position = Vec2::new(123.0, -456.0);
        camera.zoom = 1.7;

        let screen = Vec2::new(400.0, 300.0);
        let world = camera.screen_to_world(screen);
        let back = camera.world_to_screen(world);
        assert!((back - screen).length() < 1e-3);
    }

    #[test]
    fn test_visible_rect_matches_zoom() {
        let mut camera = make_controller();
        camera.position = Vec2::ZERO;
        camera.zoom = 2.0;
        let rect = camera.visible_rect();
        assert_eq!(rect.size, Vec2::new(3840.0, 2160.0));
        assert_eq!(rect.origin, Vec2::new(-1920.0, -1080.0));
    }
}
