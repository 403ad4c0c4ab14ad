//! Input snapshot and event types consumed by the camera controller.
//!
//! The controller never talks to an input backend directly. The host fills an
//! `InputState` each frame and translates its backend's discrete events into
//! `InputEvent`s; everything here is backend-independent.

use glam::Vec2;

/// Pointer buttons the controller recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Discrete input events forwarded to the controller.
///
/// `CameraController::handle_event` returns true when the event was consumed;
/// the host should then stop propagating it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ButtonPressed { button: PointerButton },
    ButtonReleased { button: PointerButton },
    /// Pointer moved by `delta` pixels since the last motion event.
    PointerMotion { delta: Vec2 },
    WheelUp,
    WheelDown,
}

/// Polled input state, filled by the host once per frame.
///
/// Directional strengths are in [0, 1]; a digital keyboard reports 0 or 1,
/// an analog stick anything in between.
#[derive(Debug, Clone, Copy)]
pub struct InputState {
    pub pan_left: f32,
    pub pan_right: f32,
    pub pan_up: f32,
    pub pan_down: f32,
    /// Pointer position in viewport-local pixels.
    pub pointer_pos: Vec2,
    /// Whether the drag modifier key is held.
    pub modifier_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pan_left: 0.0,
            pan_right: 0.0,
            pan_up: 0.0,
            pan_down: 0.0,
            pointer_pos: Vec2::ZERO,
            modifier_held: false,
        }
    }

    /// Combined keyboard axis: +x is right, +y is down.
    pub fn keyboard_axis(&self) -> Vec2 {
        Vec2::new(
            self.pan_right - self.pan_left,
            self.pan_down - self.pan_up,
        )
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a button press qualifies to start a camera drag.
///
/// Middle and right button always qualify; left button only with the
/// modifier key held (so plain left clicks stay available to the game).
pub fn starts_drag(button: PointerButton, modifier_held: bool) -> bool {
    match button {
        PointerButton::Middle | PointerButton::Right => true,
        PointerButton::Left => modifier_held,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_and_right_always_start_drag() {
        assert!(starts_drag(PointerButton::Middle, false));
        assert!(starts_drag(PointerButton::Right, false));
        assert!(starts_drag(PointerButton::Middle, true));
    }

    #[test]
    fn test_left_needs_modifier() {
        assert!(!starts_drag(PointerButton::Left, false));
        assert!(starts_drag(PointerButton::Left, true));
    }

    #[test]
    fn test_keyboard_axis_combines_strengths() {
        let mut input = InputState::new();
        input.pan_right = 1.0;
        input.pan_up = 0.5;
        assert_eq!(input.keyboard_axis(), Vec2::new(1.0, -0.5));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::new();
        input.pan_left = 1.0;
        input.pan_right = 1.0;
        assert_eq!(input.keyboard_axis(), Vec2::ZERO);
    }
}
