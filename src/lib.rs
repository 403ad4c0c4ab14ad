//! Real-time camera controller for top-down strategy-style games.
//!
//! A single stateful [`CameraController`] turns player input (keyboard,
//! mouse wheel, drag, screen-edge proximity) into smooth camera motion and
//! zoom, optionally constrains the visible area to world bounds, and runs
//! animated focus transitions to a target position and zoom.
//!
//! The controller is backend-independent: the host fills an
//! [`input::InputState`] each frame, translates its windowing events into
//! [`input::InputEvent`]s, and calls [`CameraController::tick`] once per
//! step. See `main.rs` for a winit/egui demo doing exactly that.

pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod easing;
pub mod events;
pub mod input;
pub mod limits;
pub mod tween;

pub use camera::CameraController;
pub use components::Position;
pub use config::{CameraConfig, ConfigWarning};
pub use easing::{EaseKind, TransitionCurve};
pub use events::CameraEvent;
pub use input::{InputEvent, InputState, PointerButton};
pub use limits::WorldRect;
