//! Default tuning values for the camera controller.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

use glam::Vec2;

// =============================================================================
// PANNING
// =============================================================================

/// Base pan speed in world units per second (at zoom 1.0)
pub const DEFAULT_PAN_SPEED: f32 = 800.0;
/// Maximum velocity change per second while approaching the target velocity
pub const DEFAULT_ACCELERATION: f32 = 2400.0;
/// Distance from the viewport border (pixels) that triggers edge scrolling
pub const DEFAULT_EDGE_MARGIN: f32 = 16.0;
/// Multiplier applied to pointer deltas while dragging
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 1.0;

// =============================================================================
// ZOOM
// =============================================================================

/// Minimum zoom level
pub const DEFAULT_ZOOM_MIN: f32 = 0.5;
/// Maximum zoom level
pub const DEFAULT_ZOOM_MAX: f32 = 3.0;
/// Zoom change per wheel step
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;
/// Floor for zoom divisors, keeps speed scaling finite at degenerate zoom
pub const ZOOM_EPSILON: f32 = 0.001;

// =============================================================================
// FOCUS
// =============================================================================

/// Zoom a focus transition targets when the caller does not specify one
pub const DEFAULT_FOCUS_ZOOM: f32 = 1.0;
/// Duration (seconds) of a focus transition when the caller does not specify one
pub const DEFAULT_FOCUS_DURATION: f32 = 0.6;

// =============================================================================
// WORLD LIMITS
// =============================================================================

/// Default world rectangle origin
pub const DEFAULT_WORLD_ORIGIN: Vec2 = Vec2::new(-4096.0, -4096.0);
/// Default world rectangle size
pub const DEFAULT_WORLD_SIZE: Vec2 = Vec2::new(8192.0, 8192.0);

// =============================================================================
// DEMO / WINDOW
// =============================================================================

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
/// Cap on per-frame delta time, prevents jumps after long frames
pub const MAX_FRAME_DT: f32 = 0.1;
/// Pointer travel (pixels) below which a press/release pair counts as a click
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;
