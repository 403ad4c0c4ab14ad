//! Camera configuration and advisory validation.
//!
//! Every field is freely settable between ticks; changes take effect on the
//! next tick or event. Validation never blocks execution - bad values produce
//! warnings, and the runtime defuses them by clamping or defaulting.

use std::fmt;

use crate::constants::*;
use crate::easing::{EaseKind, TransitionCurve};
use crate::limits::WorldRect;

/// Tunable camera behavior.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Enable keyboard panning
    pub keyboard_enabled: bool,
    /// Base pan speed in world units per second
    pub pan_speed: f32,
    /// Maximum velocity change per second
    pub acceleration: f32,
    /// Enable panning when the pointer nears the viewport border
    pub edge_scroll_enabled: bool,
    /// Border proximity (pixels) that triggers edge scrolling
    pub edge_margin: f32,
    /// Multiplier on pointer deltas while dragging
    pub drag_sensitivity: f32,
    /// Minimum zoom
    pub zoom_min: f32,
    /// Maximum zoom
    pub zoom_max: f32,
    /// Zoom change per wheel step
    pub zoom_step: f32,
    /// Constrain the visible area to `world_rect`
    pub limits_enabled: bool,
    /// World bounds used when `limits_enabled`
    pub world_rect: WorldRect,
    /// Ask the host to confine the pointer to the window
    pub confine_pointer: bool,
    /// Zoom a focus transition targets when the caller passes none
    pub focus_zoom: f32,
    /// Duration (seconds) of a focus transition when the caller passes none
    pub focus_duration: f32,
    /// Ignore keyboard/edge/drag/wheel input while a focus transition runs
    pub focus_suppresses_input: bool,
    /// Easing curve shape for focus transitions
    pub focus_curve: TransitionCurve,
    /// Easing direction for focus transitions
    pub focus_ease: EaseKind,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            keyboard_enabled: true,
            pan_speed: DEFAULT_PAN_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            edge_scroll_enabled: false,
            edge_margin: DEFAULT_EDGE_MARGIN,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            zoom_min: DEFAULT_ZOOM_MIN,
            zoom_max: DEFAULT_ZOOM_MAX,
            zoom_step: DEFAULT_ZOOM_STEP,
            limits_enabled: false,
            world_rect: WorldRect::new(DEFAULT_WORLD_ORIGIN, DEFAULT_WORLD_SIZE),
            confine_pointer: false,
            focus_zoom: DEFAULT_FOCUS_ZOOM,
            focus_duration: DEFAULT_FOCUS_DURATION,
            focus_suppresses_input: true,
            focus_curve: TransitionCurve::Sine,
            focus_ease: EaseKind::InOut,
        }
    }
}

impl CameraConfig {
    /// Check the configuration for suspicious values.
    ///
    /// Warnings are advisory: the controller keeps running either way, the
    /// host decides whether to surface them (log line, editor hint).
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.zoom_min <= 0.0 {
            warnings.push(ConfigWarning::ZoomMinNotPositive);
        }
        if self.zoom_min >= self.zoom_max {
            warnings.push(ConfigWarning::ZoomMinNotBelowMax);
        }
        if self.limits_enabled && (self.world_rect.size.x <= 0.0 || self.world_rect.size.y <= 0.0) {
            warnings.push(ConfigWarning::EmptyWorldRect);
        }
        warnings
    }
}

/// Advisory configuration problems. Informational only, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    ZoomMinNotPositive,
    ZoomMinNotBelowMax,
    EmptyWorldRect,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::ZoomMinNotPositive => {
                write!(f, "zoom_min should be greater than zero")
            }
            ConfigWarning::ZoomMinNotBelowMax => {
                write!(f, "zoom_min should be less than zoom_max")
            }
            ConfigWarning::EmptyWorldRect => {
                write!(f, "world limits are enabled but the world rectangle has no area")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_default_config_is_clean() {
        assert!(CameraConfig::default().validate().is_empty());
    }

    #[test]
    fn test_zoom_min_not_positive() {
        let mut config = CameraConfig::default();
        config.zoom_min = 0.0;
        assert!(config
            .validate()
            .contains(&ConfigWarning::ZoomMinNotPositive));
    }

    #[test]
    fn test_zoom_min_above_max() {
        let mut config = CameraConfig::default();
        config.zoom_min = 4.0;
        config.zoom_max = 2.0;
        assert!(config
            .validate()
            .contains(&ConfigWarning::ZoomMinNotBelowMax));
    }

    #[test]
    fn test_empty_world_rect_only_when_limits_enabled() {
        let mut config = CameraConfig::default();
        config.world_rect = WorldRect::new(Vec2::ZERO, Vec2::ZERO);
        assert!(!config.validate().contains(&ConfigWarning::EmptyWorldRect));

        config.limits_enabled = true;
        assert!(config.validate().contains(&ConfigWarning::EmptyWorldRect));
    }
}
