//! Owned interpolation task for focus transitions.
//!
//! A `FocusTween` snapshots start and end values at creation and is advanced
//! by the controller once per tick. Cancellation is simply dropping the value;
//! nothing outlives the task.

use crate::easing::{self, EaseKind, TransitionCurve};
use glam::Vec2;

/// In-flight interpolation of camera position and zoom.
#[derive(Debug, Clone)]
pub struct FocusTween {
    start_position: Vec2,
    end_position: Vec2,
    start_zoom: f32,
    end_zoom: f32,
    elapsed: f32,
    duration: f32,
    curve: TransitionCurve,
    ease: EaseKind,
}

impl FocusTween {
    pub fn new(
        start_position: Vec2,
        end_position: Vec2,
        start_zoom: f32,
        end_zoom: f32,
        duration: f32,
        curve: TransitionCurve,
        ease: EaseKind,
    ) -> Self {
        Self {
            start_position,
            end_position,
            start_zoom,
            end_zoom,
            elapsed: 0.0,
            duration,
            curve,
            ease,
        }
    }

    /// Advance the tween. Returns true once the duration has elapsed.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current interpolated (position, zoom).
    ///
    /// A completed tween reports the end values verbatim, so callers land on
    /// the target without floating-point residue.
    pub fn current(&self) -> (Vec2, f32) {
        if self.is_complete() {
            return (self.end_position, self.end_zoom);
        }
        let t = self.elapsed / self.duration;
        let k = easing::sample(self.curve, self.ease, t);
        (
            self.start_position + (self.end_position - self.start_position) * k,
            self.start_zoom + (self.end_zoom - self.start_zoom) * k,
        )
    }

    /// Final (position, zoom) this tween is heading to.
    pub fn target(&self) -> (Vec2, f32) {
        (self.end_position, self.end_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tween(duration: f32) -> FocusTween {
        FocusTween::new(
            Vec2::ZERO,
            Vec2::new(100.0, 50.0),
            1.0,
            2.0,
            duration,
            TransitionCurve::Linear,
            EaseKind::In,
        )
    }

    #[test]
    fn test_starts_at_start_values() {
        let tween = make_tween(1.0);
        let (pos, zoom) = tween.current();
        assert_eq!(pos, Vec2::ZERO);
        assert_eq!(zoom, 1.0);
    }

    #[test]
    fn test_linear_midpoint() {
        let mut tween = make_tween(1.0);
        assert!(!tween.advance(0.5));
        let (pos, zoom) = tween.current();
        assert!((pos.x - 50.0).abs() < 1e-4);
        assert!((pos.y - 25.0).abs() < 1e-4);
        assert!((zoom - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_completion_is_exact() {
        let mut tween = make_tween(0.4);
        assert!(!tween.advance(0.2));
        assert!(tween.advance(0.2));
        let (pos, zoom) = tween.current();
        assert_eq!(pos, Vec2::new(100.0, 50.0));
        assert_eq!(zoom, 2.0);
    }

    #[test]
    fn test_overshoot_stays_at_end() {
        let mut tween = make_tween(0.1);
        assert!(tween.advance(10.0));
        assert_eq!(tween.current(), (Vec2::new(100.0, 50.0), 2.0));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut tween = make_tween(0.0);
        assert!(tween.advance(0.016));
        assert_eq!(tween.current(), (Vec2::new(100.0, 50.0), 2.0));
    }
}
