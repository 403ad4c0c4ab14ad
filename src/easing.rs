//! Easing curves for focus transitions.
//!
//! A transition is described by a curve shape and an ease direction. `sample`
//! maps normalized time in [0, 1] to a normalized progress in [0, 1], with
//! exact values at both endpoints.

/// Shape of the interpolation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCurve {
    Linear,
    Sine,
    Quad,
    Cubic,
    Quart,
    Expo,
}

impl TransitionCurve {
    pub fn name(&self) -> &'static str {
        match self {
            TransitionCurve::Linear => "Linear",
            TransitionCurve::Sine => "Sine",
            TransitionCurve::Quad => "Quad",
            TransitionCurve::Cubic => "Cubic",
            TransitionCurve::Quart => "Quart",
            TransitionCurve::Expo => "Expo",
        }
    }

    pub const ALL: [TransitionCurve; 6] = [
        TransitionCurve::Linear,
        TransitionCurve::Sine,
        TransitionCurve::Quad,
        TransitionCurve::Cubic,
        TransitionCurve::Quart,
        TransitionCurve::Expo,
    ];

    /// Ease-in form of the curve on [0, 1].
    fn ease_in(&self, t: f32) -> f32 {
        match self {
            TransitionCurve::Linear => t,
            TransitionCurve::Sine => 1.0 - (t * std::f32::consts::FRAC_PI_2).cos(),
            TransitionCurve::Quad => t * t,
            TransitionCurve::Cubic => t * t * t,
            TransitionCurve::Quart => t * t * t * t,
            TransitionCurve::Expo => {
                if t <= 0.0 {
                    0.0
                } else {
                    (2.0_f32).powf(10.0 * (t - 1.0))
                }
            }
        }
    }
}

/// Direction the curve is applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseKind {
    /// Slow start, fast finish
    In,
    /// Fast start, slow finish
    Out,
    /// Slow start and finish
    InOut,
}

impl EaseKind {
    pub fn name(&self) -> &'static str {
        match self {
            EaseKind::In => "In",
            EaseKind::Out => "Out",
            EaseKind::InOut => "InOut",
        }
    }

    pub const ALL: [EaseKind; 3] = [EaseKind::In, EaseKind::Out, EaseKind::InOut];
}

/// Sample the easing function at normalized time `t`.
///
/// `t` outside [0, 1] is clamped. Endpoints are exact: `sample(_, _, 0.0) == 0.0`
/// and `sample(_, _, 1.0) == 1.0`.
pub fn sample(curve: TransitionCurve, ease: EaseKind, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    match ease {
        EaseKind::In => curve.ease_in(t),
        EaseKind::Out => 1.0 - curve.ease_in(1.0 - t),
        EaseKind::InOut => {
            if t < 0.5 {
                curve.ease_in(t * 2.0) * 0.5
            } else {
                1.0 - curve.ease_in((1.0 - t) * 2.0) * 0.5
            }
        }
    }
}
