//! Time interpolators
//!
//! Map linear time progress (0.0 to 1.0) onto eased progress.

use std::f32::consts::PI;

/// Timing curve applied to a [`Tween`](crate::tween::Tween)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolator {
    /// Constant rate
    Linear,
    /// Starts and ends slowly, fastest in the middle
    #[default]
    AccelerateDecelerate,
}

impl Interpolator {
    /// Apply the curve to `t`, clamped into `[0, 1]`
    ///
    /// The endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Interpolator::Linear => t,
            Interpolator::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}
