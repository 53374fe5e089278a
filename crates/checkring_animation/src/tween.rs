//! Timed value animation
//!
//! A [`Tween`] moves a single `f32` from one value to another over a fixed
//! duration. It does not know about wall-clock time; the owner advances it by
//! the elapsed milliseconds of each frame.

use crate::interpolator::Interpolator;

/// A value animated between two endpoints over a fixed duration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    elapsed_ms: f32,
    interpolator: Interpolator,
    finished: bool,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration_ms`
    pub fn new(duration_ms: u32, from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            interpolator: Interpolator::default(),
            finished: false,
        }
    }

    /// Set the timing curve
    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Advance by `dt_ms` and return the new value
    ///
    /// Returns `None` once the tween has finished. The advance that reaches the
    /// end returns exactly `to` and marks the tween finished. Negative or NaN
    /// deltas count as zero.
    pub fn advance(&mut self, dt_ms: f32) -> Option<f32> {
        if self.finished {
            return None;
        }

        let dt_ms = if dt_ms.is_nan() { 0.0 } else { dt_ms.max(0.0) };
        self.elapsed_ms += dt_ms;

        let duration = self.duration_ms as f32;
        if self.elapsed_ms >= duration {
            self.elapsed_ms = duration;
            self.finished = true;
        }

        Some(self.value())
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.finished {
            return self.to;
        }
        let eased = self.interpolator.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Linear time progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return if self.finished { 1.0 } else { 0.0 };
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
