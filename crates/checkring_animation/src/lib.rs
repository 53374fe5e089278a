//! Checkring Animation
//!
//! Value timers for the checkring widget.
//!
//! # Features
//!
//! - **Tweens**: a single value animated between two endpoints over a duration
//! - **Interpolators**: linear and accelerate/decelerate timing curves
//! - **Timing Driver**: handle-based timers that report typed events instead of
//!   calling back into their owner
//! - **Timer Scheduler**: frame-driven reference driver

pub mod interpolator;
pub mod scheduler;
pub mod tween;

pub use interpolator::Interpolator;
pub use scheduler::{TimerEvent, TimerEventKind, TimerId, TimerScheduler, TimingDriver};
pub use tween::Tween;
