//! Timer scheduler
//!
//! The timing side of the widget. A [`TimingDriver`] hands out [`TimerId`]
//! handles for value timers and reports their progress as typed
//! [`TimerEvent`]s. The widget consumes those events; it never registers a
//! callback, so there is no reference cycle between the timers and their owner.
//!
//! [`TimerScheduler`] is the reference driver: the host calls
//! [`advance`](TimerScheduler::advance) (or [`tick`](TimerScheduler::tick))
//! once per frame and forwards the returned events.
//!
//! ```
//! use checkring_animation::{TimerEventKind, TimerScheduler, TimingDriver};
//!
//! let mut scheduler = TimerScheduler::new();
//! let id = scheduler.start(100, 0.0, 1.0);
//!
//! let events = scheduler.advance(100.0);
//! assert_eq!(events.len(), 2);
//! assert_eq!(events[0].kind, TimerEventKind::Tick(1.0));
//! assert_eq!(events[1].kind, TimerEventKind::Complete);
//! assert!(events.iter().all(|e| e.timer == id));
//! ```

use crate::interpolator::Interpolator;
use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered value timer
    pub struct TimerId;
}

/// What happened to a timer during a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimerEventKind {
    /// New interpolated value
    Tick(f32),
    /// The timer reached its end value; always preceded by a final `Tick`
    Complete,
    /// The driver stopped the timer before it finished
    Cancelled,
}

/// An event emitted by a [`TimingDriver`] for one of its timers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerEvent {
    pub timer: TimerId,
    pub kind: TimerEventKind,
}

impl TimerEvent {
    pub fn tick(timer: TimerId, value: f32) -> Self {
        Self {
            timer,
            kind: TimerEventKind::Tick(value),
        }
    }

    pub fn complete(timer: TimerId) -> Self {
        Self {
            timer,
            kind: TimerEventKind::Complete,
        }
    }

    pub fn cancelled(timer: TimerId) -> Self {
        Self {
            timer,
            kind: TimerEventKind::Cancelled,
        }
    }
}

/// A source of interpolated value timers
///
/// Implementations must make [`cancel`](TimingDriver::cancel) synchronous: once
/// it returns, no further events for that timer may be produced.
pub trait TimingDriver {
    /// Start a timer interpolating from `from` to `to` over `duration_ms`
    fn start(&mut self, duration_ms: u32, from: f32, to: f32) -> TimerId;

    /// Stop and forget a timer
    ///
    /// Returns `false` if the timer was unknown (already cancelled or released).
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Whether the timer is still registered and allowed to deliver events
    ///
    /// A timer that has just finished stays running until released, so its
    /// final `Tick` and `Complete` are still accepted by the owner.
    fn is_running(&self, id: TimerId) -> bool;

    /// Forget a finished timer
    fn release(&mut self, id: TimerId);
}

/// Frame-driven reference implementation of [`TimingDriver`]
///
/// Finished timers are kept until their owner releases them.
#[derive(Debug)]
pub struct TimerScheduler {
    timers: SlotMap<TimerId, Tween>,
    interpolator: Interpolator,
    last_frame: Option<Instant>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            interpolator: Interpolator::default(),
            last_frame: None,
        }
    }

    /// Use `interpolator` for timers started from now on
    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Advance every live timer by `dt_ms`
    ///
    /// Emits one `Tick` per unfinished timer, followed by `Complete` for each
    /// timer that reached its end during this call.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<TimerEvent> {
        let mut events = Vec::new();

        for (id, tween) in self.timers.iter_mut() {
            let Some(value) = tween.advance(dt_ms) else {
                continue;
            };
            events.push(TimerEvent::tick(id, value));
            if tween.is_finished() {
                tracing::trace!("TimerScheduler: timer {:?} finished at {}", id, value);
                events.push(TimerEvent::complete(id));
            }
        }

        events
    }

    /// Advance by the wall-clock time since the previous call
    ///
    /// The first call only establishes the reference instant and advances by
    /// zero.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let now = Instant::now();
        let dt_ms = self
            .last_frame
            .map(|last| (now - last).as_secs_f32() * 1000.0)
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        self.advance(dt_ms)
    }

    /// Cancel every registered timer, reporting each as `Cancelled`
    pub fn cancel_all(&mut self) -> Vec<TimerEvent> {
        let events: Vec<_> = self.timers.keys().map(TimerEvent::cancelled).collect();
        self.timers.clear();
        events
    }

    /// Number of registered timers, finished ones included
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingDriver for TimerScheduler {
    fn start(&mut self, duration_ms: u32, from: f32, to: f32) -> TimerId {
        let tween = Tween::new(duration_ms, from, to).with_interpolator(self.interpolator);
        let id = self.timers.insert(tween);
        tracing::trace!(
            "TimerScheduler: started {:?} ({} -> {} over {}ms)",
            id,
            from,
            to,
            duration_ms
        );
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.timers.remove(id).is_some();
        if removed {
            tracing::trace!("TimerScheduler: cancelled {:?}", id);
        }
        removed
    }

    fn is_running(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    fn release(&mut self, id: TimerId) {
        self.timers.remove(id);
    }
}
