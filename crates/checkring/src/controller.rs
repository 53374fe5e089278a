//! Stage controller
//!
//! A two-stage sequential state machine: the arc sweeps a full turn, then the
//! checkmark line is revealed. The controller owns at most one timer handle at
//! a time and is driven entirely by the host:
//!
//! ```text
//! start() ──► ArcRunning ──complete──► ArcDone ──► LineRunning ──complete──► LineDone
//!                 │                                     │
//!                 └──────────── cancel() ───────────────┴──────────────────► LineDone
//! ```
//!
//! Timer events are passed in by value together with the driver that issued
//! them. Events whose handle is not the active one, or whose timer the driver
//! no longer reports as running, are dropped.

use checkring_animation::{TimerEvent, TimerEventKind, TimerId, TimingDriver};

/// Sweep of the arc stage in degrees (a full counter-clockwise turn)
pub const ARC_SWEEP_DEGREES: f32 = -360.0;

/// Default duration of each stage in milliseconds
pub const DEFAULT_STAGE_DURATION_MS: u32 = 500;

/// Observable stage of the animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationStage {
    /// Nothing started yet
    #[default]
    Idle,
    /// The arc is sweeping around the ring
    ArcRunning,
    /// The ring is complete; the line has not started
    ///
    /// Transient: completing the arc starts the line stage in the same call,
    /// so this is never observed between driver events.
    ArcDone,
    /// The checkmark is being revealed
    LineRunning,
    /// Ring and checkmark are both complete
    LineDone,
}

impl AnimationStage {
    /// Whether a stage timer is active
    pub fn is_running(self) -> bool {
        matches!(self, AnimationStage::ArcRunning | AnimationStage::LineRunning)
    }
}

/// Internal state: the running variants own their timer handle and progress
#[derive(Clone, Copy, Debug, PartialEq)]
enum StageState {
    Idle,
    ArcRunning { timer: TimerId, sweep: f32 },
    // Only held between the arc completing and the line timer starting
    ArcDone,
    LineRunning { timer: TimerId, progress: f32 },
    LineDone { interrupted_sweep: Option<f32> },
}

/// Drives the arc and line stages
///
/// Not `Clone`: the controller is the only owner of its timer handle.
#[derive(Debug)]
pub struct StageController {
    state: StageState,
    arc_duration_ms: u32,
    line_duration_ms: u32,
}

impl StageController {
    /// Create an idle controller with the default stage durations
    pub fn new() -> Self {
        Self::with_durations(DEFAULT_STAGE_DURATION_MS, DEFAULT_STAGE_DURATION_MS)
    }

    /// Create an idle controller with explicit stage durations
    pub fn with_durations(arc_duration_ms: u32, line_duration_ms: u32) -> Self {
        Self {
            state: StageState::Idle,
            arc_duration_ms,
            line_duration_ms,
        }
    }

    pub fn arc_duration_ms(&self) -> u32 {
        self.arc_duration_ms
    }

    pub fn line_duration_ms(&self) -> u32 {
        self.line_duration_ms
    }

    /// Takes effect the next time the arc stage starts
    pub fn set_arc_duration(&mut self, duration_ms: u32) {
        self.arc_duration_ms = duration_ms;
    }

    /// Takes effect the next time the line stage starts
    pub fn set_line_duration(&mut self, duration_ms: u32) {
        self.line_duration_ms = duration_ms;
    }

    pub fn stage(&self) -> AnimationStage {
        match self.state {
            StageState::Idle => AnimationStage::Idle,
            StageState::ArcRunning { .. } => AnimationStage::ArcRunning,
            StageState::ArcDone => AnimationStage::ArcDone,
            StageState::LineRunning { .. } => AnimationStage::LineRunning,
            StageState::LineDone { .. } => AnimationStage::LineDone,
        }
    }

    /// Progress of the current stage
    ///
    /// Degrees in `[0, -360]` while the arc runs, a fraction in `[0, 1]` while
    /// the line runs. Completed stages report their end value; idle reports 0.
    pub fn progress(&self) -> f32 {
        match self.state {
            StageState::Idle => 0.0,
            StageState::ArcRunning { sweep, .. } => sweep,
            StageState::ArcDone => ARC_SWEEP_DEGREES,
            StageState::LineRunning { progress, .. } => progress,
            StageState::LineDone { .. } => 1.0,
        }
    }

    /// Arc sweep at the moment the arc stage was cancelled, if it was
    pub fn interrupted_sweep(&self) -> Option<f32> {
        match self.state {
            StageState::LineDone { interrupted_sweep } => interrupted_sweep,
            _ => None,
        }
    }

    /// Handle of the timer driving the current stage
    pub fn active_timer(&self) -> Option<TimerId> {
        match self.state {
            StageState::ArcRunning { timer, .. } | StageState::LineRunning { timer, .. } => {
                Some(timer)
            }
            _ => None,
        }
    }

    /// Whether a stage is running and `driver` still runs its timer
    pub fn is_running(&self, driver: &dyn TimingDriver) -> bool {
        self.active_timer().is_some_and(|timer| driver.is_running(timer))
    }

    /// Begin the two-stage sequence
    ///
    /// Accepted from any non-running stage, including a finished run. Returns
    /// `false` and changes nothing while a stage is running. A stage whose
    /// timer the driver dropped without an event counts as cancelled.
    pub fn start(&mut self, driver: &mut dyn TimingDriver) -> bool {
        if self.is_running(driver) {
            tracing::debug!("StageController: start ignored in {:?}", self.stage());
            return false;
        }
        if let Some(timer) = self.active_timer() {
            tracing::debug!("StageController: timer {:?} dropped by driver", timer);
            self.cancel(driver);
        }

        let timer = driver.start(self.arc_duration_ms, 0.0, ARC_SWEEP_DEGREES);
        self.state = StageState::ArcRunning { timer, sweep: 0.0 };
        tracing::debug!(
            "StageController: arc stage started ({}ms)",
            self.arc_duration_ms
        );
        true
    }

    /// Apply an interpolated value from `timer`
    ///
    /// Returns `true` if the value was applied.
    pub fn on_tick(&mut self, driver: &dyn TimingDriver, timer: TimerId, value: f32) -> bool {
        if !self.owns_live_timer(driver, timer) || value.is_nan() {
            tracing::trace!("StageController: discarded tick {:?} = {}", timer, value);
            return false;
        }

        match &mut self.state {
            StageState::ArcRunning { sweep, .. } => {
                *sweep = value.clamp(ARC_SWEEP_DEGREES, 0.0);
            }
            StageState::LineRunning { progress, .. } => {
                *progress = value.clamp(0.0, 1.0);
            }
            _ => return false,
        }
        true
    }

    /// Finish the stage driven by `timer`
    ///
    /// Completing the arc immediately starts the line stage. Completing the
    /// line ends the sequence. Returns `true` if a transition happened.
    pub fn on_stage_timer_complete(
        &mut self,
        driver: &mut dyn TimingDriver,
        timer: TimerId,
    ) -> bool {
        if !self.owns_live_timer(driver, timer) {
            tracing::trace!("StageController: discarded completion of {:?}", timer);
            return false;
        }
        driver.release(timer);

        match self.state {
            StageState::ArcRunning { .. } => {
                self.state = StageState::ArcDone;
                tracing::debug!("StageController: arc stage done");
                self.start_line(driver);
            }
            StageState::LineRunning { .. } => {
                self.state = StageState::LineDone {
                    interrupted_sweep: None,
                };
                tracing::debug!("StageController: line stage done");
            }
            _ => return false,
        }
        true
    }

    /// Dispatch a driver event
    ///
    /// Returns `true` if the event changed what should be drawn.
    pub fn handle_event(&mut self, driver: &mut dyn TimingDriver, event: TimerEvent) -> bool {
        match event.kind {
            TimerEventKind::Tick(value) => self.on_tick(driver, event.timer, value),
            TimerEventKind::Complete => self.on_stage_timer_complete(driver, event.timer),
            TimerEventKind::Cancelled => {
                if self.active_timer() == Some(event.timer) {
                    self.cancel(driver)
                } else {
                    false
                }
            }
        }
    }

    /// Stop the running stage and jump to the final state
    ///
    /// Cancelling the arc skips the line stage entirely: the next frame shows
    /// the full ring and the full checkmark, while
    /// [`interrupted_sweep`](Self::interrupted_sweep) keeps the sweep reached.
    /// Returns `true` if a stage was running.
    pub fn cancel(&mut self, driver: &mut dyn TimingDriver) -> bool {
        match self.state {
            StageState::ArcRunning { timer, sweep } => {
                driver.cancel(timer);
                self.state = StageState::LineDone {
                    interrupted_sweep: Some(sweep),
                };
                tracing::debug!("StageController: arc stage cancelled at {}", sweep);
                true
            }
            StageState::LineRunning { timer, progress } => {
                driver.cancel(timer);
                self.state = StageState::LineDone {
                    interrupted_sweep: None,
                };
                tracing::debug!("StageController: line stage cancelled at {}", progress);
                true
            }
            _ => false,
        }
    }

    /// Release every timer handle before the owner goes away
    ///
    /// Safe to call at any time and any number of times.
    pub fn teardown(&mut self, driver: &mut dyn TimingDriver) {
        if self.cancel(driver) {
            tracing::debug!("StageController: torn down while running");
        }
    }

    fn start_line(&mut self, driver: &mut dyn TimingDriver) -> bool {
        if self.active_timer().is_some() {
            return false;
        }

        let timer = driver.start(self.line_duration_ms, 0.0, 1.0);
        self.state = StageState::LineRunning {
            timer,
            progress: 0.0,
        };
        tracing::debug!(
            "StageController: line stage started ({}ms)",
            self.line_duration_ms
        );
        true
    }

    fn owns_live_timer(&self, driver: &dyn TimingDriver, timer: TimerId) -> bool {
        self.active_timer() == Some(timer) && driver.is_running(timer)
    }
}

impl Default for StageController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkring_animation::{Interpolator, TimerScheduler};

    fn scheduler() -> TimerScheduler {
        TimerScheduler::new().with_interpolator(Interpolator::Linear)
    }

    /// Advance the scheduler and feed every event to the controller
    fn run_for(controller: &mut StageController, scheduler: &mut TimerScheduler, ms: f32) {
        for event in scheduler.advance(ms) {
            controller.handle_event(scheduler, event);
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = StageController::new();
        assert_eq!(controller.stage(), AnimationStage::Idle);
        assert_eq!(controller.progress(), 0.0);
        assert_eq!(controller.arc_duration_ms(), 500);
        assert_eq!(controller.line_duration_ms(), 500);
    }

    #[test]
    fn test_double_start_runs_once() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();

        assert!(controller.start(&mut scheduler));
        let timer = controller.active_timer();
        assert!(!controller.start(&mut scheduler));

        assert_eq!(controller.active_timer(), timer);
        assert_eq!(scheduler.timer_count(), 1);
        assert_eq!(controller.stage(), AnimationStage::ArcRunning);
    }

    #[test]
    fn test_arc_progress_follows_ticks() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);

        run_for(&mut controller, &mut scheduler, 250.0);
        assert!((controller.progress() - -180.0).abs() < 1e-3);
        assert_eq!(controller.stage(), AnimationStage::ArcRunning);
    }

    #[test]
    fn test_arc_completion_starts_line() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);
        let arc_timer = controller.active_timer().unwrap();

        run_for(&mut controller, &mut scheduler, 500.0);

        assert_eq!(controller.stage(), AnimationStage::LineRunning);
        assert_eq!(controller.progress(), 0.0);
        assert_ne!(controller.active_timer(), Some(arc_timer));
        // The arc timer was released, only the line timer remains
        assert!(!scheduler.is_running(arc_timer));
        assert_eq!(scheduler.timer_count(), 1);
    }

    #[test]
    fn test_full_sequence_ends_in_line_done() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);

        run_for(&mut controller, &mut scheduler, 500.0);
        run_for(&mut controller, &mut scheduler, 250.0);
        assert!((controller.progress() - 0.5).abs() < 1e-3);

        run_for(&mut controller, &mut scheduler, 250.0);
        assert_eq!(controller.stage(), AnimationStage::LineDone);
        assert_eq!(controller.progress(), 1.0);
        assert_eq!(controller.interrupted_sweep(), None);
        assert_eq!(scheduler.timer_count(), 0);

        // No auto restart
        run_for(&mut controller, &mut scheduler, 1000.0);
        assert_eq!(controller.stage(), AnimationStage::LineDone);
    }

    #[test]
    fn test_restart_after_finished_run() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);
        run_for(&mut controller, &mut scheduler, 500.0);
        run_for(&mut controller, &mut scheduler, 500.0);
        assert_eq!(controller.stage(), AnimationStage::LineDone);

        assert!(controller.start(&mut scheduler));
        assert_eq!(controller.stage(), AnimationStage::ArcRunning);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn test_cancel_during_arc_snaps_to_done() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);
        let timer = controller.active_timer().unwrap();

        run_for(&mut controller, &mut scheduler, 500.0 / 3.0);
        assert!(controller.cancel(&mut scheduler));

        assert_eq!(controller.stage(), AnimationStage::LineDone);
        let sweep = controller.interrupted_sweep().unwrap();
        assert!((sweep - -120.0).abs() < 1e-2);
        assert!(!scheduler.is_running(timer));
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_cancel_during_line() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);
        run_for(&mut controller, &mut scheduler, 500.0);
        run_for(&mut controller, &mut scheduler, 100.0);

        assert!(controller.cancel(&mut scheduler));
        assert_eq!(controller.stage(), AnimationStage::LineDone);
        assert_eq!(controller.interrupted_sweep(), None);
        assert_eq!(scheduler.timer_count(), 0);

        // Nothing left to cancel
        assert!(!controller.cancel(&mut scheduler));
    }

    #[test]
    fn test_late_tick_after_cancel_is_discarded() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);
        let timer = controller.active_timer().unwrap();

        // Events produced before the cancel but delivered after it
        let pending = scheduler.advance(100.0);
        controller.cancel(&mut scheduler);

        for event in pending {
            assert!(!controller.handle_event(&mut scheduler, event));
        }
        assert!(!controller.on_tick(&scheduler, timer, -300.0));
        assert!(!controller.on_stage_timer_complete(&mut scheduler, timer));
        assert_eq!(controller.stage(), AnimationStage::LineDone);
    }

    #[test]
    fn test_tick_for_foreign_timer_is_discarded() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);

        let foreign = scheduler.start(500, 0.0, 1.0);
        assert!(!controller.on_tick(&scheduler, foreign, -90.0));
        assert!(!controller.on_stage_timer_complete(&mut scheduler, foreign));
        assert_eq!(controller.progress(), 0.0);
        assert_eq!(controller.stage(), AnimationStage::ArcRunning);
    }

    #[test]
    fn test_tick_values_are_clamped() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);
        let timer = controller.active_timer().unwrap();

        assert!(controller.on_tick(&scheduler, timer, -400.0));
        assert_eq!(controller.progress(), ARC_SWEEP_DEGREES);
        assert!(controller.on_tick(&scheduler, timer, 10.0));
        assert_eq!(controller.progress(), 0.0);
        assert!(!controller.on_tick(&scheduler, timer, f32::NAN));
    }

    #[test]
    fn test_driver_cancellation_event() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);

        for event in scheduler.cancel_all() {
            assert!(controller.handle_event(&mut scheduler, event));
        }
        assert_eq!(controller.stage(), AnimationStage::LineDone);
        assert_eq!(controller.interrupted_sweep(), Some(0.0));
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();

        // Before any start
        controller.teardown(&mut scheduler);
        assert_eq!(controller.stage(), AnimationStage::Idle);

        controller.start(&mut scheduler);
        controller.teardown(&mut scheduler);
        controller.teardown(&mut scheduler);

        assert!(!controller.is_running(&scheduler));
        assert_eq!(scheduler.timer_count(), 0);
        assert!(scheduler.advance(100.0).is_empty());
    }

    #[test]
    fn test_durations_apply_on_next_start() {
        let mut scheduler = scheduler();
        let mut controller = StageController::with_durations(100, 200);
        controller.start(&mut scheduler);
        controller.set_arc_duration(1000);

        // The running arc keeps the duration it started with
        run_for(&mut controller, &mut scheduler, 100.0);
        assert_eq!(controller.stage(), AnimationStage::LineRunning);

        run_for(&mut controller, &mut scheduler, 100.0);
        assert!((controller.progress() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_start_recovers_from_silently_dropped_timer() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);
        let timer = controller.active_timer().unwrap();

        // The driver stops the timer itself and reports nothing
        assert!(scheduler.cancel(timer));
        for _ in 0..10 {
            run_for(&mut controller, &mut scheduler, 100.0);
        }
        assert_eq!(controller.stage(), AnimationStage::ArcRunning);
        assert!(!controller.is_running(&scheduler));

        assert!(controller.start(&mut scheduler));
        assert_eq!(controller.stage(), AnimationStage::ArcRunning);
        assert_ne!(controller.active_timer(), Some(timer));
        assert_eq!(controller.progress(), 0.0);
        assert_eq!(scheduler.timer_count(), 1);

        run_for(&mut controller, &mut scheduler, 500.0);
        assert_eq!(controller.stage(), AnimationStage::LineRunning);
    }

    #[test]
    fn test_arc_done_is_never_observed_between_events() {
        let mut scheduler = scheduler();
        let mut controller = StageController::new();
        controller.start(&mut scheduler);

        for _ in 0..100 {
            for event in scheduler.advance(16.0) {
                controller.handle_event(&mut scheduler, event);
                assert_ne!(controller.stage(), AnimationStage::ArcDone);
            }
        }
        assert_eq!(controller.stage(), AnimationStage::LineDone);
    }
}
