//! Success view
//!
//! [`SuccessView`] is what a host embeds: it keeps the style, the current
//! layout and its derived geometry, and the stage controller together, and
//! tracks whether a redraw is needed. The host supplies the timing driver and
//! the draw context on each call.
//!
//! ```
//! use checkring::{AnimationStage, Dimensions, SuccessView};
//! use checkring_animation::TimerScheduler;
//!
//! let mut scheduler = TimerScheduler::new();
//! let mut view = SuccessView::default();
//! view.set_dimensions(Dimensions::new(100.0, 100.0, 0.0));
//!
//! view.start(&mut scheduler);
//! for _ in 0..2 {
//!     let events = scheduler.advance(500.0);
//!     view.handle_events(&mut scheduler, events);
//! }
//! assert_eq!(view.stage(), AnimationStage::LineDone);
//! ```

use crate::controller::{AnimationStage, StageController};
use crate::frame::{produce_frame, Frame};
use crate::geometry::{compute_geometry, CheckmarkPath, CircleGeometry, Dimensions, Padding};
use crate::paint::paint_frame;
use crate::style::CheckringStyle;
use checkring_animation::{TimerEvent, TimingDriver};
use checkring_core::{Color, DrawContext};

/// The embeddable success animation widget
#[derive(Debug)]
pub struct SuccessView {
    style: CheckringStyle,
    dimensions: Dimensions,
    circle: CircleGeometry,
    checkmark: CheckmarkPath,
    controller: StageController,
    needs_redraw: bool,
}

impl SuccessView {
    pub fn new(style: CheckringStyle) -> Self {
        let dimensions = Dimensions::new(0.0, 0.0, style.stroke_width);
        let (circle, checkmark) = compute_geometry(&dimensions);
        Self {
            style,
            dimensions,
            circle,
            checkmark,
            controller: StageController::with_durations(style.duration_ms, style.duration_ms),
            needs_redraw: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a new layout and recompute all geometry
    ///
    /// The stroke width in `dimensions` is replaced by the style's.
    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = Dimensions {
            stroke_width: self.style.stroke_width,
            ..dimensions
        };
        self.relayout();
    }

    /// Resize keeping the current padding
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_dimensions(Dimensions {
            width,
            height,
            ..self.dimensions
        });
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.set_dimensions(self.dimensions.with_padding(padding));
    }

    fn relayout(&mut self) {
        let (circle, checkmark) = compute_geometry(&self.dimensions);
        self.circle = circle;
        self.checkmark = checkmark;
        self.needs_redraw = true;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Style setters
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
        self.needs_redraw = true;
    }

    /// Set the stroke width in pixels; the ring is re-laid out to keep the
    /// stroke inside the bounds
    pub fn set_stroke_width(&mut self, stroke_width: f32) {
        self.style.stroke_width = stroke_width;
        self.dimensions.stroke_width = stroke_width;
        self.relayout();
    }

    /// Set the duration of both stages; applies from the next stage start
    pub fn set_duration(&mut self, duration_ms: u32) {
        self.style.duration_ms = duration_ms;
        self.controller.set_arc_duration(duration_ms);
        self.controller.set_line_duration(duration_ms);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────────

    /// Begin the success animation; ignored while it is already running
    pub fn start(&mut self, driver: &mut dyn TimingDriver) -> bool {
        let started = self.controller.start(driver);
        self.needs_redraw |= started;
        started
    }

    /// Forward one timer event
    pub fn handle_event(&mut self, driver: &mut dyn TimingDriver, event: TimerEvent) -> bool {
        let changed = self.controller.handle_event(driver, event);
        self.needs_redraw |= changed;
        changed
    }

    /// Forward a batch of timer events in order
    pub fn handle_events<I>(&mut self, driver: &mut dyn TimingDriver, events: I) -> bool
    where
        I: IntoIterator<Item = TimerEvent>,
    {
        let mut changed = false;
        for event in events {
            changed |= self.handle_event(driver, event);
        }
        changed
    }

    /// Stop the animation and show the final state
    pub fn cancel(&mut self, driver: &mut dyn TimingDriver) -> bool {
        let cancelled = self.controller.cancel(driver);
        self.needs_redraw |= cancelled;
        cancelled
    }

    /// Release all timers; call when the view leaves the render tree
    pub fn teardown(&mut self, driver: &mut dyn TimingDriver) {
        self.controller.teardown(driver);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    pub fn frame(&self) -> Frame {
        produce_frame(&self.controller, &self.checkmark)
    }

    /// Paint the current frame
    pub fn paint(&mut self, ctx: &mut dyn DrawContext) {
        let frame = self.frame();
        paint_frame(ctx, &frame, &self.circle, &self.style);
        self.needs_redraw = false;
    }

    /// Return and clear the redraw request
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn stage(&self) -> AnimationStage {
        self.controller.stage()
    }

    /// Whether a stage is still being driven by `driver`
    pub fn is_running(&self, driver: &dyn TimingDriver) -> bool {
        self.controller.is_running(driver)
    }

    pub fn controller(&self) -> &StageController {
        &self.controller
    }

    pub fn style(&self) -> &CheckringStyle {
        &self.style
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn circle(&self) -> &CircleGeometry {
        &self.circle
    }

    pub fn checkmark(&self) -> &CheckmarkPath {
        &self.checkmark
    }
}

impl Default for SuccessView {
    fn default() -> Self {
        Self::new(CheckringStyle::default())
    }
}
