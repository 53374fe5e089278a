//! Render state
//!
//! A [`Frame`] is the complete, immutable description of one render pass. It
//! is derived from the controller's stage and progress plus the current
//! checkmark geometry, and is consumed once by the painter.

use crate::controller::{AnimationStage, StageController};
use crate::geometry::CheckmarkPath;
use crate::sampler::{sample_leading_segment, Polyline};

/// What to draw for one render pass
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub stage: AnimationStage,
    /// Sweep of the partial arc in degrees, while the arc stage runs
    pub arc_sweep: Option<f32>,
    /// Visible part of the checkmark
    pub line: Option<Polyline>,
    /// Whether the completed ring is drawn
    pub circle_visible: bool,
}

impl Frame {
    /// Derive the frame for `stage` at `progress`
    pub fn produce(stage: AnimationStage, progress: f32, checkmark: &CheckmarkPath) -> Self {
        let (arc_sweep, line, circle_visible) = match stage {
            AnimationStage::Idle => (None, None, false),
            AnimationStage::ArcRunning => (Some(progress), None, false),
            AnimationStage::ArcDone => (None, None, true),
            AnimationStage::LineRunning => {
                let sub = sample_leading_segment(checkmark, checkmark.total_length(), progress);
                (None, Some(sub), true)
            }
            AnimationStage::LineDone => {
                let full = Polyline::from_points(checkmark.points());
                (None, Some(full), true)
            }
        };

        Self {
            stage,
            arc_sweep,
            line,
            circle_visible,
        }
    }

    /// Whether nothing at all should be drawn
    pub fn is_empty(&self) -> bool {
        self.arc_sweep.is_none() && self.line.is_none() && !self.circle_visible
    }
}

/// Frame for the controller's current state
pub fn produce_frame(controller: &StageController, checkmark: &CheckmarkPath) -> Frame {
    Frame::produce(controller.stage(), controller.progress(), checkmark)
}
