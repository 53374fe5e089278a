//! Frame painting
//!
//! Turns a [`Frame`] into stroke calls on a [`DrawContext`]. The ring (partial
//! arc or full circle) is stroked with round caps and joins; the checkmark uses
//! the plain stroke.

use crate::frame::Frame;
use crate::geometry::CircleGeometry;
use crate::style::CheckringStyle;
use checkring_core::{DrawContext, LineCap, LineJoin, Path, Stroke};

/// Where the sweeping arc starts, in degrees clockwise from the positive x axis
pub const ARC_START_ANGLE: f32 = 180.0;

/// Stroke `frame` into `ctx`
pub fn paint_frame(
    ctx: &mut dyn DrawContext,
    frame: &Frame,
    circle: &CircleGeometry,
    style: &CheckringStyle,
) {
    if frame.is_empty() {
        return;
    }

    let ring_stroke = Stroke::new(style.stroke_width)
        .with_cap(LineCap::Round)
        .with_join(LineJoin::Round);

    if let Some(sweep) = frame.arc_sweep {
        let arc = Path::arc(circle.bounds, ARC_START_ANGLE, sweep);
        if !arc.is_empty() {
            ctx.stroke_path(&arc, &ring_stroke, style.color.into());
        }
        return;
    }

    if frame.circle_visible {
        let ring = Path::circle(circle.center, circle.radius);
        ctx.stroke_path(&ring, &ring_stroke, style.color.into());
    }

    if let Some(line) = frame.line.as_ref().filter(|line| !line.is_empty()) {
        let line_stroke = Stroke::new(style.stroke_width);
        ctx.stroke_path(&line.to_path(), &line_stroke, style.color.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::AnimationStage;
    use crate::geometry::{compute_geometry, CheckmarkPath, Dimensions};
    use checkring_core::{Brush, PathCommand, RecordingContext};

    fn setup() -> (CircleGeometry, CheckmarkPath, CheckringStyle, RecordingContext) {
        let (circle, checkmark) = compute_geometry(&Dimensions::new(100.0, 100.0, 5.0));
        let ctx = RecordingContext::new();
        (circle, checkmark, CheckringStyle::default(), ctx)
    }

    fn stroked_paths(ctx: &RecordingContext) -> Vec<(&Path, &Stroke)> {
        ctx.commands()
            .iter()
            .map(|cmd| (&cmd.path, &cmd.stroke))
            .collect()
    }

    #[test]
    fn test_idle_paints_nothing() {
        let (circle, checkmark, style, mut ctx) = setup();
        let frame = Frame::produce(AnimationStage::Idle, 0.0, &checkmark);
        paint_frame(&mut ctx, &frame, &circle, &style);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_arc_stage_strokes_arc_only() {
        let (circle, checkmark, style, mut ctx) = setup();
        let frame = Frame::produce(AnimationStage::ArcRunning, -90.0, &checkmark);
        paint_frame(&mut ctx, &frame, &circle, &style);

        let paths = stroked_paths(&ctx);
        assert_eq!(paths.len(), 1);
        let (arc, stroke) = paths[0];
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.width, 5.0);
        assert!(matches!(arc.commands()[1], PathCommand::ArcTo { sweep: false, .. }));
    }

    #[test]
    fn test_zero_sweep_paints_nothing() {
        let (circle, checkmark, style, mut ctx) = setup();
        let frame = Frame::produce(AnimationStage::ArcRunning, 0.0, &checkmark);
        paint_frame(&mut ctx, &frame, &circle, &style);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_done_paints_ring_and_checkmark() {
        let (circle, checkmark, style, mut ctx) = setup();
        let frame = Frame::produce(AnimationStage::LineDone, 1.0, &checkmark);
        paint_frame(&mut ctx, &frame, &circle, &style);

        let paths = stroked_paths(&ctx);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].0, &Path::circle(circle.center, circle.radius));
        assert_eq!(paths[1].0, &checkmark.to_path());
        assert_eq!(paths[1].1.cap, LineCap::Butt);

        for cmd in ctx.commands() {
            assert_eq!(cmd.brush, Brush::Solid(style.color));
        }
    }

    #[test]
    fn test_line_start_paints_ring_only() {
        let (circle, checkmark, style, mut ctx) = setup();
        let frame = Frame::produce(AnimationStage::LineRunning, 0.0, &checkmark);
        paint_frame(&mut ctx, &frame, &circle, &style);
        assert_eq!(stroked_paths(&ctx).len(), 1);
    }
}
