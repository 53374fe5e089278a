//! Draw Context - Rendering Seam
//!
//! The widget never rasterizes anything itself. It describes what to draw as
//! stroked vector [`Path`]s and hands them to a [`DrawContext`], which the
//! host implements on top of its real rendering surface.
//!
//! [`RecordingContext`] keeps every stroke as a [`DrawCommand`] so headless
//! hosts and tests can inspect exactly what would have been drawn.
//!
//! # Example
//!
//! ```
//! use checkring_core::{Color, DrawContext, Path, Point, RecordingContext, Stroke};
//!
//! let mut ctx = RecordingContext::new();
//! let ring = Path::circle(Point::new(50.0, 50.0), 45.0);
//! ctx.stroke_path(&ring, &Stroke::new(5.0), Color::BLACK.into());
//! assert_eq!(ctx.commands().len(), 1);
//! ```

use crate::color::Brush;
use crate::geometry::{Point, Rect, Vec2};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// How open path ends are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Ends exactly at the endpoint
    #[default]
    Butt,
    /// Half-disc past the endpoint
    Round,
}

/// How consecutive segments meet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Sharp corner
    #[default]
    Miter,
    /// Rounded corner
    Round,
}

/// Stroke width plus end and corner styles
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Stroke {
    /// Plain stroke of `width`: butt caps, miter joins
    pub fn new(width: f32) -> Self {
        Self {
            width,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// A single path segment
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// SVG elliptical arc; `sweep` is true for clockwise (y down)
    ArcTo {
        radii: Vec2,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

/// A vector path built from [`PathCommand`]s
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn cubic_to(self, control1: Point, control2: Point, end: Point) -> Self {
        self.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        })
    }

    /// Elliptical arc from the current point to `end`
    pub fn arc_to(self, radii: Vec2, clockwise: bool, end: Point) -> Self {
        self.push(PathCommand::ArcTo {
            radii,
            rotation: 0.0,
            large_arc: false,
            sweep: clockwise,
            end,
        })
    }

    pub fn close(self) -> Self {
        self.push(PathCommand::Close)
    }

    fn push(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Closed circle made of four cubic quarter arcs, starting at 0 degrees
    pub fn circle(center: Point, radius: f32) -> Self {
        // Control point offset for a quarter circle
        const KAPPA: f32 = 0.552_284_8;
        let (cx, cy, r) = (center.x, center.y, radius);
        let k = r * KAPPA;

        Self::new()
            .move_to(cx + r, cy)
            .cubic_to(
                Point::new(cx + r, cy + k),
                Point::new(cx + k, cy + r),
                Point::new(cx, cy + r),
            )
            .cubic_to(
                Point::new(cx - k, cy + r),
                Point::new(cx - r, cy + k),
                Point::new(cx - r, cy),
            )
            .cubic_to(
                Point::new(cx - r, cy - k),
                Point::new(cx - k, cy - r),
                Point::new(cx, cy - r),
            )
            .cubic_to(
                Point::new(cx + k, cy - r),
                Point::new(cx + r, cy - k),
                Point::new(cx + r, cy),
            )
            .close()
    }

    /// Open polyline through `points`; empty for no points
    pub fn polyline(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new();
        };
        rest.iter()
            .fold(Self::new().move_to(first.x, first.y), |path, p| {
                path.line_to(p.x, p.y)
            })
    }

    /// Elliptical arc inscribed in `oval`
    ///
    /// Angles are in degrees, measured clockwise from the positive x axis
    /// (screen space, y down). A positive `sweep_deg` runs clockwise, a
    /// negative one counter-clockwise. The arc is emitted as SVG arc segments
    /// of at most 180 degrees each so full turns stay unambiguous.
    pub fn arc(oval: Rect, start_deg: f32, sweep_deg: f32) -> Self {
        if sweep_deg == 0.0 || !sweep_deg.is_finite() {
            return Self::new();
        }

        let center = oval.center();
        let radii = Vec2::new(oval.width() / 2.0, oval.height() / 2.0);
        let point_at = |deg: f32| {
            let rad = deg.to_radians();
            Point::new(center.x + radii.x * rad.cos(), center.y + radii.y * rad.sin())
        };

        let segments = (sweep_deg.abs() / 180.0).ceil().max(1.0) as usize;
        let step = sweep_deg / segments as f32;
        let start = point_at(start_deg);

        (1..=segments).fold(Self::new().move_to(start.x, start.y), |path, i| {
            path.arc_to(radii, sweep_deg > 0.0, point_at(start_deg + step * i as f32))
        })
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The rendering surface the widget strokes into
pub trait DrawContext {
    /// Stroke `path` with `stroke` and `brush`
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// One recorded stroke
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub path: Path,
    pub stroke: Stroke,
    pub brush: Brush,
}

/// A draw context that keeps every stroke in call order
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes recorded since the last [`clear`](Self::clear)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for RecordingContext {
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand {
            path: path.clone(),
            stroke: stroke.clone(),
            brush,
        });
    }
}
