//! Widget geometry
//!
//! Derives everything the widget draws from its pixel bounds: the ring's
//! center, radius and arc oval, and the three-point checkmark polyline.
//! Geometry is a pure function of [`Dimensions`] and is recomputed from
//! scratch on every resize.

use checkring_core::{Path, Point, Rect};

/// Checkmark vertices as fractions of the full (unpadded) width and height
const CHECKMARK_FRACTIONS: [(f32, f32); 3] = [(0.2, 0.5), (0.4, 0.7), (0.8, 0.3)];

/// Padding inside the widget bounds, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Layout input for one layout pass
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub padding: Padding,
    pub stroke_width: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32, stroke_width: f32) -> Self {
        Self {
            width,
            height,
            padding: Padding::ZERO,
            stroke_width,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// The padded content box
    ///
    /// Negative or non-finite inputs are treated as zero, so a degenerate
    /// layout yields an empty box rather than an inverted one.
    pub fn content_rect(&self) -> Rect {
        let width = non_negative(self.width);
        let height = non_negative(self.height);
        let padding = &self.padding;
        Rect::from_ltrb(
            non_negative(padding.left),
            non_negative(padding.top),
            width - non_negative(padding.right),
            height - non_negative(padding.bottom),
        )
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// The ring: center, radius and the oval the sweeping arc is drawn in
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CircleGeometry {
    pub center: Point,
    pub radius: f32,
    pub bounds: Rect,
}

/// The three-point checkmark with its cached arc-length parameterisation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckmarkPath {
    points: [Point; 3],
    /// Arc length from the start to each vertex
    cumulative: [f32; 3],
}

impl CheckmarkPath {
    /// Build the checkmark for a widget of the given full size
    ///
    /// Vertex coordinates are truncated to whole pixels.
    pub fn for_size(width: f32, height: f32) -> Self {
        let width = non_negative(width);
        let height = non_negative(height);
        let points = CHECKMARK_FRACTIONS
            .map(|(fx, fy)| Point::new((width * fx).trunc(), (height * fy).trunc()));
        Self::from_points(points)
    }

    /// Build a checkmark from explicit vertices, measuring it once
    pub fn from_points(points: [Point; 3]) -> Self {
        let first = points[0].distance(points[1]);
        let second = first + points[1].distance(points[2]);
        Self {
            points,
            cumulative: [0.0, first, second],
        }
    }

    /// Start, bend and end vertices
    pub fn points(&self) -> &[Point; 3] {
        &self.points
    }

    /// Arc length from the start to each vertex
    pub fn cumulative_lengths(&self) -> &[f32; 3] {
        &self.cumulative
    }

    /// Total arc length of the polyline
    pub fn total_length(&self) -> f32 {
        self.cumulative[2]
    }

    /// The full checkmark as a strokable path
    pub fn to_path(&self) -> Path {
        Path::polyline(&self.points)
    }
}

/// Compute the ring and checkmark geometry for one layout pass
pub fn compute_geometry(dimensions: &Dimensions) -> (CircleGeometry, CheckmarkPath) {
    let content = dimensions.content_rect();
    let stroke = non_negative(dimensions.stroke_width);

    let radius_x = (content.width() - stroke * 2.0) / 2.0;
    let radius_y = (content.height() - stroke * 2.0) / 2.0;

    let circle = CircleGeometry {
        center: content.center(),
        radius: radius_x.min(radius_y).max(0.0),
        bounds: content.inset(stroke, stroke),
    };
    let checkmark = CheckmarkPath::for_size(dimensions.width, dimensions.height);

    if circle.radius == 0.0 {
        tracing::trace!(
            "compute_geometry: degenerate ring for {}x{} (stroke {})",
            dimensions.width,
            dimensions.height,
            dimensions.stroke_width
        );
    }

    (circle, checkmark)
}
