//! Checkring Core
//!
//! Shared primitives for the checkring widget:
//!
//! - **Geometry**: points, sizes, rects and vectors in pixel space
//! - **Color**: linear RGBA colors and solid brushes
//! - **Draw Context**: vector paths, stroke styles and the rendering seam the
//!   widget paints through

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{Brush, Color};
pub use draw::{
    DrawCommand, DrawContext, LineCap, LineJoin, Path, PathCommand, RecordingContext, Stroke,
};
pub use geometry::{Point, Rect, Size, Vec2};
