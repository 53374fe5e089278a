//! Checkring
//!
//! A two-stage success animation: an arc sweeps around a ring, then a
//! checkmark is drawn inside it.
//!
//! # Components
//!
//! - **Geometry**: ring and checkmark layout derived from the widget bounds
//! - **Sampler**: leading sub-path of the checkmark at a length fraction
//! - **Stage Controller**: the arc/line state machine over a timing driver
//! - **Frame**: the immutable render state for one pass
//! - **Painter**: strokes a frame into a [`checkring_core::DrawContext`]
//! - **Style**: color, stroke width and duration, loadable from TOML
//! - **SuccessView**: the host-facing widget tying it all together

pub mod controller;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod paint;
pub mod sampler;
pub mod style;
pub mod view;

pub use controller::{
    AnimationStage, StageController, ARC_SWEEP_DEGREES, DEFAULT_STAGE_DURATION_MS,
};
pub use error::StyleError;
pub use frame::{produce_frame, Frame};
pub use geometry::{compute_geometry, CheckmarkPath, CircleGeometry, Dimensions, Padding};
pub use paint::{paint_frame, ARC_START_ANGLE};
pub use sampler::{sample_leading_segment, Polyline};
pub use style::{dp_to_px, CheckringStyle, StyleConfig, DEFAULT_COLOR, DEFAULT_STROKE_WIDTH_DP};
pub use view::SuccessView;
