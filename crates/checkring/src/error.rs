//! Style error types

use thiserror::Error;

/// Errors that can occur when loading or resolving a widget style
#[derive(Error, Debug)]
pub enum StyleError {
    /// TOML parsing error
    #[error("style parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Color string is not `#RRGGBB` or `#AARRGGBB`
    #[error("invalid stroke color: {0:?}")]
    InvalidColor(String),

    /// Stroke width must be positive and finite
    #[error("invalid stroke width: {0}")]
    InvalidStrokeWidth(f32),

    /// Stage duration must be at least one millisecond
    #[error("invalid stage duration: {0}ms")]
    InvalidDuration(u32),

    /// Display density must be positive and finite
    #[error("invalid display density: {0}")]
    InvalidDensity(f32),
}
