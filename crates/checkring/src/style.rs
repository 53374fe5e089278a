//! Widget style
//!
//! Three tunables: stroke color, stroke width and per-stage duration. They are
//! read once from a [`StyleConfig`] (typically a TOML table) and resolved into
//! a [`CheckringStyle`] in physical pixels for a given display density.
//!
//! ```toml
//! color = "#C1904B"
//! stroke_width_dp = 5.0
//! duration_ms = 500
//! ```

use crate::controller::DEFAULT_STAGE_DURATION_MS;
use crate::error::StyleError;
use checkring_core::Color;
use serde::{Deserialize, Serialize};

/// Warm amber
pub const DEFAULT_COLOR: &str = "#C1904B";

/// Stroke width in density-independent units
pub const DEFAULT_STROKE_WIDTH_DP: f32 = 5.0;

/// Raw style settings as written by the user
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    pub color: String,
    pub stroke_width_dp: f32,
    pub duration_ms: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            stroke_width_dp: DEFAULT_STROKE_WIDTH_DP,
            duration_ms: DEFAULT_STAGE_DURATION_MS,
        }
    }
}

impl StyleConfig {
    /// Parse a TOML table; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(source)?)
    }

    /// Validate and convert into pixel units for `density`
    pub fn resolve(&self, density: f32) -> Result<CheckringStyle, StyleError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(StyleError::InvalidDensity(density));
        }
        let color = Color::parse_hex(&self.color)
            .ok_or_else(|| StyleError::InvalidColor(self.color.clone()))?;
        if !self.stroke_width_dp.is_finite() || self.stroke_width_dp <= 0.0 {
            return Err(StyleError::InvalidStrokeWidth(self.stroke_width_dp));
        }
        if self.duration_ms == 0 {
            return Err(StyleError::InvalidDuration(self.duration_ms));
        }

        Ok(CheckringStyle {
            color,
            stroke_width: dp_to_px(self.stroke_width_dp, density),
            duration_ms: self.duration_ms,
        })
    }
}

/// Convert density-independent units to whole pixels, rounding half up
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    (dp * density + 0.5).trunc()
}

/// Resolved style in physical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckringStyle {
    pub color: Color,
    /// Stroke width in pixels
    pub stroke_width: f32,
    /// Duration of each stage
    pub duration_ms: u32,
}

impl Default for CheckringStyle {
    /// Defaults at a density of 1.0
    fn default() -> Self {
        Self {
            color: Color::from_hex(0xC1904B),
            stroke_width: DEFAULT_STROKE_WIDTH_DP,
            duration_ms: DEFAULT_STAGE_DURATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let style = StyleConfig::default().resolve(1.0).unwrap();
        assert_eq!(style, CheckringStyle::default());
    }

    #[test]
    fn test_density_scaling() {
        let style = StyleConfig::default().resolve(2.75).unwrap();
        // 5 * 2.75 + 0.5 = 14.25
        assert_eq!(style.stroke_width, 14.0);
        assert_eq!(dp_to_px(5.0, 1.5), 8.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StyleConfig::from_toml_str("duration_ms = 800\n").unwrap();
        assert_eq!(config.duration_ms, 800);
        assert_eq!(config.color, DEFAULT_COLOR);
        assert_eq!(config.stroke_width_dp, DEFAULT_STROKE_WIDTH_DP);
    }

    #[test]
    fn test_full_toml() {
        let config = StyleConfig::from_toml_str(
            r##"
            color = "#FF00AA00"
            stroke_width_dp = 3.0
            duration_ms = 250
            "##,
        )
        .unwrap();
        let style = config.resolve(2.0).unwrap();
        assert_eq!(style.color.a, 1.0);
        assert_eq!(style.color.g, 170.0 / 255.0);
        assert_eq!(style.stroke_width, 6.0);
        assert_eq!(style.duration_ms, 250);
    }

    #[test]
    fn test_malformed_toml() {
        let err = StyleConfig::from_toml_str("duration_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, StyleError::Toml(_)));
    }

    #[test]
    fn test_invalid_values() {
        let bad_color = StyleConfig {
            color: "amber".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            bad_color.resolve(1.0),
            Err(StyleError::InvalidColor(_))
        ));

        let bad_width = StyleConfig {
            stroke_width_dp: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_width.resolve(1.0),
            Err(StyleError::InvalidStrokeWidth(_))
        ));

        let bad_duration = StyleConfig {
            duration_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            bad_duration.resolve(1.0),
            Err(StyleError::InvalidDuration(0))
        ));

        assert!(matches!(
            StyleConfig::default().resolve(0.0),
            Err(StyleError::InvalidDensity(_))
        ));
    }
}
