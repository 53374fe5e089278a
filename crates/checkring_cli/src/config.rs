//! Style file handling
//!
//! The style is an optional TOML file with any of `color`, `stroke_width_dp`
//! and `duration_ms`. Missing keys (or a missing file argument) fall back to
//! the widget defaults.

use anyhow::{Context, Result};
use checkring::{CheckringStyle, StyleConfig};
use std::fs;
use std::path::Path;

/// Read the style file, or the defaults if none was given
pub fn load_style_config(path: Option<&Path>) -> Result<StyleConfig> {
    let Some(path) = path else {
        return Ok(StyleConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    StyleConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load and resolve the style for `density`
pub fn load_style(path: Option<&Path>, density: f32) -> Result<CheckringStyle> {
    let config = load_style_config(path)?;
    let style = config
        .resolve(density)
        .with_context(|| format!("Invalid style {:?}", config))?;

    tracing::debug!(
        "Resolved style: color {}, stroke {}px, {}ms per stage",
        config.color,
        style.stroke_width,
        style.duration_ms
    );
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_style(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "checkring-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let style = load_style(None, 1.0).unwrap();
        assert_eq!(style, CheckringStyle::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = temp_style("override", "stroke_width_dp = 2.0\nduration_ms = 300\n");
        let style = load_style(Some(&path), 3.0).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(style.stroke_width, 6.0);
        assert_eq!(style.duration_ms, 300);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("checkring-does-not-exist.toml");
        let err = load_style(Some(&path), 1.0).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let path = temp_style("invalid", "color = \"not a color\"\n");
        let err = load_style(Some(&path), 1.0).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(err.to_string().starts_with("Invalid style"));
    }
}
