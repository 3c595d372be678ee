//! Configuration types for Sketchline compilation.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so a configuration file only needs to name what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and pipeline settings.
//! - [`CanvasConfig`] - Size of the emitted `<svg>` root.
//! - [`PipelineConfig`] - What happens when a line fails.
//!
//! # Example
//!
//! ```
//! # use sketchline::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 800);
//! assert!(!config.pipeline().continue_on_error());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Pipeline configuration section.
    #[serde(default)]
    pipeline: PipelineConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, pipeline: PipelineConfig) -> Self {
        Self { canvas, pipeline }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the pipeline configuration.
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Override the failure policy, e.g. from a command-line flag.
    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.pipeline.continue_on_error = continue_on_error;
        self
    }
}

/// Dimensions written on the `<svg>` root element.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Failure policy of the line-by-line pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    /// When `false` (the default) the first failing line aborts the run.
    /// When `true` failing lines are skipped and reported as warnings.
    #[serde(default)]
    continue_on_error: bool,
}

impl PipelineConfig {
    pub fn new(continue_on_error: bool) -> Self {
        Self { continue_on_error }
    }

    pub fn continue_on_error(&self) -> bool {
        self.continue_on_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.canvas().width(), 800);
        assert_eq!(config.canvas().height(), 600);
        assert!(!config.pipeline().continue_on_error());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [canvas]
            height = 300

            [pipeline]
            continue_on_error = true
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas().width(), 800);
        assert_eq!(config.canvas().height(), 300);
        assert!(config.pipeline().continue_on_error());
    }

    #[test]
    fn test_flag_override() {
        let config = AppConfig::default().with_continue_on_error(true);

        assert!(config.pipeline().continue_on_error());
    }
}
