//! Configuration types for Branchline diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from external sources; every field is optional and falls back to
//! the defaults listed below.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Margins, bar heights and marker sizes used by the layout engine.
//! - [`StyleConfig`] - Font and fill colors used by the renderer.
//!
//! # Example
//!
//! ```
//! # use branchline::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().margin(), 5);
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use branchline_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Fixed measurements used to carve the canvas into regions.
///
/// | Key | Default | Meaning |
/// |-----|---------|---------|
/// | `margin` | 5 | Outer border and gap between regions |
/// | `bar_height` | 20 | Height of the title and week bars |
/// | `min_label_width` | 100 | Minimum width of the branch-name column |
/// | `release_height` | 50 | Height of the release label strip |
/// | `release_label_width` | 80 | Width of a release label box |
/// | `arrow_size` | 9 | Arrowhead length, also the gap left before a target lane |
/// | `diamond_size` | 5 | Half-diagonal of the release diamond |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    margin: i32,
    bar_height: i32,
    min_label_width: i32,
    release_height: i32,
    release_label_width: i32,
    arrow_size: i32,
    diamond_size: i32,
}

impl LayoutConfig {
    pub fn margin(&self) -> i32 {
        self.margin
    }

    pub fn bar_height(&self) -> i32 {
        self.bar_height
    }

    pub fn min_label_width(&self) -> i32 {
        self.min_label_width
    }

    pub fn release_height(&self) -> i32 {
        self.release_height
    }

    pub fn release_label_width(&self) -> i32 {
        self.release_label_width
    }

    pub fn arrow_size(&self) -> i32 {
        self.arrow_size
    }

    pub fn diamond_size(&self) -> i32 {
        self.diamond_size
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 5,
            bar_height: 20,
            min_label_width: 100,
            release_height: 50,
            release_label_width: 80,
            arrow_size: 9,
            diamond_size: 5,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are CSS color strings and are only parsed when a diagram is
/// rendered, see [`StyleConfig::week_bar_color`] and friends.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    font_family: String,
    week_bar_color: String,
    week_cell_color: String,
    release_color: String,
    background_color: Option<String>,
    show_regions: bool,
}

impl StyleConfig {
    /// Returns the font family of every label.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the fill of the week-bar cells over the label column.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn week_bar_color(&self) -> Result<Color, String> {
        parse_color("week_bar_color", &self.week_bar_color)
    }

    /// Returns the fill of the per-week cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn week_cell_color(&self) -> Result<Color, String> {
        parse_color("week_cell_color", &self.week_cell_color)
    }

    /// Returns the fill of release diamonds and release label boxes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn release_color(&self) -> Result<Color, String> {
        parse_color("release_color", &self.release_color)
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }

    /// Returns `true` when the layout regions should be outlined for debugging.
    pub fn show_regions(&self) -> bool {
        self.show_regions
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "arial".to_string(),
            week_bar_color: "#79F".to_string(),
            week_cell_color: "#FFF".to_string(),
            release_color: "#FF0".to_string(),
            background_color: None,
            show_regions: false,
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {key} in config: {err}"))
}
