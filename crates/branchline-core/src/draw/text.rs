//! Text label definitions.
//!
//! Labels are placed at an anchor point; [`TextAnchor`] and [`TextBaseline`]
//! decide how the text is aligned around that point.

use crate::color::Color;

/// Horizontal alignment of a label around its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical alignment of a label around its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    #[default]
    Central,
    Hanging,
}

impl TextBaseline {
    /// Returns the SVG `alignment-baseline` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::Central => "central",
            Self::Hanging => "hanging",
        }
    }
}

/// Defines the visual style of a text label.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"arial"` |
/// | Anchor | [`TextAnchor::Middle`] |
/// | Baseline | [`TextBaseline::Central`] |
/// | Color | `None` (surface default, typically black) |
///
/// # Examples
///
/// ```
/// # use branchline_core::draw::{TextAnchor, TextDefinition};
/// # use branchline_core::color::Color;
/// let label = TextDefinition::new()
///     .with_font_family("Helvetica")
///     .with_color(Color::new("red").unwrap());
/// assert_eq!(label.anchor(), TextAnchor::Middle);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    anchor: TextAnchor,
    baseline: TextBaseline,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn baseline(&self) -> TextBaseline {
        self.baseline
    }

    /// Returns the text color, if set.
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "arial".to_string(),
            anchor: TextAnchor::default(),
            baseline: TextBaseline::default(),
            color: None,
        }
    }
}
