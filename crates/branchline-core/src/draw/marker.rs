//! Line-end marker definitions.

use crate::color::Color;

/// A reusable marker drawn at the end of lines, referenced by id.
///
/// Markers must be registered on a [`DrawingSurface`](super::DrawingSurface)
/// before the first line that references them.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDefinition {
    id: String,
    path: String,
    fill: Color,
    ref_x: i32,
    ref_y: i32,
    width: i32,
    height: i32,
}

impl MarkerDefinition {
    /// Creates a triangular arrowhead pointing along the line direction.
    ///
    /// The triangle is `size` long and `2 * size / 3` wide; a `size` divisible
    /// by 3 keeps the tip on a whole pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use branchline_core::color::Color;
    /// use branchline_core::draw::MarkerDefinition;
    ///
    /// let arrow = MarkerDefinition::arrow("arrow-main", 9, Color::default());
    /// assert_eq!(arrow.path(), "M0,0 L0,6 L9,3 Z");
    /// assert_eq!(arrow.ref_y(), 3);
    /// ```
    pub fn arrow(id: impl Into<String>, size: i32, fill: Color) -> Self {
        Self {
            id: id.into(),
            path: format!("M0,0 L0,{} L{},{} Z", 2 * size / 3, size, size / 3),
            fill,
            ref_x: 0,
            ref_y: size / 3,
            width: size + 1,
            height: size + 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the SVG path data of the marker shape.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn ref_x(&self) -> i32 {
        self.ref_x
    }

    pub fn ref_y(&self) -> i32 {
        self.ref_y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}
