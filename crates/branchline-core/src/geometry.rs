//! Integer geometry for diagram regions.
//!
//! Branchline diagrams are laid out on a whole-pixel grid. Regions are
//! [`Bounds`], axis-aligned rectangles described by their top-left and
//! bottom-right corners; single positions are [`Point`]s.
//!
//! All construction operators return a *new* [`Bounds`]; a value is never
//! mutated once it has been built.
//!
//! # Example
//!
//! ```
//! use branchline_core::geometry::Bounds;
//!
//! let canvas = Bounds::new(0, 0, 800, 600);
//! let inner = canvas.adjusted(5, 5, -5, -5);
//! let header = inner.with_height(20);
//!
//! assert_eq!(inner.width(), 790);
//! assert_eq!(header.y2(), 25);
//! assert_eq!(header.center_x(), 400);
//! ```

/// A position on the pixel grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }
}

/// An axis-aligned integer rectangle.
///
/// `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right corner.
/// Zero-area rectangles are allowed. A rectangle with `x2 < x1` (or `y2 < y1`)
/// is not rejected either; it simply reports a negative width (or height).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Bounds {
    /// Creates a rectangle from its top-left and bottom-right corners.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns the left edge.
    pub fn x1(self) -> i32 {
        self.x1
    }

    /// Returns the top edge.
    pub fn y1(self) -> i32 {
        self.y1
    }

    /// Returns the right edge.
    pub fn x2(self) -> i32 {
        self.x2
    }

    /// Returns the bottom edge.
    pub fn y2(self) -> i32 {
        self.y2
    }

    pub fn width(self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(self) -> i32 {
        self.y2 - self.y1
    }

    /// Horizontal center, rounded towards the left edge.
    pub fn center_x(self) -> i32 {
        self.x1 + self.width() / 2
    }

    /// Vertical center, rounded towards the top edge.
    pub fn center_y(self) -> i32 {
        self.y1 + self.height() / 2
    }

    /// Returns a rectangle sharing the top-left corner with the given width.
    pub fn with_width(self, width: i32) -> Self {
        Self {
            x2: self.x1 + width,
            ..self
        }
    }

    /// Returns a rectangle sharing the top-left corner with the given height.
    pub fn with_height(self, height: i32) -> Self {
        Self {
            y2: self.y1 + height,
            ..self
        }
    }

    /// Returns a rectangle with every edge shifted independently.
    ///
    /// Positive values move an edge right (x) or down (y), so an inset of `m`
    /// on all sides is `adjusted(m, m, -m, -m)`.
    pub fn adjusted(self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Self {
        Self {
            x1: self.x1 + dx1,
            y1: self.y1 + dy1,
            x2: self.x2 + dx2,
            y2: self.y2 + dy2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_dimensions() {
        let bounds = Bounds::new(10, 20, 110, 70);
        assert_eq!(bounds.width(), 100);
        assert_eq!(bounds.height(), 50);
        assert_eq!(bounds.center_x(), 60);
        assert_eq!(bounds.center_y(), 45);
    }

    #[test]
    fn test_bounds_center_rounds_down() {
        let bounds = Bounds::new(0, 0, 5, 3);
        assert_eq!(bounds.center_x(), 2);
        assert_eq!(bounds.center_y(), 1);
    }

    #[test]
    fn test_bounds_with_width_and_height() {
        let bounds = Bounds::new(5, 5, 795, 595);

        let narrow = bounds.with_width(100);
        assert_eq!(narrow, Bounds::new(5, 5, 105, 595));

        let header = bounds.with_height(20);
        assert_eq!(header, Bounds::new(5, 5, 795, 25));

        // The source rectangle is untouched
        assert_eq!(bounds, Bounds::new(5, 5, 795, 595));
    }

    #[test]
    fn test_bounds_adjusted() {
        let bounds = Bounds::new(0, 0, 800, 600);
        let inset = bounds.adjusted(5, 5, -5, -5);
        assert_eq!(inset, Bounds::new(5, 5, 795, 595));
        assert_eq!(inset.width(), 790);
        assert_eq!(inset.height(), 590);
    }

    #[test]
    fn test_bounds_inverted_is_permitted() {
        let bounds = Bounds::new(10, 10, 20, 20).adjusted(0, 0, -15, 0);
        assert_eq!(bounds.width(), -5);
        assert_eq!(bounds.center_x(), 7);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (-1000i32..1000, -1000i32..1000, 0i32..2000, 0i32..2000)
            .prop_map(|(x, y, w, h)| Bounds::new(x, y, x + w, y + h))
    }

    fn delta_strategy() -> impl Strategy<Value = i32> {
        -500i32..500
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Adjusting the horizontal edges changes the width by exactly their difference.
    fn check_adjusted_width(
        bounds: Bounds,
        dx1: i32,
        dy1: i32,
        dx2: i32,
        dy2: i32,
    ) -> Result<(), TestCaseError> {
        let adjusted = bounds.adjusted(dx1, dy1, dx2, dy2);
        prop_assert_eq!(adjusted.width(), bounds.width() + dx2 - dx1);
        prop_assert_eq!(adjusted.height(), bounds.height() + dy2 - dy1);
        Ok(())
    }

    /// Fixed-size variants keep the top-left corner.
    fn check_with_size_keeps_origin(bounds: Bounds, size: i32) -> Result<(), TestCaseError> {
        let wide = bounds.with_width(size);
        prop_assert_eq!((wide.x1(), wide.y1()), (bounds.x1(), bounds.y1()));
        prop_assert_eq!(wide.width(), size);
        prop_assert_eq!(wide.height(), bounds.height());

        let tall = bounds.with_height(size);
        prop_assert_eq!((tall.x1(), tall.y1()), (bounds.x1(), bounds.y1()));
        prop_assert_eq!(tall.height(), size);
        prop_assert_eq!(tall.width(), bounds.width());
        Ok(())
    }

    /// The center always lies within a non-inverted rectangle.
    fn check_center_is_inside(bounds: Bounds) -> Result<(), TestCaseError> {
        prop_assert!(bounds.center_x() >= bounds.x1() && bounds.center_x() <= bounds.x2());
        prop_assert!(bounds.center_y() >= bounds.y1() && bounds.center_y() <= bounds.y2());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn adjusted_width(
            bounds in bounds_strategy(),
            dx1 in delta_strategy(),
            dy1 in delta_strategy(),
            dx2 in delta_strategy(),
            dy2 in delta_strategy(),
        ) {
            check_adjusted_width(bounds, dx1, dy1, dx2, dy2)?;
        }

        #[test]
        fn with_size_keeps_origin(bounds in bounds_strategy(), size in 0i32..2000) {
            check_with_size_keeps_origin(bounds, size)?;
        }

        #[test]
        fn center_is_inside(bounds in bounds_strategy()) {
            check_center_is_inside(bounds)?;
        }
    }
}
