//! The abstract drawing surface.
//!
//! A [`DrawingSurface`] is a sequential, append-only sink of drawing
//! primitives. Rendering code only talks to a surface through this trait, so
//! the same layout can be emitted as SVG, recorded for tests, or sent to any
//! other vector backend.
//!
//! Every drawing call must happen between `begin_frame` and `end_frame`, and
//! `end_frame` must be called exactly once. [`Frame`] enforces both by tying
//! the frame to a scope:
//!
//! ```
//! use branchline_core::color::Color;
//! use branchline_core::draw::{
//!     DrawingSurface, Frame, MarkerDefinition, StrokeDefinition, TextDefinition,
//! };
//! use branchline_core::geometry::{Bounds, Point};
//!
//! #[derive(Default)]
//! struct Counter {
//!     calls: usize,
//!     ended: bool,
//! }
//!
//! impl DrawingSurface for Counter {
//!     fn begin_frame(&mut self, _width: u32, _height: u32) {}
//!     fn end_frame(&mut self) {
//!         self.ended = true;
//!     }
//!     fn title(&mut self, _title: &str) {}
//!     fn define_marker(&mut self, _marker: &MarkerDefinition) {}
//!     fn rect(&mut self, _bounds: Bounds, _fill: Option<Color>, _stroke: Option<&StrokeDefinition>) {
//!         self.calls += 1;
//!     }
//!     fn text(&mut self, _at: Point, _content: &str, _text: &TextDefinition) {}
//!     fn line(&mut self, _from: Point, _to: Point, _stroke: &StrokeDefinition, _marker_end: Option<&str>) {}
//!     fn polygon(&mut self, _points: &[Point], _fill: Color, _stroke: &StrokeDefinition) {}
//! }
//!
//! let mut surface = Counter::default();
//! {
//!     let mut frame = Frame::begin(&mut surface, 100, 100);
//!     frame.rect(Bounds::new(0, 0, 10, 10), None, Some(&StrokeDefinition::default()));
//! }
//! assert_eq!(surface.calls, 1);
//! assert!(surface.ended);
//! ```

use std::ops::{Deref, DerefMut};

use log::trace;

use crate::{
    color::Color,
    draw::{MarkerDefinition, StrokeDefinition, TextDefinition},
    geometry::{Bounds, Point},
};

/// A sink for primitive drawing operations.
pub trait DrawingSurface {
    /// Opens the output frame. Precedes every other call.
    fn begin_frame(&mut self, width: u32, height: u32);

    /// Closes the output frame. Called once, after every other call.
    fn end_frame(&mut self);

    /// Sets the document title.
    fn title(&mut self, title: &str);

    /// Registers a marker so later lines can reference it by id.
    fn define_marker(&mut self, marker: &MarkerDefinition);

    /// Draws a rectangle, filled when `fill` is set and outlined when `stroke` is set.
    fn rect(&mut self, bounds: Bounds, fill: Option<Color>, stroke: Option<&StrokeDefinition>);

    /// Draws a text label anchored at `at`.
    fn text(&mut self, at: Point, content: &str, text: &TextDefinition);

    /// Draws a straight line, optionally ending in a registered marker.
    fn line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition, marker_end: Option<&str>);

    /// Draws a closed polygon.
    fn polygon(&mut self, points: &[Point], fill: Color, stroke: &StrokeDefinition);
}

/// Scoped access to a [`DrawingSurface`] with an open frame.
///
/// Creating a `Frame` calls [`DrawingSurface::begin_frame`]; dropping it calls
/// [`DrawingSurface::end_frame`]. The frame dereferences to the surface, so
/// drawing calls go through it directly.
pub struct Frame<'s, S: DrawingSurface + ?Sized> {
    surface: &'s mut S,
}

impl<'s, S: DrawingSurface + ?Sized> Frame<'s, S> {
    /// Opens a frame of the given size on `surface`.
    pub fn begin(surface: &'s mut S, width: u32, height: u32) -> Self {
        trace!(width, height; "Beginning frame");
        surface.begin_frame(width, height);
        Self { surface }
    }
}

impl<S: DrawingSurface + ?Sized> Deref for Frame<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for Frame<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for Frame<'_, S> {
    fn drop(&mut self) {
        self.surface.end_frame();
        trace!("Frame ended");
    }
}

impl<S: DrawingSurface + ?Sized> std::fmt::Debug for Frame<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;

    #[derive(Debug, Default)]
    struct EventLog {
        events: Vec<&'static str>,
    }

    impl DrawingSurface for EventLog {
        fn begin_frame(&mut self, _width: u32, _height: u32) {
            self.events.push("begin");
        }

        fn end_frame(&mut self) {
            self.events.push("end");
        }

        fn title(&mut self, _title: &str) {
            self.events.push("title");
        }

        fn define_marker(&mut self, _marker: &MarkerDefinition) {
            self.events.push("marker");
        }

        fn rect(&mut self, _bounds: Bounds, _fill: Option<Color>, _stroke: Option<&StrokeDefinition>) {
            self.events.push("rect");
        }

        fn text(&mut self, _at: Point, _content: &str, _text: &TextDefinition) {
            self.events.push("text");
        }

        fn line(
            &mut self,
            _from: Point,
            _to: Point,
            _stroke: &StrokeDefinition,
            _marker_end: Option<&str>,
        ) {
            self.events.push("line");
        }

        fn polygon(&mut self, _points: &[Point], _fill: Color, _stroke: &StrokeDefinition) {
            self.events.push("polygon");
        }
    }

    #[test]
    fn test_frame_brackets_drawing_calls() {
        let mut surface = EventLog::default();
        {
            let mut frame = Frame::begin(&mut surface, 10, 10);
            frame.title("t");
            frame.line(
                Point::new(0, 0),
                Point::new(5, 0),
                &StrokeDefinition::default(),
                None,
            );
        }

        assert_eq!(surface.events, vec!["begin", "title", "line", "end"]);
    }

    #[test]
    fn test_frame_ends_on_early_return() {
        fn draw_until_error(surface: &mut EventLog, fail: bool) -> Result<(), String> {
            let mut frame = Frame::begin(surface, 10, 10);
            frame.title("t");
            if fail {
                return Err("stopped".to_string());
            }
            frame.title("after");
            Ok(())
        }

        let mut surface = EventLog::default();
        assert!(draw_until_error(&mut surface, true).is_err());
        assert_eq!(surface.events, vec!["begin", "title", "end"]);
    }

    #[test]
    fn test_frame_ends_on_panic() {
        let mut surface = EventLog::default();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut frame = Frame::begin(&mut surface, 10, 10);
            frame.title("t");
            panic!("drawing failed");
        }));

        assert!(result.is_err());
        assert_eq!(surface.events, vec!["begin", "title", "end"]);
    }
}
