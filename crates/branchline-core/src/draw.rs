//! Drawing vocabulary and the abstract drawing surface.
//!
//! The layout engine never emits markup itself. It describes what to draw with
//! the definitions in this module and hands primitives to a [`DrawingSurface`].
//!
//! - [`StrokeDefinition`] / [`StrokeStyle`]: line color, width and dash pattern
//! - [`TextDefinition`]: font, anchor and baseline of a text label
//! - [`MarkerDefinition`]: reusable line-end markers (arrowheads)
//! - [`DrawingSurface`]: the sink receiving primitive drawing calls
//! - [`Frame`]: scoped access to a surface between `begin_frame` and `end_frame`

mod marker;
mod stroke;
mod surface;
mod text;

pub use marker::MarkerDefinition;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use surface::{DrawingSurface, Frame};
pub use text::{TextAnchor, TextBaseline, TextDefinition};
