//! SVG drawing surface.
//!
//! [`SvgSurface`] buffers every drawing call as an SVG node and assembles the
//! document when the frame ends:
//!
//! ```text
//! <svg width height viewBox>
//!   <title/>
//!   <defs> markers </defs>
//!   body, in call order
//! </svg>
//! ```
//!
//! Marker definitions always land in `<defs>` at the top of the document,
//! regardless of when they were registered.

use std::path::Path;

use log::{debug, warn};
use svg::{
    Document, Node,
    node::{self, element as svg_element},
};

use branchline_core::{
    apply_stroke,
    color::Color,
    draw::{DrawingSurface, MarkerDefinition, StrokeDefinition, TextDefinition},
    geometry::{Bounds, Point},
};

use super::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum FrameState {
    #[default]
    Idle,
    Open,
    Finished,
}

/// A [`DrawingSurface`] producing an SVG document.
///
/// # Examples
///
/// ```
/// use branchline::export::svg::SvgSurface;
/// use branchline_core::draw::{DrawingSurface, StrokeDefinition};
/// use branchline_core::geometry::Point;
///
/// let mut surface = SvgSurface::new();
/// surface.begin_frame(100, 50);
/// surface.line(Point::new(0, 25), Point::new(100, 25), &StrokeDefinition::default(), None);
/// surface.end_frame();
///
/// let svg = surface.into_string().unwrap();
/// assert!(svg.contains("<line"));
/// ```
#[derive(Debug, Default)]
pub struct SvgSurface {
    state: FrameState,
    width: u32,
    height: u32,
    title: Option<String>,
    markers: Vec<svg_element::Marker>,
    body: Vec<Box<dyn Node>>,
    document: Option<Document>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self) -> Result<&Document, Error> {
        self.document
            .as_ref()
            .ok_or_else(|| Error::Render("SVG frame was never ended".to_string()))
    }

    /// Consumes the surface, returning the finished document as markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the frame has not been ended yet.
    pub fn into_string(self) -> Result<String, Error> {
        self.document().map(ToString::to_string)
    }

    /// Writes the finished document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the frame has not been ended yet, or
    /// [`Error::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let document = self.document()?;
        svg::save(path.as_ref(), document).map_err(Error::Io)?;
        debug!(path:? = path.as_ref(); "SVG document saved");
        Ok(())
    }

    fn push(&mut self, what: &str, node: impl Into<Box<dyn Node>>) {
        if self.state == FrameState::Open {
            self.body.push(node.into());
        } else {
            warn!(element = what; "Drawing call outside of an open frame ignored");
        }
    }
}

impl DrawingSurface for SvgSurface {
    fn begin_frame(&mut self, width: u32, height: u32) {
        if self.state != FrameState::Idle {
            warn!("SVG frame restarted, discarding previous content");
        }

        *self = Self {
            state: FrameState::Open,
            width,
            height,
            ..Self::default()
        };
    }

    fn end_frame(&mut self) {
        if self.state != FrameState::Open {
            warn!("SVG frame ended without being open");
            return;
        }

        let mut doc = Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", format!("0 0 {} {}", self.width, self.height));

        if let Some(title) = self.title.take() {
            let mut element = svg_element::Element::new("title");
            element.append(node::Text::new(title));
            doc = doc.add(element);
        }

        if !self.markers.is_empty() {
            let defs = self
                .markers
                .drain(..)
                .fold(svg_element::Definitions::new(), |defs, marker| defs.add(marker));
            doc = doc.add(defs);
        }

        let doc = self.body.drain(..).fold(doc, |doc, node| doc.add(node));

        self.document = Some(doc);
        self.state = FrameState::Finished;
        debug!(width = self.width, height = self.height; "SVG document assembled");
    }

    fn title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn define_marker(&mut self, marker: &MarkerDefinition) {
        let element = svg_element::Marker::new()
            .set("id", marker.id())
            .set("refX", marker.ref_x())
            .set("refY", marker.ref_y())
            .set("markerWidth", marker.width())
            .set("markerHeight", marker.height())
            .set("orient", "auto")
            .set("markerUnits", "strokeWidth")
            .add(
                svg_element::Path::new()
                    .set("d", marker.path())
                    .set("fill", marker.fill().to_string()),
            );
        self.markers.push(element);
    }

    fn rect(&mut self, bounds: Bounds, fill: Option<Color>, stroke: Option<&StrokeDefinition>) {
        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.x1())
            .set("y", bounds.y1())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", fill.map_or_else(|| "none".to_string(), |c| c.to_string()));

        if let Some(stroke) = stroke {
            rect = apply_stroke!(rect, stroke);
        }

        self.push("rect", rect);
    }

    fn text(&mut self, at: Point, content: &str, text: &TextDefinition) {
        let mut element = svg_element::Text::new(content)
            .set("x", at.x())
            .set("y", at.y())
            .set("font-family", text.font_family())
            .set("text-anchor", text.anchor().to_svg_value())
            .set("dominant-baseline", text.baseline().to_svg_value());

        if let Some(color) = text.color() {
            element = element.set("fill", color.to_string());
        }

        self.push("text", element);
    }

    fn line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition, marker_end: Option<&str>) {
        let mut line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        line = apply_stroke!(line, stroke);

        if let Some(marker) = marker_end {
            line = line.set("marker-end", format!("url(#{marker})"));
        }

        self.push("line", line);
    }

    fn polygon(&mut self, points: &[Point], fill: Color, stroke: &StrokeDefinition) {
        let points = points
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");

        let polygon = svg_element::Polygon::new()
            .set("points", points)
            .set("fill", fill.to_string());
        let polygon = apply_stroke!(polygon, stroke);

        self.push("polygon", polygon);
    }
}
