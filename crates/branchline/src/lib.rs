//! Branchline - timeline diagrams of version-control branches.
//!
//! Branchline turns a JSON description of branches, merges and releases over
//! a span of calendar weeks into a drawing: time runs left to right and every
//! branch keeps one horizontal lane for its whole life.
//!
//! The pipeline is parse, validate, lay out and render. Rendering talks only
//! to the [`draw::DrawingSurface`] trait; [`export::svg::SvgSurface`] is the
//! bundled SVG backend.

pub mod config;
pub mod export;
pub mod layout;
pub mod render;
pub mod structure;
pub mod timeline;

mod error;

pub use branchline_core::{color, draw, geometry, semantic};

pub use error::{BranchlineError, ValidationError};

use log::{debug, info, trace};

use config::AppConfig;
use draw::DrawingSurface;
use export::svg::SvgSurface;
use layout::Layout;
use render::DiagramRenderer;
use structure::Diagram;

/// Builder for parsing, validating and rendering Branchline diagrams.
///
/// # Examples
///
/// ```rust
/// use branchline::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"{
///     "title": "Sprint 12",
///     "start": "2024-03-04T00:00:00Z",
///     "weeks": 4,
///     "width": 800,
///     "height": 300,
///     "branches": [{"name": "main", "start": "2024-03-04T00:00:00Z"}]
/// }"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let spec = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&spec).expect("Failed to render");
/// assert!(svg.contains("Sprint 12"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON description into a [`semantic::DiagramSpec`].
    ///
    /// Only the shape of the input is checked here; branch references are
    /// resolved by [`DiagramBuilder::build`].
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Parse`] carrying the source text when the
    /// JSON is malformed or a required field is missing.
    pub fn parse(&self, source: &str) -> Result<semantic::DiagramSpec, BranchlineError> {
        info!("Parsing diagram");

        let spec: semantic::DiagramSpec = serde_json::from_str(source)
            .map_err(|err| BranchlineError::new_parse_error(err, source))?;

        debug!(branches_count = spec.branches().len(); "Diagram parsed successfully");
        trace!(spec:?; "Parsed diagram");

        Ok(spec)
    }

    /// Validate a description and resolve every branch reference in it.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Validation`] when the description cannot be
    /// drawn: no branches, zero weeks or size, duplicate names, parent cycles,
    /// or merges and releases naming unknown branches.
    pub fn build(&self, spec: &semantic::DiagramSpec) -> Result<Diagram, BranchlineError> {
        info!(title = spec.title(); "Building diagram structure");
        let diagram = Diagram::from_spec(spec)?;
        debug!("Structure built successfully");
        Ok(diagram)
    }

    /// Lay out a diagram and draw it onto `surface`.
    ///
    /// Layout and colors are resolved before the first surface call, so on
    /// error the surface is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Layout`] when the canvas is too small, or
    /// [`BranchlineError::Config`] when a configured color is invalid.
    pub fn draw<S: DrawingSurface + ?Sized>(
        &self,
        diagram: &Diagram,
        surface: &mut S,
    ) -> Result<(), BranchlineError> {
        let layout = Layout::compute(self.config.layout(), diagram)?;
        info!(
            y_offset = layout.y_offset(),
            label_width = layout.label_width();
            "Layout calculated"
        );

        DiagramRenderer::new(diagram, &layout, &self.config)?.render(surface);
        Ok(())
    }

    /// Validate, lay out and render a description to an SVG string.
    ///
    /// # Errors
    ///
    /// Any error of [`DiagramBuilder::build`] or [`DiagramBuilder::draw`].
    pub fn render_svg(&self, spec: &semantic::DiagramSpec) -> Result<String, BranchlineError> {
        let diagram = self.build(spec)?;

        let mut surface = SvgSurface::new();
        self.draw(&diagram, &mut surface)?;
        let svg = surface.into_string()?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
