//! Drawing a laid-out diagram onto a [`DrawingSurface`].
//!
//! [`DiagramRenderer`] turns a validated [`Diagram`] and its [`Layout`] into
//! primitive surface calls. All drawing happens inside a single [`Frame`], in
//! this order:
//!
//! 1. background (when configured)
//! 2. one arrow marker per branch type
//! 3. title
//! 4. branches: name label, lead-in, branch point connector, main line
//! 5. merges
//! 6. releases
//! 7. week bars
//! 8. region overlay (when `show_regions` is set)
//!
//! Markers are registered before the first line, so every `marker_end`
//! reference resolves.

use log::{debug, info, trace};

use branchline_core::{
    color::Color,
    draw::{DrawingSurface, Frame, MarkerDefinition, StrokeDefinition, TextDefinition},
    geometry::{Bounds, Point},
    semantic::BranchType,
};

use crate::{
    config::{AppConfig, LayoutConfig},
    error::BranchlineError,
    layout::Layout,
    structure::{Branch, Diagram},
};

const OVERLAY_COLORS: [&str; 5] = ["#000", "#F00", "#0F0", "#00F", "#F0F"];

/// Colors and fonts resolved from [`StyleConfig`](crate::config::StyleConfig).
#[derive(Debug, Clone)]
struct Palette {
    text: TextDefinition,
    week_bar: Color,
    week_cell: Color,
    release: Color,
    background: Option<Color>,
    overlay: Option<Vec<Color>>,
}

impl Palette {
    fn from_config(config: &AppConfig) -> Result<Self, BranchlineError> {
        let style = config.style();

        let overlay = if style.show_regions() {
            let colors = OVERLAY_COLORS
                .iter()
                .map(|color| Color::new(color))
                .collect::<Result<Vec<_>, _>>()
                .map_err(BranchlineError::Config)?;
            Some(colors)
        } else {
            None
        };

        Ok(Self {
            text: TextDefinition::new().with_font_family(style.font_family()),
            week_bar: style.week_bar_color().map_err(BranchlineError::Config)?,
            week_cell: style.week_cell_color().map_err(BranchlineError::Config)?,
            release: style.release_color().map_err(BranchlineError::Config)?,
            background: style.background_color().map_err(BranchlineError::Config)?,
            overlay,
        })
    }
}

/// Draws one diagram with one layout.
#[derive(Debug)]
pub struct DiagramRenderer<'a> {
    diagram: &'a Diagram,
    layout: &'a Layout,
    config: &'a LayoutConfig,
    palette: Palette,
    outline: StrokeDefinition,
}

impl<'a> DiagramRenderer<'a> {
    /// Prepares a renderer, resolving every configured color up front.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Config`] if a configured color does not parse.
    pub fn new(
        diagram: &'a Diagram,
        layout: &'a Layout,
        config: &'a AppConfig,
    ) -> Result<Self, BranchlineError> {
        Ok(Self {
            diagram,
            layout,
            config: config.layout(),
            palette: Palette::from_config(config)?,
            outline: StrokeDefinition::default(),
        })
    }

    /// Issues every drawing call for the diagram, framed by
    /// `begin_frame` / `end_frame`.
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        info!(
            branches_count = self.diagram.branches().len(),
            merges_count = self.diagram.merges().len(),
            releases_count = self.diagram.releases().len();
            "Rendering diagram"
        );

        let mut frame = Frame::begin(surface, self.diagram.width(), self.diagram.height());

        if let Some(background) = self.palette.background {
            frame.rect(self.layout.canvas(), Some(background), None);
        }

        for branch_type in BranchType::ALL {
            frame.define_marker(&MarkerDefinition::arrow(
                branch_type.marker_id(),
                self.config.arrow_size(),
                branch_type.color(),
            ));
        }

        self.draw_title(&mut *frame);
        self.draw_branches(&mut *frame);
        self.draw_merges(&mut *frame);
        self.draw_releases(&mut *frame);
        self.draw_week_bars(&mut *frame);

        if let Some(colors) = &self.palette.overlay {
            self.draw_regions(&mut *frame, colors);
        }

        debug!("Diagram rendered");
    }

    fn lane_y(&self, branch: &Branch) -> i32 {
        self.layout.lane_y(branch.order())
    }

    fn draw_title<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let title = self.layout.title();
        surface.title(self.diagram.title());
        surface.text(
            Point::new(title.center_x(), title.center_y()),
            self.diagram.title(),
            &self.palette.text,
        );
    }

    fn draw_branches<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let lanes = self.layout.branch();
        let label = self.layout.label();
        let timeline = self.diagram.timeline();
        let branches = self.diagram.branches();

        for branch in branches {
            let y = self.lane_y(branch);
            let branch_type = branch.branch_type();
            let stroke = StrokeDefinition::solid(branch_type.color(), 1.0);

            surface.text(
                Point::new(label.center_x(), y),
                branch.name(),
                &self.palette.text.clone().with_color(branch_type.color()),
            );

            let x1 = lanes.x1() + timeline.time_to_x(lanes, branch.start());
            if x1 > lanes.x1() {
                surface.line(
                    Point::new(lanes.x1(), y),
                    Point::new(x1, y),
                    &StrokeDefinition::dashed(Color::default(), 1.0),
                    None,
                );

                if let Some(parent) = branches.parent(branch) {
                    surface.line(
                        Point::new(x1, self.lane_y(parent)),
                        Point::new(x1, y),
                        &stroke,
                        None,
                    );
                }
            }

            let x2 = branch
                .end()
                .map_or(lanes.x2(), |end| lanes.x1() + timeline.time_to_x(lanes, end));

            trace!(branch = branch.name(), x1, x2, y; "Branch line");
            surface.line(
                Point::new(x1, y),
                Point::new(x2 - self.config.arrow_size(), y),
                &stroke,
                Some(branch_type.marker_id().as_str()),
            );
        }
    }

    fn draw_merges<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let lanes = self.layout.branch();
        let branches = self.diagram.branches();
        let clearance = self.config.arrow_size();

        for merge in self.diagram.merges() {
            let from = &branches[merge.from()];
            let to = &branches[merge.to()];

            let y1 = self.lane_y(from);
            let y2 = self.lane_y(to);
            let x = lanes.x1() + self.diagram.timeline().time_to_x(lanes, merge.date());

            // Stop short of the target lane so the arrowhead ends on it
            let y2 = if y2 > y1 { y2 - clearance } else { y2 + clearance };

            trace!(from = from.name(), to = to.name(), x, y1, y2; "Merge line");
            surface.line(
                Point::new(x, y1),
                Point::new(x, y2),
                &StrokeDefinition::dotted(to.branch_type().color(), 1.0),
                Some(to.branch_type().marker_id().as_str()),
            );
        }
    }

    fn draw_releases<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let Some(strip) = self.layout.release() else {
            return;
        };
        let main = self.layout.main();
        let branches = self.diagram.branches();
        let d = self.config.diamond_size();
        let label_width = self.config.release_label_width();

        for release in self.diagram.releases() {
            let branch = &branches[release.branch()];
            let x = strip.x1() + self.diagram.timeline().time_to_x(strip, release.date());
            let y = self.lane_y(branch);

            trace!(release = release.title(), x, y; "Release marker");
            surface.line(
                Point::new(x, main.y1()),
                Point::new(x, main.y2()),
                &StrokeDefinition::dotted(Color::default(), 1.0),
                None,
            );
            surface.polygon(
                &[
                    Point::new(x, y + d),
                    Point::new(x + d, y),
                    Point::new(x, y - d),
                    Point::new(x - d, y),
                ],
                self.palette.release,
                &self.outline,
            );

            let left = x - label_width / 2;
            let label = Bounds::new(left, strip.y1(), left + label_width, strip.y2());
            self.draw_cell(surface, label, release.title(), self.palette.release);
        }
    }

    fn draw_week_bars<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let main = self.layout.main();
        let label = self.layout.label();
        let bar = self.config.bar_height();
        let week_width = self.layout.week_width();

        let top = Bounds::new(label.x1(), main.y1(), label.x2(), main.y1() + bar);
        let bottom = Bounds::new(label.x1(), main.y2() - bar, label.x2(), main.y2());
        surface.rect(top, Some(self.palette.week_bar), Some(&self.outline));
        surface.rect(bottom, Some(self.palette.week_bar), Some(&self.outline));

        for (week, text) in (0..).zip(self.diagram.timeline().week_labels()) {
            let x = main.x1() + week * week_width;
            let top = Bounds::new(x, main.y1(), x + week_width, main.y1() + bar);
            let bottom = Bounds::new(x, main.y2() - bar, x + week_width, main.y2());

            self.draw_cell(surface, top, &text, self.palette.week_cell);
            self.draw_cell(surface, bottom, &text, self.palette.week_cell);
        }
    }

    fn draw_regions<S: DrawingSurface + ?Sized>(&self, surface: &mut S, colors: &[Color]) {
        for (bounds, color) in self.layout.regions().into_iter().zip(colors.iter().cycle()) {
            surface.rect(bounds, None, Some(&StrokeDefinition::solid(*color, 1.0)));
        }
    }

    /// A filled, outlined box with centered text.
    fn draw_cell<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        bounds: Bounds,
        text: &str,
        fill: Color,
    ) {
        surface.rect(bounds, Some(fill), Some(&self.outline));
        surface.text(
            Point::new(bounds.center_x(), bounds.center_y()),
            text,
            &self.palette.text,
        );
    }
}
