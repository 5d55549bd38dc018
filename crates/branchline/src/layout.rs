//! Region layout for branch timeline diagrams.
//!
//! This module carves the canvas into the regions the renderer draws into.
//! Layout is a pure function of the canvas size, the week span, the branch
//! count and whether there are releases; nothing here touches a surface.
//!
//! # Pipeline Position
//!
//! ```text
//! DiagramSpec
//!     ↓ structure
//! Diagram
//!     ↓ layout (this module)
//! Layout
//!     ↓ render
//! DrawingSurface calls
//! ```
//!
//! # Regions
//!
//! ```text
//! +-------------------------- wrapper --------------------------+
//! |                           title                             |
//! |            +--------------- main ---------------------------+
//! |            | week bar                                       |
//! |   label    | branch lanes                                   |
//! |            | release strip (only with releases)             |
//! |            | week bar                                       |
//! +------------+------------------------------------------------+
//! ```

use log::{debug, trace};

use branchline_core::geometry::Bounds;

use crate::{config::LayoutConfig, error::BranchlineError, structure::Diagram};

/// The computed regions of one diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    canvas: Bounds,
    wrapper: Bounds,
    title: Bounds,
    main: Bounds,
    branch: Bounds,
    label: Bounds,
    release: Option<Bounds>,
    label_width: i32,
    week_width: i32,
    y_offset: i32,
}

impl Layout {
    /// Computes the layout of a validated diagram.
    ///
    /// # Errors
    ///
    /// Returns [`BranchlineError::Layout`] when the canvas is too small to hold
    /// the label column, one pixel per day, or one pixel per lane.
    pub fn compute(config: &LayoutConfig, diagram: &Diagram) -> Result<Self, BranchlineError> {
        Self::from_dimensions(
            config,
            diagram.width(),
            diagram.height(),
            diagram.timeline().weeks(),
            diagram.branches().len(),
            !diagram.releases().is_empty(),
        )
    }

    /// Computes a layout from raw dimensions.
    ///
    /// `weeks` and `branch_count` must be positive; [`Diagram`] guarantees both.
    ///
    /// # Errors
    ///
    /// Same as [`Layout::compute`], and also when `weeks` or `branch_count` is zero.
    pub fn from_dimensions(
        config: &LayoutConfig,
        width: u32,
        height: u32,
        weeks: u32,
        branch_count: usize,
        has_releases: bool,
    ) -> Result<Self, BranchlineError> {
        let width = to_pixels("canvas width", width)?;
        let height = to_pixels("canvas height", height)?;
        let weeks = to_pixels("week count", weeks)?;
        let count = i32::try_from(branch_count)
            .map_err(|_| BranchlineError::Layout(format!("too many branches: {branch_count}")))?;
        if weeks == 0 || count == 0 {
            return Err(BranchlineError::Layout(
                "layout needs at least one week and one branch".to_string(),
            ));
        }

        let m = config.margin();
        let bar = config.bar_height();

        let canvas = Bounds::new(0, 0, width, height);
        let wrapper = canvas.adjusted(m, m, -m, -m);
        let title = wrapper.with_height(bar);

        let min_label = config.min_label_width();
        if wrapper.width() <= min_label {
            return Err(BranchlineError::Layout(format!(
                "canvas width {width} leaves no room beside the {min_label}px label column"
            )));
        }

        // Leftover pixels go to the label column so every week column is equally wide
        let label_width = min_label + (wrapper.width() - min_label) % weeks;
        let main = wrapper.adjusted(label_width, title.height() + m, 0, -m);

        // Widened so an oversized week count cannot overflow
        let days = 7 * i64::from(weeks);
        if i64::from(main.width()) < days {
            return Err(BranchlineError::Layout(format!(
                "timeline is {}px wide, need at least {days}px for {weeks} weeks",
                main.width()
            )));
        }

        let mut branch = main.adjusted(0, bar + m, 0, -(bar + m));
        let column = wrapper.with_width(label_width);
        let label = Bounds::new(column.x1(), branch.y1(), column.x2(), branch.y2());

        let release = has_releases.then(|| {
            let release = Bounds::new(
                branch.x1(),
                branch.y2() - config.release_height(),
                branch.x2(),
                branch.y2(),
            );
            branch = branch.adjusted(0, 0, 0, -(config.release_height() + m));
            release
        });

        if branch.height() < count {
            return Err(BranchlineError::Layout(format!(
                "lane region is {}px tall, need at least {count}px for {count} branches",
                branch.height()
            )));
        }

        let y_offset = branch.height() / count;
        let branch = branch.adjusted(0, y_offset / 2, 0, -(y_offset / 2));

        let layout = Self {
            canvas,
            wrapper,
            title,
            main,
            branch,
            label,
            release,
            label_width,
            week_width: main.width() / weeks,
            y_offset,
        };

        debug!(
            label_width,
            y_offset,
            week_width = layout.week_width,
            has_release_region = release.is_some();
            "Layout computed"
        );
        trace!(layout:?; "Layout regions");

        Ok(layout)
    }

    /// Returns the full canvas.
    pub fn canvas(&self) -> Bounds {
        self.canvas
    }

    /// Returns the canvas inset by the outer margin.
    pub fn wrapper(&self) -> Bounds {
        self.wrapper
    }

    pub fn title(&self) -> Bounds {
        self.title
    }

    /// Returns the region holding the week bars, the lanes and the release strip.
    pub fn main(&self) -> Bounds {
        self.main
    }

    /// Returns the lane region, already inset by half a lane at top and bottom.
    pub fn branch(&self) -> Bounds {
        self.branch
    }

    /// Returns the branch-name column to the left of the lanes.
    pub fn label(&self) -> Bounds {
        self.label
    }

    /// Returns the release label strip, present only when the diagram has releases.
    pub fn release(&self) -> Option<Bounds> {
        self.release
    }

    pub fn label_width(&self) -> i32 {
        self.label_width
    }

    /// Returns the width of one week column of the week bars.
    pub fn week_width(&self) -> i32 {
        self.week_width
    }

    /// Returns the vertical distance between neighbouring lanes.
    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    /// Returns the y coordinate of the lane of the branch at 1-based `order`.
    ///
    /// Lanes are `y_offset` apart, starting one offset below the top of
    /// [`Layout::branch`]. The last lane may sit up to half an offset below
    /// the lane region.
    pub fn lane_y(&self, order: usize) -> i32 {
        let order = i32::try_from(order).unwrap_or(i32::MAX);
        self.branch.y1() + order.saturating_mul(self.y_offset)
    }

    /// Returns every region, outermost first, for debug overlays.
    pub fn regions(&self) -> Vec<Bounds> {
        let mut regions = vec![
            self.canvas,
            self.wrapper,
            self.title,
            self.main,
            self.branch,
            self.label,
        ];
        regions.extend(self.release);
        regions
    }
}

fn to_pixels(what: &str, value: u32) -> Result<i32, BranchlineError> {
    i32::try_from(value)
        .map_err(|_| BranchlineError::Layout(format!("{what} {value} is out of range")))
}
