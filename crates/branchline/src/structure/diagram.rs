//! The validated diagram aggregate.

use chrono::{DateTime, Utc};
use log::{debug, trace};

use branchline_core::semantic::DiagramSpec;

use super::Branches;
use crate::{error::ValidationError, timeline::Timeline};

/// A merge whose endpoints resolved to branch positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    date: DateTime<Utc>,
    from: usize,
    to: usize,
}

impl MergeEvent {
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the position of the source branch in [`Diagram::branches`].
    pub fn from(&self) -> usize {
        self.from
    }

    /// Returns the position of the target branch in [`Diagram::branches`].
    pub fn to(&self) -> usize {
        self.to
    }
}

/// A release anchored to a resolved branch position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEvent {
    date: DateTime<Utc>,
    branch: usize,
    title: String,
    description: String,
}

impl ReleaseEvent {
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the position of the branch the release is cut from.
    pub fn branch(&self) -> usize {
        self.branch
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A diagram description that passed validation and is ready for layout.
///
/// Every branch reference inside a `Diagram` is known to resolve, the week
/// span is positive and the canvas has a non-zero size.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    timeline: Timeline,
    width: u32,
    height: u32,
    branches: Branches,
    merges: Vec<MergeEvent>,
    releases: Vec<ReleaseEvent>,
}

impl Diagram {
    /// Validates `spec` and resolves every branch reference in it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an empty week span, a zero-sized canvas,
    /// a description without branches, any branch resolution failure, or a
    /// merge or release naming a branch that does not exist.
    pub fn from_spec(spec: &DiagramSpec) -> Result<Self, ValidationError> {
        let timeline = Timeline::new(spec.start(), spec.weeks())
            .ok_or(ValidationError::InvalidWeeks(spec.weeks()))?;

        if spec.width() == 0 || spec.height() == 0 {
            return Err(ValidationError::InvalidDimensions {
                width: spec.width(),
                height: spec.height(),
            });
        }

        if spec.branches().is_empty() {
            return Err(ValidationError::NoBranches);
        }

        let branches = Branches::resolve(spec.branches())?;

        let position = |name: &str| branches.get(name).map(|branch| branch.order() - 1);

        let merges = spec
            .merges()
            .iter()
            .map(|merge| {
                let unknown = |branch: &str| ValidationError::UnknownMergeBranch {
                    branch: branch.to_string(),
                    from: merge.from().to_string(),
                    to: merge.to().to_string(),
                };
                let from = position(merge.from()).ok_or_else(|| unknown(merge.from()))?;
                let to = position(merge.to()).ok_or_else(|| unknown(merge.to()))?;

                let event = MergeEvent {
                    date: merge.date(),
                    from,
                    to,
                };
                trace!(merge:? = event; "Resolved merge");
                Ok(event)
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let releases = spec
            .releases()
            .iter()
            .map(|release| {
                let branch = position(release.from()).ok_or_else(|| {
                    ValidationError::UnknownReleaseBranch {
                        branch: release.from().to_string(),
                        title: release.title().to_string(),
                    }
                })?;

                Ok(ReleaseEvent {
                    date: release.date(),
                    branch,
                    title: release.title().to_string(),
                    description: release.description().to_string(),
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        debug!(
            branches_count = branches.len(),
            merges_count = merges.len(),
            releases_count = releases.len();
            "Diagram validated"
        );

        Ok(Self {
            title: spec.title().to_string(),
            timeline,
            width: spec.width(),
            height: spec.height(),
            branches,
            merges,
            releases,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the calendar window the diagram spans.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Returns the canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn branches(&self) -> &Branches {
        &self.branches
    }

    pub fn merges(&self) -> &[MergeEvent] {
        &self.merges
    }

    pub fn releases(&self) -> &[ReleaseEvent] {
        &self.releases
    }
}
