//! Semantic model of a branch timeline description.
//!
//! These types mirror the input description as it arrives from storage: flat
//! records that refer to each other by branch *name*. Nothing here is
//! resolved or validated; see `branchline::structure` for the resolved form.
//!
//! All records implement [`serde::Deserialize`]. Timestamps are RFC 3339
//! strings (`"2024-03-04T09:00:00Z"`).
//!
//! # Example
//!
//! ```
//! use branchline_core::semantic::{BranchSpec, BranchType, DiagramSpec, Merge};
//! use chrono::{TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
//! let diagram = DiagramSpec::new("Sprint 12", start, 4, 900, 400)
//!     .with_branch(BranchSpec::new("main", start))
//!     .with_branch(
//!         BranchSpec::new("login", start + chrono::Duration::days(3))
//!             .with_parent("main")
//!             .with_type(BranchType::Feature),
//!     )
//!     .with_merge(Merge::new(start + chrono::Duration::days(10), "login", "main"));
//!
//! assert_eq!(diagram.branches().len(), 2);
//! ```

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::color::Color;

/// The role of a branch, which decides its color and arrow marker.
///
/// The set is closed; any type string outside it deserializes as
/// [`BranchType::Unknown`] and renders like [`BranchType::Main`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum BranchType {
    #[default]
    Main,
    Feature,
    Release,
    ReleaseLive,
    Unknown,
}

impl BranchType {
    /// Every branch type, in marker registration order.
    pub const ALL: [BranchType; 5] = [
        Self::Feature,
        Self::Main,
        Self::Release,
        Self::ReleaseLive,
        Self::Unknown,
    ];

    /// Returns the type name used in input files and marker ids.
    pub fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Feature => "feature",
            Self::Release => "release",
            Self::ReleaseLive => "release-live",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the CSS color name lines and labels of this type are drawn in.
    pub fn color_name(self) -> &'static str {
        match self {
            Self::Main | Self::Unknown => "black",
            Self::Feature => "red",
            Self::Release => "green",
            Self::ReleaseLive => "purple",
        }
    }

    /// Returns the display [`Color`] of this type.
    pub fn color(self) -> Color {
        Color::new(self.color_name()).expect("branch type colors are valid CSS names")
    }

    /// Returns the id of the arrow marker drawn at the end of lines of this type.
    pub fn marker_id(self) -> String {
        format!("arrow-{}", self.name())
    }
}

impl FromStr for BranchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "feature" => Ok(Self::Feature),
            "release" => Ok(Self::Release),
            "release-live" => Ok(Self::ReleaseLive),
            _ => Err(format!(
                "invalid branch type `{s}`, valid values: main, feature, release, release-live"
            )),
        }
    }
}

impl From<String> for BranchType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw branch record.
///
/// `parent` names another branch of the same description; an empty name
/// means the branch is a root. `end` is absent while the branch is still open.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BranchSpec {
    name: String,
    #[serde(default)]
    parent: String,
    #[serde(alias = "created")]
    start: DateTime<Utc>,
    #[serde(default)]
    end: Option<DateTime<Utc>>,
    #[serde(default, rename = "type")]
    branch_type: BranchType,
}

impl BranchSpec {
    /// Creates an open root branch of type [`BranchType::Main`].
    pub fn new(name: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            parent: String::new(),
            start,
            end: None,
            branch_type: BranchType::default(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = parent.into();
        self
    }

    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_type(mut self, branch_type: BranchType) -> Self {
        self.branch_type = branch_type;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent name, empty for root branches.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn branch_type(&self) -> BranchType {
        self.branch_type
    }
}

/// A point in time where branch `from` merges into branch `to`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Merge {
    date: DateTime<Utc>,
    from: String,
    to: String,
}

impl Merge {
    pub fn new(date: DateTime<Utc>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            date,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

/// A deployment marker anchored to the lane of branch `from`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    date: DateTime<Utc>,
    from: String,
    title: String,
    #[serde(default)]
    description: String,
}

impl Release {
    pub fn new(date: DateTime<Utc>, from: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            date,
            from: from.into(),
            title: title.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The complete, already deserialized diagram description.
///
/// `start` anchors the calendar, `weeks` is the span shown and `width` /
/// `height` are the canvas size in pixels. Branch order is significant: it
/// is the lane order of the rendered diagram.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiagramSpec {
    title: String,
    start: DateTime<Utc>,
    weeks: u32,
    width: u32,
    height: u32,
    branches: Vec<BranchSpec>,
    #[serde(default)]
    merges: Vec<Merge>,
    #[serde(default)]
    releases: Vec<Release>,
}

impl DiagramSpec {
    /// Creates a description without branches, merges or releases.
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Utc>,
        weeks: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            title: title.into(),
            start,
            weeks,
            width,
            height,
            branches: Vec::new(),
            merges: Vec::new(),
            releases: Vec::new(),
        }
    }

    pub fn with_branch(mut self, branch: BranchSpec) -> Self {
        self.branches.push(branch);
        self
    }

    pub fn with_merge(mut self, merge: Merge) -> Self {
        self.merges.push(merge);
        self
    }

    pub fn with_release(mut self, release: Release) -> Self {
        self.releases.push(release);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn branches(&self) -> &[BranchSpec] {
        &self.branches
    }

    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_branch_type_from_str() {
        assert_eq!("main".parse::<BranchType>().unwrap(), BranchType::Main);
        assert_eq!(
            "feature".parse::<BranchType>().unwrap(),
            BranchType::Feature
        );
        assert_eq!(
            "release".parse::<BranchType>().unwrap(),
            BranchType::Release
        );
        assert_eq!(
            "release-live".parse::<BranchType>().unwrap(),
            BranchType::ReleaseLive
        );

        let result = "hotfix".parse::<BranchType>();
        assert!(result.unwrap_err().contains("invalid branch type"));
    }

    #[test]
    fn test_branch_type_colors() {
        assert_eq!(BranchType::Main.color_name(), "black");
        assert_eq!(BranchType::Feature.color_name(), "red");
        assert_eq!(BranchType::Release.color_name(), "green");
        assert_eq!(BranchType::ReleaseLive.color_name(), "purple");
        assert_eq!(BranchType::Unknown.color_name(), "black");

        for branch_type in BranchType::ALL {
            // Every entry of the table must parse
            let _ = branch_type.color();
        }
    }

    #[test]
    fn test_branch_type_marker_ids_are_unique() {
        let mut ids: Vec<_> = BranchType::ALL.iter().map(|t| t.marker_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BranchType::ALL.len());
        assert_eq!(BranchType::ReleaseLive.marker_id(), "arrow-release-live");
    }

    #[test]
    fn test_deserialize_diagram() {
        let json = r#"{
            "title": "Q1",
            "start": "2024-01-01T00:00:00Z",
            "weeks": 6,
            "width": 900,
            "height": 500,
            "branches": [
                {"name": "main", "start": "2024-01-01T00:00:00Z"},
                {"name": "feat", "parent": "main", "created": "2024-01-04T00:00:00Z",
                 "end": "2024-01-20T00:00:00Z", "type": "feature"},
                {"name": "odd", "start": "2024-01-02T00:00:00Z", "type": "hotfix"}
            ],
            "merges": [{"date": "2024-01-20T00:00:00Z", "from": "feat", "to": "main"}],
            "releases": [{"date": "2024-01-22T00:00:00Z", "from": "main", "title": "v1"}]
        }"#;

        let diagram: DiagramSpec = serde_json::from_str(json).unwrap();
        assert_eq!(diagram.title(), "Q1");
        assert_eq!(diagram.weeks(), 6);
        assert_eq!(diagram.branches().len(), 3);

        let main = &diagram.branches()[0];
        assert_eq!(main.parent(), "");
        assert_eq!(main.end(), None);
        assert_eq!(main.branch_type(), BranchType::Main);

        let feat = &diagram.branches()[1];
        assert_eq!(feat.parent(), "main");
        assert_eq!(
            feat.start(),
            Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap()
        );
        assert_eq!(
            feat.end(),
            Some(Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap())
        );
        assert_eq!(feat.branch_type(), BranchType::Feature);

        assert_eq!(diagram.branches()[2].branch_type(), BranchType::Unknown);

        assert_eq!(diagram.merges()[0].from(), "feat");
        assert_eq!(diagram.merges()[0].to(), "main");
        assert_eq!(diagram.releases()[0].title(), "v1");
        assert_eq!(diagram.releases()[0].description(), "");
    }

    #[test]
    fn test_deserialize_missing_required_field() {
        let json = r#"{"title": "x", "start": "2024-01-01T00:00:00Z", "weeks": 2, "width": 10}"#;
        assert!(serde_json::from_str::<DiagramSpec>(json).is_err());
    }
}
