//! Error types for Branchline operations.
//!
//! This module provides the main error type [`BranchlineError`] which wraps
//! the error conditions that can occur while turning a description into a
//! diagram, and [`ValidationError`] for descriptions that cannot be drawn.

use std::io;

use thiserror::Error;

/// The main error type for Branchline operations.
///
/// Every variant is raised before the first drawing call: a description is
/// either rendered completely or not at all.
#[derive(Debug, Error)]
pub enum BranchlineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {err}")]
    Parse { err: serde_json::Error, src: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl BranchlineError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

impl From<crate::export::Error> for BranchlineError {
    fn from(err: crate::export::Error) -> Self {
        match err {
            crate::export::Error::Io(err) => Self::Io(err),
            err => Self::Export(Box::new(err)),
        }
    }
}

/// A diagram description that is well-formed but cannot be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("diagram has no branches")]
    NoBranches,

    #[error("diagram must span at least one week, got {0}")]
    InvalidWeeks(u32),

    #[error("diagram size {width}x{height} is not positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("branch #{index} has an empty name")]
    EmptyBranchName { index: usize },

    #[error("branch `{0}` is defined more than once")]
    DuplicateBranch(String),

    #[error("merge `{from}` -> `{to}` refers to unknown branch `{branch}`")]
    UnknownMergeBranch {
        branch: String,
        from: String,
        to: String,
    },

    #[error("release `{title}` refers to unknown branch `{branch}`")]
    UnknownReleaseBranch { branch: String, title: String },

    #[error("branch parents form a cycle: {}", .0.join(" -> "))]
    ParentCycle(Vec<String>),
}
