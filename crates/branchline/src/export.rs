//! Export backends for Branchline diagrams.
//!
//! Each backend is a [`DrawingSurface`](branchline_core::draw::DrawingSurface)
//! that collects primitive drawing calls and turns them into an output
//! format once the frame is closed. It is the final stage in the Branchline
//! processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! JSON description
//!     ↓ parse
//! DiagramSpec
//!     ↓ structure
//! Diagram
//!     ↓ layout
//! Layout
//!     ↓ render
//! Surface calls
//!     ↓ export (this module)
//! Output document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgSurface`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering incomplete documents and I/O
//! errors. [`Error`] converts into [`BranchlineError::Export`] at the crate
//! boundary.
//!
//! [`BranchlineError::Export`]: crate::BranchlineError::Export

/// SVG export backend.
pub mod svg;

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// The document could not be produced, described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
