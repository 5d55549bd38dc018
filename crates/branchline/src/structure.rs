//! Resolved diagram structure.
//!
//! Turns the flat, name-referencing records of a
//! [`DiagramSpec`](branchline_core::semantic::DiagramSpec) into a validated
//! [`Diagram`]: branches get their lane order and parent links, merges and
//! releases get resolved branch references.
//!
//! All validation of a description happens here, before any layout or
//! drawing work starts.

mod branches;
mod diagram;

pub use branches::{Branch, Branches};
pub use diagram::{Diagram, MergeEvent, ReleaseEvent};
