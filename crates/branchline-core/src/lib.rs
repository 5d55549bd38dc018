//! Branchline Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Branchline
//! layout engine and its renderers. It includes:
//!
//! - **Geometry**: The integer rectangle used to carve diagram regions ([`geometry::Bounds`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Semantic**: The deserialized diagram description ([`semantic`] module)
//! - **Draw**: Stroke/text/marker definitions and the drawing surface ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
