//! Common types shared by the jsgen crates.
//!
//! - Output newline convention (`NewLineKind`)
//! - Recursion limits for the emitter

// Common types - newline handling shared by options and the source writer
pub mod common;
pub use common::NewLineKind;

// Centralized limits and thresholds
pub mod limits;
