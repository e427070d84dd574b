//! Hierarchical section numbering for bookspine divisions.
//!
//! The compilation pipeline walks each division's headings in document order
//! and needs two labels per heading: a stable cross-reference anchor
//! (`"3-2-1"`) and a localized display prefix (`"3.2.1. "`, `"Chapter 3. "`).
//! This crate owns that bookkeeping: a per-division [`SectionCounter`] driven
//! by the traversal, the [`Division`] metadata it reads, and nothing else —
//! parsing, rendering, and file handling live with their own collaborators.

pub mod counter;
pub mod division;

// Re-export key types for easier usage
pub use counter::SectionCounter;
pub use division::{Division, DivisionKind};
