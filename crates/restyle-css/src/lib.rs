//! Marker-based stylesheet reorganization.
//!
//! # Scope
//!
//! This crate implements:
//! - **Section extraction** - locate literal start/end markers and slice out
//!   the text between them, verbatim apart from surrounding whitespace
//! - **Assembly** - join sections and a trailing block with one blank line
//!   between parts
//! - **Component stylesheet** - the built-in trailing block of button, form
//!   and checkbox rules
//! - **Pipeline** - [`reorganize`], a pure function from source text and a
//!   [`Plan`] to output text
//!
//! # Not Implemented
//!
//! - CSS tokenizing or parsing; markers are matched as plain text
//! - Recovery from missing or colliding markers; any missing marker fails
//!   the run

/// Joining sections into an output stylesheet.
pub mod assemble;
/// The built-in trailing block of component rules.
pub mod component_stylesheet;
/// Extraction and reorganization errors.
pub mod error;
/// The extract-then-assemble pipeline.
pub mod pipeline;
/// Marker bounds, section specs and extraction.
pub mod section;

// Re-exports for convenience
pub use assemble::assemble;
pub use component_stylesheet::COMPONENT_CSS;
pub use error::{ExtractError, ReorganizeError};
pub use pipeline::{Plan, Stage, reorganize};
pub use section::{
    Bound, Edge, Section, SectionMap, SectionSpec, default_sections, extract_between,
    extract_section, extract_sections, locate,
};
