//! The reorganization pipeline.
//!
//! Load → Extract (once per section) → Assemble → Persist. Only the middle
//! two stages live here; loading and persisting belong to the caller, which
//! keeps [`reorganize`] free of filesystem access.

use strum_macros::Display;
use tracing::info;

use crate::assemble::assemble;
use crate::component_stylesheet::COMPONENT_CSS;
use crate::error::ReorganizeError;
use crate::section::{SectionSpec, default_sections, extract_sections};

/// A step of the pipeline, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// Reading the input file, template and configuration.
    Load,
    /// Locating the configured sections.
    Extract,
    /// Joining sections and the trailing block.
    Assemble,
    /// Writing the output file.
    Persist,
}

/// What to extract and what to append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Sections to extract, in output order.
    pub sections: Vec<SectionSpec>,
    /// Literal text appended after the sections.
    pub trailing: String,
}

impl Plan {
    /// Create a plan from its sections and trailing text.
    #[must_use]
    pub fn new(sections: Vec<SectionSpec>, trailing: impl Into<String>) -> Self {
        Self {
            sections,
            trailing: trailing.into(),
        }
    }
}

impl Default for Plan {
    /// The stock header / variables / base plan followed by [`COMPONENT_CSS`].
    fn default() -> Self {
        Self::new(default_sections(), COMPONENT_CSS)
    }
}

/// Extract the sections of `plan` from `source` and assemble the output.
///
/// Deterministic: the same source and plan always give the same bytes.
/// Running a plan over its own output is not supported; with the default
/// plan it fails because the closing banner of the base styles is gone.
///
/// # Errors
///
/// Returns a [`ReorganizeError`] if the plan is empty, has duplicate
/// section names, or a section cannot be located.
pub fn reorganize(source: &str, plan: &Plan) -> Result<String, ReorganizeError> {
    let sections = extract_sections(source, &plan.sections)?;
    let output = assemble(sections.iter().map(|section| section.text), &plan.trailing);

    info!(
        sections = sections.len(),
        input_bytes = source.len(),
        output_bytes = output.len(),
        "reorganized stylesheet"
    );
    Ok(output)
}
