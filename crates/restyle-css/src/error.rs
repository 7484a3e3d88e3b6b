//! Error types for section extraction and reorganization.

use thiserror::Error;

use crate::pipeline::Stage;
use crate::section::Edge;

/// Failure to locate a single section in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A bound was configured with an empty marker string.
    #[error("{0} marker is empty")]
    EmptyMarker(Edge),

    /// The start marker does not occur anywhere in the text.
    #[error("start marker {marker:?} not found")]
    StartMarkerNotFound {
        /// The marker that was searched for.
        marker: String,
    },

    /// The end marker does not occur after the start marker.
    #[error("end marker {marker:?} not found after start marker")]
    EndMarkerNotFound {
        /// The marker that was searched for.
        marker: String,
    },
}

/// Failure of a whole reorganization run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorganizeError {
    /// A configured section could not be extracted.
    #[error("section `{section}`: {source}")]
    Section {
        /// Name of the section that failed.
        section: String,
        /// What went wrong while locating it.
        #[source]
        source: ExtractError,
    },

    /// Two sections in the plan share a name.
    #[error("duplicate section name `{0}`")]
    DuplicateSection(String),

    /// The plan lists no sections at all.
    #[error("no sections configured")]
    EmptyPlan,
}

impl ReorganizeError {
    /// The pipeline stage this error belongs to.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Section { .. } | Self::DuplicateSection(_) | Self::EmptyPlan => Stage::Extract,
        }
    }
}
