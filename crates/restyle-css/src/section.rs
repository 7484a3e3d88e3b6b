//! Marker-based section extraction.
//!
//! A section is a contiguous span of the source text delimited by a start
//! and an end [`Bound`]. Each bound is a literal marker plus a flag saying
//! whether the marker text itself belongs to the section. A missing start
//! bound means "from the beginning of the text"; a missing end bound means
//! "to the end of the text".
//!
//! Extracted sections borrow from the source, so the bytes of a section are
//! exactly the bytes of the input with surrounding whitespace trimmed.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::debug;

use restyle_common::warning::warn_once;

use crate::error::{ExtractError, ReorganizeError};

/// Marker that opens the custom property block.
pub const VARIABLES_MARKER: &str = ":root {";
/// Banner comment that opens the base styles.
pub const BASE_STYLES_MARKER: &str = "/* ===== BASE STYLES ===== */";
/// Banner comment that opens the layout components.
pub const LAYOUT_COMPONENTS_MARKER: &str = "/* ===== LAYOUT COMPONENTS ===== */";

/// Which side of a section a bound sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Edge {
    /// The opening bound.
    Start,
    /// The closing bound.
    End,
}

/// One side of a section: a literal marker and whether it is part of the
/// section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bound {
    /// Literal text to search for. Must be non-empty.
    pub marker: String,
    /// `true` if the marker text is included in the section.
    #[serde(default = "default_inclusive")]
    pub inclusive: bool,
}

const fn default_inclusive() -> bool {
    true
}

impl Bound {
    /// A bound whose marker text belongs to the section.
    #[must_use]
    pub fn inclusive(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            inclusive: true,
        }
    }

    /// A bound whose marker text is left out of the section.
    #[must_use]
    pub fn exclusive(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            inclusive: false,
        }
    }
}

/// A named section to extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Name used to address the section and to report failures.
    pub name: String,
    /// Opening bound, or `None` for the beginning of the text.
    #[serde(default)]
    pub start: Option<Bound>,
    /// Closing bound, or `None` for the end of the text.
    #[serde(default)]
    pub end: Option<Bound>,
}

impl SectionSpec {
    /// Create a section spec from its name and bounds.
    #[must_use]
    pub fn new(name: impl Into<String>, start: Option<Bound>, end: Option<Bound>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }
}

/// The stock plan: everything before `:root {` is the header, the custom
/// property block runs up to the base styles banner, and the base styles run
/// up to the layout components banner.
#[must_use]
pub fn default_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec::new("header", None, Some(Bound::exclusive(VARIABLES_MARKER))),
        SectionSpec::new(
            "variables",
            Some(Bound::inclusive(VARIABLES_MARKER)),
            Some(Bound::exclusive(BASE_STYLES_MARKER)),
        ),
        SectionSpec::new(
            "base",
            Some(Bound::inclusive(BASE_STYLES_MARKER)),
            Some(Bound::exclusive(LAYOUT_COMPONENTS_MARKER)),
        ),
    ]
}

/// An extracted section, borrowing from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Name from the spec that produced this section.
    pub name: &'a str,
    /// The trimmed section text.
    pub text: &'a str,
    /// Byte range of `text` within the source.
    pub range: Range<usize>,
}

/// Extracted sections in plan order, addressable by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap<'a> {
    sections: Vec<Section<'a>>,
}

impl<'a> SectionMap<'a> {
    /// Look up a section by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Section<'a>> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Iterate over the sections in plan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section<'a>> {
        self.sections.iter()
    }

    /// Number of extracted sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no sections were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'s, 'a> IntoIterator for &'s SectionMap<'a> {
    type Item = &'s Section<'a>;
    type IntoIter = std::slice::Iter<'s, Section<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

/// Return the text from the first occurrence of `start` through the first
/// occurrence of `end` after it, both markers included, trimmed.
///
/// The search for `end` begins right after the start marker, so a marker
/// can never close its own section.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyMarker`] if either marker is empty, and
/// [`ExtractError::StartMarkerNotFound`] / [`ExtractError::EndMarkerNotFound`]
/// if a marker is missing.
pub fn extract_between<'a>(text: &'a str, start: &str, end: &str) -> Result<&'a str, ExtractError> {
    let range = find_range(text, Some((start, true)), Some((end, true)))?;
    Ok(&text[range])
}

/// Find the byte range of the section described by `spec`.
///
/// # Errors
///
/// Returns an [`ExtractError`] if a marker is empty or cannot be found.
pub fn locate(text: &str, spec: &SectionSpec) -> Result<Range<usize>, ExtractError> {
    find_range(
        text,
        spec.start.as_ref().map(|b| (b.marker.as_str(), b.inclusive)),
        spec.end.as_ref().map(|b| (b.marker.as_str(), b.inclusive)),
    )
}

/// Extract a single section described by `spec`.
///
/// # Errors
///
/// Returns [`ReorganizeError::Section`] naming the section if a marker is
/// empty or cannot be found.
pub fn extract_section<'a>(text: &'a str, spec: &'a SectionSpec) -> Result<Section<'a>, ReorganizeError> {
    let range = locate(text, spec).map_err(|source| ReorganizeError::Section {
        section: spec.name.clone(),
        source,
    })?;

    if let Some(start) = &spec.start {
        let occurrences = text.matches(start.marker.as_str()).count();
        if occurrences > 1 {
            warn_once(
                "extract",
                &format!(
                    "start marker {:?} of section `{}` occurs {occurrences} times; using the first",
                    start.marker, spec.name
                ),
            );
        }
    }

    debug!(section = %spec.name, start = range.start, end = range.end, "extracted section");

    Ok(Section {
        name: &spec.name,
        text: &text[range.clone()],
        range,
    })
}

/// Extract every section in `specs`, in order.
///
/// Stops at the first failure.
///
/// # Errors
///
/// Returns [`ReorganizeError::EmptyPlan`] if `specs` is empty,
/// [`ReorganizeError::DuplicateSection`] if two specs share a name, and
/// [`ReorganizeError::Section`] if any section cannot be located.
pub fn extract_sections<'a>(text: &'a str, specs: &'a [SectionSpec]) -> Result<SectionMap<'a>, ReorganizeError> {
    if specs.is_empty() {
        return Err(ReorganizeError::EmptyPlan);
    }

    let mut sections: Vec<Section<'a>> = Vec::with_capacity(specs.len());
    for spec in specs {
        if sections.iter().any(|section| section.name == spec.name) {
            return Err(ReorganizeError::DuplicateSection(spec.name.clone()));
        }
        sections.push(extract_section(text, spec)?);
    }

    Ok(SectionMap { sections })
}

/// Resolve optional `(marker, inclusive)` bounds to a trimmed byte range.
///
/// # Algorithm
///
/// STEP 1: Find the start marker. The section begins at the marker if the
/// bound is inclusive, right after it otherwise. With no start bound the
/// section begins at offset 0.
///
/// STEP 2: Search for the end marker from just past the start marker. The
/// section ends after the marker if the bound is inclusive, right before it
/// otherwise. With no end bound the section ends at the end of the text.
///
/// STEP 3: Shrink the range to drop leading and trailing whitespace.
fn find_range(
    text: &str,
    start: Option<(&str, bool)>,
    end: Option<(&str, bool)>,
) -> Result<Range<usize>, ExtractError> {
    if start.is_some_and(|(marker, _)| marker.is_empty()) {
        return Err(ExtractError::EmptyMarker(Edge::Start));
    }
    if end.is_some_and(|(marker, _)| marker.is_empty()) {
        return Err(ExtractError::EmptyMarker(Edge::End));
    }

    // STEP 1
    let (begin, search_from) = match start {
        None => (0, 0),
        Some((marker, inclusive)) => {
            let at = text
                .find(marker)
                .ok_or_else(|| ExtractError::StartMarkerNotFound {
                    marker: marker.to_string(),
                })?;
            let after = at + marker.len();
            (if inclusive { at } else { after }, after)
        }
    };

    // STEP 2
    let finish = match end {
        None => text.len(),
        Some((marker, inclusive)) => {
            let at = text[search_from..]
                .find(marker)
                .map(|offset| search_from + offset)
                .ok_or_else(|| ExtractError::EndMarkerNotFound {
                    marker: marker.to_string(),
                })?;
            if inclusive { at + marker.len() } else { at }
        }
    };

    // STEP 3
    // begin <= search_from <= finish
    let raw = &text[begin..finish];
    let trimmed_start = begin + (raw.len() - raw.trim_start().len());
    Ok(trimmed_start..trimmed_start + raw.trim().len())
}
