//! Stylesheet assembly.
//!
//! Joins extracted sections and a trailing block of literal CSS into one
//! output string. Nothing here looks inside the CSS.

/// Separator placed between consecutive parts: exactly one blank line.
pub const PART_SEPARATOR: &str = "\n\n";

/// Join `parts` with one blank line between each, then append `trailing`
/// verbatim after one more blank line.
///
/// Parts are expected to be trimmed already. Empty parts are skipped so the
/// output never begins with, or doubles up, a blank line. When `trailing` is
/// empty the output ends with a single newline instead.
#[must_use]
pub fn assemble<'p, I>(parts: I, trailing: &str) -> String
where
    I: IntoIterator<Item = &'p str>,
{
    let mut output = String::new();
    for part in parts.into_iter().filter(|part| !part.is_empty()) {
        if !output.is_empty() {
            output.push_str(PART_SEPARATOR);
        }
        output.push_str(part);
    }

    if trailing.is_empty() {
        output.push('\n');
    } else {
        if !output.is_empty() {
            output.push_str(PART_SEPARATOR);
        }
        output.push_str(trailing);
    }
    output
}
