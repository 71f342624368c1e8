//! Title truncation for calendar entry labels

use crate::constants::{MAX_TITLE_LENGTH, TITLE_TRUNCATE_SUFFIX};

/// Truncate post content into a calendar label.
///
/// Collapses the first line of `content` to at most
/// [`MAX_TITLE_LENGTH`] characters, appending [`TITLE_TRUNCATE_SUFFIX`]
/// when anything was cut. Counts characters, not bytes, so multibyte
/// content never splits mid-codepoint.
pub fn truncate_title(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("").trim();
    let truncated_at_newline = first_line.len() < content.trim().len();

    if !truncated_at_newline && first_line.chars().count() <= MAX_TITLE_LENGTH {
        return first_line.to_string();
    }

    let mut title: String = first_line.chars().take(MAX_TITLE_LENGTH).collect();
    title.push_str(TITLE_TRUNCATE_SUFFIX);
    title
}
