//! Splitting raw plan text into section blocks.

/// Literal delimiter between sections.
///
/// There is no escaping: a `---` inside genuine content (a markdown table
/// alignment row, for instance) also splits the text.
pub const SECTION_DELIMITER: &str = "---";

/// Splits raw plan text on [`SECTION_DELIMITER`] into trimmed, non-empty
/// blocks, preserving their order.
pub fn split_sections(raw: &str) -> Vec<&str> {
    raw.split(SECTION_DELIMITER)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
