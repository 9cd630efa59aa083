//! Line-level formatting for non-table section bodies.

use crate::models::ContentLine;

const BULLET_PREFIX: &str = "- ";

/// Splits `<digits>.<rest>` into the digit run and `rest` with leading
/// whitespace removed.
fn split_numbered(line: &str) -> Option<(&str, &str)> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }

    let (number, rest) = line.split_at(digits_end);
    let text = rest.strip_prefix('.')?;
    Some((number, text.trim_start()))
}

/// Classifies one already-trimmed, non-empty line.
pub fn format_line(line: &str) -> ContentLine {
    if let Some(text) = line.strip_prefix(BULLET_PREFIX) {
        return ContentLine::Bullet {
            text: text.to_string(),
        };
    }

    if let Some((number, text)) = split_numbered(line) {
        return ContentLine::Numbered {
            number: number.to_string(),
            text: text.to_string(),
        };
    }

    ContentLine::Paragraph {
        text: line.to_string(),
    }
}

/// Formats every non-empty line of a body, trimming each first.
pub fn format_lines(body: &str) -> Vec<ContentLine> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(format_line)
        .collect()
}
