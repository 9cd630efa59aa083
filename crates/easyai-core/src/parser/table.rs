//! Pipe-delimited table detection.

use crate::models::Table;

/// Minimum number of pipe-containing lines for a body to count as a table.
const MIN_TABLE_LINES: usize = 2;

/// Splits a table line on `|`, trimming cells and dropping empty ones.
fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

/// Detects and parses a table in a section body.
///
/// The first pipe-containing line supplies the headers. The second is
/// assumed to be the alignment row and is skipped unconditionally, whatever
/// it contains. Every following pipe-containing line becomes a row. Lines
/// without a pipe are ignored.
///
/// Returns `None` when fewer than two lines contain a pipe.
pub fn parse_table(body: &str) -> Option<Table> {
    let table_lines: Vec<&str> = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| line.contains('|'))
        .collect();

    if table_lines.len() < MIN_TABLE_LINES {
        return None;
    }

    let headers = split_cells(table_lines[0]);
    let rows = table_lines[MIN_TABLE_LINES..]
        .iter()
        .map(|line| split_cells(line))
        .collect();

    Some(Table { headers, rows })
}
