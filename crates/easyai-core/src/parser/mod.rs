//! Travel-plan text parser and section classifier.
//!
//! The parser turns the raw `answer` string of the travel API into an ordered
//! list of [`Section`]s. It is a pure, total function: it performs no I/O,
//! holds no state, and never fails. Malformed input degrades to a fallback
//! representation (paragraph lines, the default section type, or an empty
//! list).
//!
//! ```text
//! raw text ──split_sections──▶ blocks ──classify_block──▶ title, type, body
//!                                                              │
//!                                   ┌── parse_table ◀──────────┘
//!                                   ▼
//!                      Table, or format_lines ──▶ ContentLine*
//! ```
//!
//! # Submodules
//!
//! - [`splitter`]: splitting on the `---` delimiter
//! - [`classify`]: title cleanup and the ordered keyword rule table
//! - [`table`]: pipe-delimited table detection
//! - [`lines`]: bullet / numbered / paragraph line formatting
//!
//! # Example
//!
//! ```rust
//! use easyai_core::{models::SectionType, parser::parse_plan};
//!
//! let sections = parse_plan("## Budget Hotels\n- Ibis\n---\nRandom Notes\n1. Pack");
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[0].kind, SectionType::Hotels);
//! assert_eq!(sections[1].kind, SectionType::Itinerary);
//! ```

pub mod classify;
pub mod lines;
pub mod splitter;
pub mod table;

#[cfg(test)]
mod tests;

pub use classify::{classify_block, ClassificationRule, ClassifiedBlock, CLASSIFICATION_RULES};
pub use lines::{format_line, format_lines};
pub use splitter::{split_sections, SECTION_DELIMITER};
pub use table::parse_table;

use crate::models::{Section, SectionBody};

/// Parses one classified block body into a table or content lines.
fn parse_body(body: &str) -> SectionBody {
    match parse_table(body) {
        Some(table) => SectionBody::Table(table),
        None => SectionBody::Lines {
            lines: format_lines(body),
        },
    }
}

/// Parses raw plan text into ordered sections.
///
/// An empty result is not an error; callers render it as an explicit
/// "no plan found" state.
pub fn parse_plan(raw: &str) -> Vec<Section> {
    split_sections(raw)
        .into_iter()
        .filter_map(classify_block)
        .map(|block| Section {
            body: parse_body(&block.body),
            title: block.title,
            kind: block.kind,
        })
        .collect()
}
