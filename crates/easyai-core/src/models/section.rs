//! Section, table and content-line models produced by the plan parser.

use serde::{Deserialize, Serialize};

use super::SectionType;

/// One titled, typed block of a travel plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// First non-empty line of the block with heading and bold markers
    /// stripped
    pub title: String,

    /// Category derived from the title
    pub kind: SectionType,

    /// Remaining lines, either as a table or as formatted content lines
    pub body: SectionBody,
}

/// Body of a section: a detected table, or line-based content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionBody {
    Table(Table),
    Lines { lines: Vec<ContentLine> },
}

impl SectionBody {
    /// Returns the table when the body was recognized as one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            SectionBody::Table(table) => Some(table),
            SectionBody::Lines { .. } => None,
        }
    }

    /// Returns the content lines when the body is not a table.
    pub fn lines(&self) -> &[ContentLine] {
        match self {
            SectionBody::Table(_) => &[],
            SectionBody::Lines { lines } => lines,
        }
    }
}

/// A pipe-delimited table found inside a section body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,

    /// Data rows; the alignment row under the headers is never included
    pub rows: Vec<Vec<String>>,
}

/// One formatted line of a non-table section body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentLine {
    /// Line that started with `"- "`
    Bullet { text: String },

    /// Line that started with `<digits>.`; the digits are kept as written
    Numbered { number: String, text: String },

    /// Any other non-empty line, kept verbatim
    Paragraph { text: String },
}

impl ContentLine {
    /// Display text of the line without its list marker.
    pub fn text(&self) -> &str {
        match self {
            ContentLine::Bullet { text }
            | ContentLine::Numbered { text, .. }
            | ContentLine::Paragraph { text } => text,
        }
    }
}
