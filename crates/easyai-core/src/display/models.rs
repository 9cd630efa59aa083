//! Display implementations for the plan models.
//!
//! Everything formats as markdown so the CLI can hand the output to its
//! terminal renderer unchanged.

use std::fmt;

use crate::models::{ContentLine, Section, SectionBody, SectionType, Table};

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLine::Bullet { text } => write!(f, "- {text}"),
            ContentLine::Numbered { number, text } => write!(f, "{number}. {text}"),
            ContentLine::Paragraph { text } => write!(f, "{text}"),
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String]) -> fmt::Result {
    write!(f, "|")?;
    for cell in cells {
        write!(f, " {cell} |")?;
    }
    writeln!(f)
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.headers.is_empty() && self.rows.is_empty() {
            return Ok(());
        }

        write_row(f, &self.headers)?;

        // Alignment cells avoid `---` so the output never reads as a
        // section delimiter.
        write!(f, "|")?;
        for _ in 0..self.headers.len().max(1) {
            write!(f, ":-|")?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write_row(f, row)?;
        }
        Ok(())
    }
}

/// Markdown for one section. The alternate form (`{:#}`) writes the icon
/// label in brackets instead of the glyph, for terminals without emoji.
impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let presentation = self.kind.presentation();
        if f.alternate() {
            writeln!(f, "## [{}] {}", presentation.label, self.title)?;
        } else {
            writeln!(f, "## {} {}", presentation.icon, self.title)?;
        }
        writeln!(f)?;

        match &self.body {
            SectionBody::Table(table) => write!(f, "{table}")?,
            SectionBody::Lines { lines } => {
                for line in lines {
                    writeln!(f, "{line}")?;
                }
            }
        }

        writeln!(f)
    }
}
