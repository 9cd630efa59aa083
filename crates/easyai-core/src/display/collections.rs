//! Collection wrapper for displaying a parsed plan.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::Section;
use crate::parser::parse_plan;

/// Heading shown when a plan produced no sections.
pub const NO_PLAN_TITLE: &str = "No Travel Plan Found";

/// Explanation shown under [`NO_PLAN_TITLE`].
pub const NO_PLAN_MESSAGE: &str =
    "We couldn't parse your travel plan. Please try generating a new one.";

/// Newtype wrapper for displaying the ordered sections of a plan.
///
/// An empty collection renders the explicit "no plan found" state instead of
/// nothing.
///
/// # Examples
///
/// ```rust
/// use easyai_core::display::PlanSections;
///
/// let plan = PlanSections::parse("Weather\n- Sunny");
/// assert_eq!(plan.len(), 1);
/// assert!(plan.to_string().contains("Sunny"));
///
/// let empty = PlanSections::parse("  ");
/// assert!(empty.to_string().contains("No Travel Plan Found"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlanSections(pub Vec<Section>);

impl PlanSections {
    /// Parse raw plan text into sections.
    pub fn parse(raw: &str) -> Self {
        Self(parse_plan(raw))
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of sections in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the section at the given index.
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.0.get(index)
    }

    /// Get an iterator over the sections.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSections {
    type Output = Section;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSections {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "## {NO_PLAN_TITLE}")?;
            writeln!(f)?;
            writeln!(f, "{NO_PLAN_MESSAGE}")
        } else {
            for section in &self.0 {
                if f.alternate() {
                    write!(f, "{section:#}")?;
                } else {
                    write!(f, "{section}")?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionType;

    #[test]
    fn test_empty_plan_renders_no_plan_state() {
        let output = PlanSections::default().to_string();
        assert!(output.contains(NO_PLAN_TITLE));
        assert!(output.contains(NO_PLAN_MESSAGE));
    }

    #[test]
    fn test_alternate_form_uses_icon_labels() {
        let plan = PlanSections::parse("Day 1\n- Louvre\n---\nHotels\n- Ibis");
        let output = format!("{plan:#}");

        assert!(output.contains("## [calendar] Day 1"));
        assert!(output.contains("## [hotel] Hotels"));
    }

    #[test]
    fn test_sections_render_in_order() {
        let plan = PlanSections::parse("Day 1\n- Louvre\n---\nHotels\n- Ibis");
        let output = plan.to_string();

        let day = output.find("Day 1").unwrap();
        let hotels = output.find("Hotels").unwrap();
        assert!(day < hotels);
        assert_eq!(plan[1].kind, SectionType::Hotels);
        assert_eq!(plan.iter().count(), 2);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let plan = PlanSections::parse("Weather\nSunny");
        let json = serde_json::to_value(&plan).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["kind"], "weather");
        assert_eq!(json[0]["body"]["type"], "lines");
        assert_eq!(json[0]["body"]["lines"][0]["type"], "paragraph");
    }
}
