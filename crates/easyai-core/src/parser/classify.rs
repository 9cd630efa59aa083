//! Section title extraction and keyword classification.

use crate::models::SectionType;

/// A keyword rule mapping titles to a section type.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Lowercase substrings, any of which selects `kind`
    pub keywords: &'static [&'static str],
    pub kind: SectionType,
}

impl ClassificationRule {
    /// Whether the already-lowercased title contains any keyword.
    pub fn matches(&self, lower_title: &str) -> bool {
        self.keywords.iter().any(|keyword| lower_title.contains(keyword))
    }
}

/// Rules evaluated in order; the first match wins.
///
/// Order matters: "Budget Hotels" must classify as hotels, so the hotel rule
/// precedes the budget rule.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["hotel"],
        kind: SectionType::Hotels,
    },
    ClassificationRule {
        keywords: &["restaurant", "food"],
        kind: SectionType::Restaurants,
    },
    ClassificationRule {
        keywords: &["cost", "budget"],
        kind: SectionType::Budget,
    },
    ClassificationRule {
        keywords: &["transport"],
        kind: SectionType::Transportation,
    },
    ClassificationRule {
        keywords: &["attraction", "places"],
        kind: SectionType::Attractions,
    },
    ClassificationRule {
        keywords: &["weather"],
        kind: SectionType::Weather,
    },
    ClassificationRule {
        keywords: &["activit"],
        kind: SectionType::Activities,
    },
];

impl SectionType {
    /// Classifies a section title, falling back to
    /// [`SectionType::Itinerary`] when no rule matches.
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        CLASSIFICATION_RULES
            .iter()
            .find(|rule| rule.matches(&lower))
            .map_or(SectionType::Itinerary, |rule| rule.kind)
    }
}

/// A block split into its title, type and unparsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBlock {
    pub title: String,
    pub kind: SectionType,

    /// Non-empty lines after the title, joined with `\n`
    pub body: String,
}

/// Strips heading (`#`) and bold (`*`) markers from a title line.
pub fn clean_title(line: &str) -> String {
    line.trim()
        .trim_start_matches('#')
        .trim()
        .trim_matches('*')
        .trim()
        .to_string()
}

/// Extracts title, type and body from one block.
///
/// Returns `None` when the block has no non-empty line.
pub fn classify_block(block: &str) -> Option<ClassifiedBlock> {
    let mut lines = block.lines().filter(|line| !line.trim().is_empty());
    let title = clean_title(lines.next()?);
    let body = lines.collect::<Vec<_>>().join("\n");
    let kind = SectionType::from_title(&title);

    Some(ClassifiedBlock { title, kind, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_classification() {
        let cases = [
            ("Recommended Hotels", SectionType::Hotels),
            ("Local Food", SectionType::Restaurants),
            ("Top Restaurants", SectionType::Restaurants),
            ("Estimated Costs", SectionType::Budget),
            ("Budget Breakdown", SectionType::Budget),
            ("Transportation Tips", SectionType::Transportation),
            ("Public Transport", SectionType::Transportation),
            ("Must-See Attractions", SectionType::Attractions),
            ("Places to Visit", SectionType::Attractions),
            ("Weather Forecast", SectionType::Weather),
            ("Fun Activities", SectionType::Activities),
            ("Activity Ideas", SectionType::Activities),
            ("Day 1: Arrival", SectionType::Itinerary),
        ];
        for (title, expected) in cases {
            assert_eq!(SectionType::from_title(title), expected, "title: {title}");
        }
    }

    #[test]
    fn test_hotel_precedes_budget() {
        assert_eq!(SectionType::from_title("Budget Hotels"), SectionType::Hotels);
    }

    #[test]
    fn test_food_precedes_cost() {
        assert_eq!(
            SectionType::from_title("Food Costs"),
            SectionType::Restaurants
        );
    }

    #[test]
    fn test_unmatched_title_defaults_to_itinerary() {
        assert_eq!(
            SectionType::from_title("Random Notes"),
            SectionType::Itinerary
        );
        assert_eq!(SectionType::from_title(""), SectionType::Itinerary);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(SectionType::from_title("WEATHER"), SectionType::Weather);
    }

    #[test]
    fn test_clean_title_strips_markers() {
        assert_eq!(clean_title("## **Day 1: Arrival**"), "Day 1: Arrival");
        assert_eq!(clean_title("#Hotels"), "Hotels");
        assert_eq!(clean_title("**Budget**"), "Budget");
        assert_eq!(clean_title("  Plain title  "), "Plain title");
    }

    #[test]
    fn test_classify_block_skips_blank_lines() {
        let block = "\n\n### Hotels\n\n- Hilton\n\n- Marriott\n";
        let classified = classify_block(block).unwrap();

        assert_eq!(classified.title, "Hotels");
        assert_eq!(classified.kind, SectionType::Hotels);
        assert_eq!(classified.body, "- Hilton\n- Marriott");
    }

    #[test]
    fn test_classify_block_title_only() {
        let classified = classify_block("Weather").unwrap();
        assert_eq!(classified.kind, SectionType::Weather);
        assert!(classified.body.is_empty());
    }

    #[test]
    fn test_classify_blank_block() {
        assert!(classify_block("").is_none());
        assert!(classify_block("  \n \n").is_none());
    }
}
