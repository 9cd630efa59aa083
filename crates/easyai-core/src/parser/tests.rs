use super::*;
use crate::models::{ContentLine, SectionType, Table};

const SAMPLE_PLAN: &str = "\
## **Day 1: Arrival in Paris**
1. Check in at the hotel
2. Evening walk along the Seine
- Try a crepe
---
### Recommended Hotels
| Hotel | Area | Price |
|:--|:--|:--|
| Le Marais Inn | Marais | $180 |
| Hotel Lumiere | Latin Quarter | $150 |
---
**Estimated Budget**
Flights and hotels take most of the budget.
- Food: $60/day
---

---
Weather
Mild and sunny, around 22C.
";

fn bullet(text: &str) -> ContentLine {
    ContentLine::Bullet {
        text: text.to_string(),
    }
}

fn numbered(number: &str, text: &str) -> ContentLine {
    ContentLine::Numbered {
        number: number.to_string(),
        text: text.to_string(),
    }
}

fn paragraph(text: &str) -> ContentLine {
    ContentLine::Paragraph {
        text: text.to_string(),
    }
}

#[test]
fn test_parse_full_plan() {
    let sections = parse_plan(SAMPLE_PLAN);
    assert_eq!(sections.len(), 4);

    let day = &sections[0];
    assert_eq!(day.title, "Day 1: Arrival in Paris");
    assert_eq!(day.kind, SectionType::Itinerary);
    assert_eq!(
        day.body,
        SectionBody::Lines {
            lines: vec![
                numbered("1", "Check in at the hotel"),
                numbered("2", "Evening walk along the Seine"),
                bullet("Try a crepe"),
            ]
        }
    );

    let hotels = &sections[1];
    assert_eq!(hotels.title, "Recommended Hotels");
    assert_eq!(hotels.kind, SectionType::Hotels);
    let table = hotels.body.as_table().expect("hotels should be a table");
    assert_eq!(table.headers, vec!["Hotel", "Area", "Price"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["Hotel Lumiere", "Latin Quarter", "$150"]);

    let budget = &sections[2];
    assert_eq!(budget.title, "Estimated Budget");
    assert_eq!(budget.kind, SectionType::Budget);
    assert_eq!(
        budget.body.lines(),
        &[
            paragraph("Flights and hotels take most of the budget."),
            bullet("Food: $60/day"),
        ]
    );

    assert_eq!(sections[3].kind, SectionType::Weather);
}

#[test]
fn test_parse_is_idempotent() {
    assert_eq!(parse_plan(SAMPLE_PLAN), parse_plan(SAMPLE_PLAN));
}

#[test]
fn test_delimiter_splits_into_two_sections() {
    let sections = parse_plan("A\n---\nB");

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "A");
    assert_eq!(sections[1].title, "B");
    assert!(sections[0].body.lines().is_empty());
}

#[test]
fn test_empty_input_yields_no_sections() {
    assert!(parse_plan("").is_empty());
    assert!(parse_plan("   ").is_empty());
    assert!(parse_plan("---\n---\n \n---").is_empty());
}

#[test]
fn test_budget_hotels_classifies_as_hotels() {
    let sections = parse_plan("Budget Hotels\n- Hostel One");
    assert_eq!(sections[0].kind, SectionType::Hotels);
}

#[test]
fn test_random_notes_defaults_to_itinerary() {
    let sections = parse_plan("Random Notes\nBring an umbrella");
    assert_eq!(sections[0].kind, SectionType::Itinerary);
}

#[test]
fn test_single_pipe_line_falls_back_to_lines() {
    let sections = parse_plan("Costs\nHotel | $100\n- Food");

    assert_eq!(
        sections[0].body,
        SectionBody::Lines {
            lines: vec![paragraph("Hotel | $100"), bullet("Food")]
        }
    );
}

#[test]
fn test_two_pipe_lines_yield_table_without_rows() {
    let sections = parse_plan("Costs\nItem | Price\n:-: | :-:");

    assert_eq!(
        sections[0].body,
        SectionBody::Table(Table {
            headers: vec!["Item".to_string(), "Price".to_string()],
            rows: vec![],
        })
    );
}

#[test]
fn test_table_body_ignores_non_pipe_lines() {
    let sections = parse_plan("Transport\nOptions:\nMode|Cost\n:-|:-\nMetro|$2");
    let table = sections[0].body.as_table().unwrap();

    assert_eq!(sections[0].kind, SectionType::Transportation);
    assert_eq!(table.rows, vec![vec!["Metro".to_string(), "$2".to_string()]]);
}

#[test]
fn test_dash_alignment_row_collides_with_delimiter() {
    // `---` has no escaping, so a classic alignment row breaks the section.
    let sections = parse_plan("Hotels\nName|Price\n---|---\nIbis|$80");

    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].title, "Hotels");
    assert_eq!(sections[0].body.lines(), &[paragraph("Name|Price")]);
    assert_eq!(sections[1].title, "|");
    assert_eq!(sections[2].title, "Ibis|$80");
}
