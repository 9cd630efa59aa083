//! Section type enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of categories a plan section can be classified into.
///
/// The category only drives presentation; it never changes how the section
/// body is parsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    /// Day-by-day plan; also the fallback when no keyword matches
    #[default]
    Itinerary,
    Hotels,
    Restaurants,
    Activities,
    Transportation,
    Budget,
    Weather,
    Attractions,
}

impl SectionType {
    /// All section types, in declaration order.
    pub const ALL: [SectionType; 8] = [
        SectionType::Itinerary,
        SectionType::Hotels,
        SectionType::Restaurants,
        SectionType::Activities,
        SectionType::Transportation,
        SectionType::Budget,
        SectionType::Weather,
        SectionType::Attractions,
    ];

    /// Lowercase string representation, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Itinerary => "itinerary",
            SectionType::Hotels => "hotels",
            SectionType::Restaurants => "restaurants",
            SectionType::Activities => "activities",
            SectionType::Transportation => "transportation",
            SectionType::Budget => "budget",
            SectionType::Weather => "weather",
            SectionType::Attractions => "attractions",
        }
    }
}

impl FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        SectionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| format!("Invalid section type: {s}"))
    }
}
