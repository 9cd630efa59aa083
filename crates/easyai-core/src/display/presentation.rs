//! Static presentation table mapping section types to an icon and a colour
//! pair.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::SectionType;

/// Terminal colour theme; selects one colour of each accent pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {s}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colour pair: one shade for light terminals, a brighter one for dark ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub light: Rgb,
    pub dark: Rgb,
}

impl Accent {
    pub fn for_theme(&self, theme: Theme) -> Rgb {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

/// How a section type is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Glyph printed in front of the section title
    pub icon: &'static str,

    /// Name of the icon, used instead of the glyph in plain output
    pub label: &'static str,
    pub accent: Accent,
}

const fn accent(light: (u8, u8, u8), dark: (u8, u8, u8)) -> Accent {
    Accent {
        light: Rgb(light.0, light.1, light.2),
        dark: Rgb(dark.0, dark.1, dark.2),
    }
}

const BLUE: Accent = accent((37, 99, 235), (96, 165, 250));
const PURPLE: Accent = accent((147, 51, 234), (192, 132, 252));
const GREEN: Accent = accent((22, 163, 74), (74, 222, 128));
const YELLOW: Accent = accent((202, 138, 4), (250, 204, 21));
const INDIGO: Accent = accent((79, 70, 229), (129, 140, 248));
const RED: Accent = accent((220, 38, 38), (248, 113, 113));
const ORANGE: Accent = accent((234, 88, 12), (251, 146, 60));
const PINK: Accent = accent((219, 39, 119), (244, 114, 182));

impl SectionType {
    /// Presentation descriptor for this section type.
    pub fn presentation(&self) -> Presentation {
        let (icon, label, accent) = match self {
            SectionType::Itinerary => ("📅", "calendar", BLUE),
            SectionType::Hotels => ("🏨", "hotel", PURPLE),
            SectionType::Restaurants => ("🍴", "utensils", GREEN),
            SectionType::Budget => ("💲", "dollar", YELLOW),
            SectionType::Transportation => ("🚗", "car", INDIGO),
            SectionType::Attractions => ("📷", "camera", RED),
            SectionType::Weather => ("☀️", "sun", ORANGE),
            SectionType::Activities => ("🏃", "activity", PINK),
        };
        Presentation {
            icon,
            label,
            accent,
        }
    }
}
