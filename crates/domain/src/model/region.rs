use std::fmt;

use serde::Serialize;

/// Coarse geographic bucket derived from a country name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Asia,
    Oceania,
    Other,
}

impl Region {
    pub const ALL: [Self; 6] = [
        Self::Europe,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Asia,
        Self::Oceania,
        Self::Other,
    ];

    /// Classify a country by exact, case-sensitive name.
    pub fn from_country(country: &str) -> Self {
        match country {
            "Finland" | "Germany" | "France" | "UK" => Self::Europe,
            "USA" | "Canada" => Self::NorthAmerica,
            "Brazil" => Self::SouthAmerica,
            "India" | "Japan" => Self::Asia,
            "Australia" => Self::Oceania,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Asia => "Asia",
            Self::Oceania => "Oceania",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
