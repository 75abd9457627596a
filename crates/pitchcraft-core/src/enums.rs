//! Industry tags, display sections, and bullet field names for Pitchcraft.
//!
//! All enums serialize in lowercase via `#[serde(rename_all = "snake_case")]`
//! and parse back from the same string with `FromStr`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

/// Industry category detected from startup text.
///
/// Used only to pick a sample competitor list. The declaration order of
/// [`Industry::ALL`] is the classifier's precedence order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    #[default]
    Tech,
    Health,
    Education,
    Finance,
    Social,
    Ecommerce,
    Sustainability,
}

impl Industry {
    /// Every industry in classifier precedence order.
    pub const ALL: [Self; 7] = [
        Self::Tech,
        Self::Health,
        Self::Education,
        Self::Finance,
        Self::Social,
        Self::Ecommerce,
        Self::Sustainability,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Health => "health",
            Self::Education => "education",
            Self::Finance => "finance",
            Self::Social => "social",
            Self::Ecommerce => "ecommerce",
            Self::Sustainability => "sustainability",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|industry| industry.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownIndustry(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// PitchSection
// ---------------------------------------------------------------------------

/// One display section of a generated pitch.
///
/// Each section can be rendered to copy-ready text with
/// [`GeneratedPitch::section_text`](crate::entities::GeneratedPitch::section_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PitchSection {
    Elevator,
    Tagline,
    Value,
    Slides,
    Competitors,
    Revenue,
}

impl PitchSection {
    /// Sections in display order.
    pub const ALL: [Self; 6] = [
        Self::Elevator,
        Self::Tagline,
        Self::Value,
        Self::Slides,
        Self::Competitors,
        Self::Revenue,
    ];

    /// Stable identifier accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Elevator => "elevator",
            Self::Tagline => "tagline",
            Self::Value => "value",
            Self::Slides => "slides",
            Self::Competitors => "competitors",
            Self::Revenue => "revenue",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Elevator => "Elevator Pitch",
            Self::Tagline => "Tagline",
            Self::Value => "Value Proposition",
            Self::Slides => "Slide Bullets",
            Self::Competitors => "Competitors",
            Self::Revenue => "Revenue Models",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Elevator => "30-second version",
            Self::Tagline => "Memorable slogan",
            Self::Value => "Core business value",
            Self::Slides => "Presentation outline",
            Self::Competitors => "Market landscape",
            Self::Revenue => "Monetization strategies",
        }
    }
}

impl fmt::Display for PitchSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PitchSection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownSection(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// BulletField
// ---------------------------------------------------------------------------

/// One of the four repeatable text lists on the startup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BulletField {
    Problem,
    Solution,
    Target,
    Unique,
}

impl BulletField {
    pub const ALL: [Self; 4] = [Self::Problem, Self::Solution, Self::Target, Self::Unique];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::Target => "target",
            Self::Unique => "unique",
        }
    }
}

impl fmt::Display for BulletField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_parses_case_insensitively() {
        assert_eq!("Health".parse::<Industry>().unwrap(), Industry::Health);
        assert_eq!(" ecommerce ".parse::<Industry>().unwrap(), Industry::Ecommerce);
    }

    #[test]
    fn unknown_industry_is_rejected() {
        let err = "agritech".parse::<Industry>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownIndustry(ref tag) if tag == "agritech"));
    }

    #[test]
    fn industry_order_starts_with_tech() {
        assert_eq!(Industry::ALL[0], Industry::Tech);
        assert_eq!(Industry::default(), Industry::Tech);
        assert_eq!(Industry::ALL[6], Industry::Sustainability);
    }

    #[test]
    fn industry_serializes_as_tag() {
        let json = serde_json::to_string(&Industry::Sustainability).unwrap();
        assert_eq!(json, "\"sustainability\"");
    }

    #[test]
    fn section_ids_round_trip_through_from_str() {
        for section in PitchSection::ALL {
            assert_eq!(section.as_str().parse::<PitchSection>().unwrap(), section);
        }
        assert!("pricing".parse::<PitchSection>().is_err());
    }
}
