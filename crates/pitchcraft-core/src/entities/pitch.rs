use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PitchSection;

/// One monetization strategy from the fixed catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct RevenueModel {
    pub name: String,
    pub description: String,
}

/// Marketing copy derived from one `StartupData`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPitch {
    pub elevator_pitch: String,
    pub tagline: String,
    pub value_proposition: String,
    /// Always 8 entries.
    pub slide_points: Vec<String>,
    /// Always 4 entries.
    pub competitors: Vec<String>,
    /// Always 4 distinct entries.
    pub revenue_models: Vec<RevenueModel>,
}

impl GeneratedPitch {
    /// Copy-ready text for one display section.
    ///
    /// Slides are numbered from 1, competitors and revenue models are
    /// rendered as `•` bullets, one per line.
    #[must_use]
    pub fn section_text(&self, section: PitchSection) -> String {
        match section {
            PitchSection::Elevator => self.elevator_pitch.clone(),
            PitchSection::Tagline => self.tagline.clone(),
            PitchSection::Value => self.value_proposition.clone(),
            PitchSection::Slides => self
                .slide_points
                .iter()
                .enumerate()
                .map(|(idx, point)| format!("{}. {point}", idx + 1))
                .collect::<Vec<_>>()
                .join("\n"),
            PitchSection::Competitors => self
                .competitors
                .iter()
                .map(|name| format!("• {name}"))
                .collect::<Vec<_>>()
                .join("\n"),
            PitchSection::Revenue => self
                .revenue_models
                .iter()
                .map(|model| format!("• {}: {}", model.name, model.description))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> GeneratedPitch {
        GeneratedPitch {
            elevator_pitch: "Acme pitch".into(),
            tagline: "Simplify teams with Acme".into(),
            value_proposition: "Acme delivers".into(),
            slide_points: vec!["Problem: x".into(), "Solution: y".into()],
            competitors: vec!["A".into(), "B".into()],
            revenue_models: vec![RevenueModel {
                name: "Freemium".into(),
                description: "Free basic features with premium paid upgrades".into(),
            }],
        }
    }

    #[test]
    fn slides_are_numbered_from_one() {
        assert_eq!(
            sample().section_text(PitchSection::Slides),
            "1. Problem: x\n2. Solution: y"
        );
    }

    #[test]
    fn competitors_and_revenue_are_bulleted() {
        let pitch = sample();
        assert_eq!(pitch.section_text(PitchSection::Competitors), "• A\n• B");
        assert_eq!(
            pitch.section_text(PitchSection::Revenue),
            "• Freemium: Free basic features with premium paid upgrades"
        );
    }

    #[test]
    fn prose_sections_are_verbatim() {
        let pitch = sample();
        assert_eq!(pitch.section_text(PitchSection::Tagline), pitch.tagline);
        assert_eq!(pitch.section_text(PitchSection::Elevator), pitch.elevator_pitch);
        assert_eq!(pitch.section_text(PitchSection::Value), pitch.value_proposition);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("elevatorPitch").is_some());
        assert!(value.get("valueProposition").is_some());
        assert!(value.get("slidePoints").is_some());
        assert!(value.get("revenueModels").is_some());
    }
}
