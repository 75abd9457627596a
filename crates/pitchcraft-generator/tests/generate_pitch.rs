//! End-to-end properties of a generation call.

use std::collections::HashSet;

use pitchcraft_core::entities::StartupData;
use pitchcraft_core::enums::Industry;
use pitchcraft_generator::tables::{ACTION_VERBS, COMPETITORS};
use pitchcraft_generator::{PitchGenerator, detect_industry, revenue_model_catalog};
use rstest::rstest;

fn ecobox() -> StartupData {
    StartupData {
        name: "EcoBox".into(),
        problem: vec!["plastic waste".into()],
        solution: vec!["reusable packaging".into()],
        target: vec!["retailers".into()],
        unique: vec!["biodegradable material".into()],
    }
}

fn blank(name: &str) -> StartupData {
    StartupData {
        name: name.into(),
        problem: vec![String::new()],
        solution: vec![String::new()],
        target: vec![String::new()],
        unique: vec![String::new()],
    }
}

#[rstest]
#[case(ecobox())]
#[case(blank("Xyzzy"))]
#[case(StartupData { name: "Solo".into(), ..StartupData::default() })]
fn every_pitch_has_fixed_section_sizes(#[case] data: StartupData) {
    let pitch = PitchGenerator::seeded(3).generate(&data);
    assert_eq!(pitch.slide_points.len(), 8);
    assert_eq!(pitch.competitors.len(), 4);
    assert_eq!(pitch.revenue_models.len(), 4);
}

#[test]
fn prose_sections_contain_the_name() {
    let pitch = PitchGenerator::seeded(1).generate(&ecobox());
    assert!(pitch.elevator_pitch.matches("EcoBox").count() >= 2);
    assert!(pitch.value_proposition.contains("EcoBox"));
}

#[test]
fn tagline_matches_verb_target_name_pattern() {
    let mut generator = PitchGenerator::seeded(19);
    for data in [ecobox(), blank("Xyzzy")] {
        let expected_target = if data.target[0].is_empty() {
            "businesses"
        } else {
            data.target[0].as_str()
        };
        for _ in 0..25 {
            let tagline = generator.generate(&data).tagline;
            let suffix = format!(" {expected_target} with {}", data.name);
            let verb = tagline
                .strip_suffix(&suffix)
                .unwrap_or_else(|| panic!("unexpected tagline: {tagline}"));
            assert!(ACTION_VERBS.contains(&verb), "unexpected verb: {verb}");
        }
    }
}

#[test]
fn ecobox_classifies_as_tech_via_substring_match() {
    // "retailers" contains the tech keyword "ai".
    let data = ecobox();
    assert_eq!(detect_industry(&data), Industry::Tech);

    let pitch = PitchGenerator::seeded(0).generate(&data);
    let tech = &COMPETITORS[0].1;
    assert_eq!(pitch.competitors, tech[..4]);
}

#[test]
fn sustainability_input_gets_sustainability_competitors() {
    let data = StartupData {
        name: "Loop".into(),
        problem: vec!["carbon emissions".into()],
        ..StartupData::default()
    };
    assert_eq!(detect_industry(&data), Industry::Sustainability);

    let pitch = PitchGenerator::seeded(0).generate(&data);
    assert_eq!(
        pitch.competitors,
        [
            "GreenTech Solutions",
            "EcoInnovate",
            "SustainableSystems",
            "CarbonZero"
        ]
    );
}

#[test]
fn revenue_models_draw_without_duplicates_and_vary() {
    let catalog = revenue_model_catalog();
    let mut generator = PitchGenerator::seeded(77);
    let mut subsets = HashSet::new();

    for _ in 0..40 {
        let pitch = generator.generate(&ecobox());
        let names: Vec<String> = pitch.revenue_models.iter().map(|m| m.name.clone()).collect();
        let distinct: HashSet<&String> = names.iter().collect();
        assert_eq!(distinct.len(), 4);
        assert!(pitch.revenue_models.iter().all(|m| catalog.contains(m)));
        subsets.insert(names);
    }

    assert!(subsets.len() > 1);
}

#[test]
fn deterministic_sections_ignore_the_seed() {
    let data = ecobox();
    let a = PitchGenerator::seeded(1).generate(&data);
    let b = PitchGenerator::seeded(2).generate(&data);
    assert_eq!(a.elevator_pitch, b.elevator_pitch);
    assert_eq!(a.value_proposition, b.value_proposition);
    assert_eq!(a.slide_points, b.slide_points);
    assert_eq!(a.competitors, b.competitors);
}
