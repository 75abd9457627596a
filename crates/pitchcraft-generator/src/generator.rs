//! The pitch orchestrator.

use pitchcraft_core::entities::{GeneratedPitch, StartupData};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::builders::{
    build_elevator_pitch, build_slide_points, build_tagline, build_value_proposition,
    choose_action_verb,
};
use crate::industry::detect_industry;
use crate::selectors::{select_competitors, select_revenue_models};

/// Generates pitches from startup data using an owned random source.
///
/// ```
/// use pitchcraft_core::entities::StartupData;
/// use pitchcraft_generator::PitchGenerator;
///
/// let data = StartupData {
///     name: "Acme".into(),
///     target: vec!["freelancers".into()],
///     ..StartupData::default()
/// };
/// let pitch = PitchGenerator::seeded(7).generate(&data);
/// assert_eq!(pitch.slide_points.len(), 8);
/// assert!(pitch.tagline.ends_with("freelancers with Acme"));
/// ```
#[derive(Debug, Clone)]
pub struct PitchGenerator<R = StdRng> {
    rng: R,
}

impl PitchGenerator<StdRng> {
    /// Reproducible generator: the same seed yields the same pitches.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PitchGenerator<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build every section of the pitch in one pass.
    ///
    /// Total over any input; callers are expected to reject a blank name
    /// beforehand.
    pub fn generate(&mut self, data: &StartupData) -> GeneratedPitch {
        let industry = detect_industry(data);
        let verb = choose_action_verb(&mut self.rng);

        let pitch = GeneratedPitch {
            elevator_pitch: build_elevator_pitch(data),
            tagline: build_tagline(data, verb),
            value_proposition: build_value_proposition(data),
            slide_points: build_slide_points(data),
            competitors: select_competitors(industry),
            revenue_models: select_revenue_models(data, &mut self.rng),
        };

        tracing::debug!(name = %data.name, %industry, "generated pitch");
        pitch
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::mock::StepRng;

    use super::*;

    fn acme() -> StartupData {
        StartupData {
            name: "Acme".into(),
            problem: vec!["slow invoicing".into()],
            solution: vec!["automated billing".into()],
            target: vec!["freelancers".into()],
            unique: vec!["one-click reminders".into()],
        }
    }

    #[test]
    fn same_seed_same_pitch() {
        let data = acme();
        let first = PitchGenerator::seeded(11).generate(&data);
        let second = PitchGenerator::seeded(11).generate(&data);
        assert_eq!(first, second);
    }

    #[test]
    fn injected_rng_controls_the_tagline() {
        let mut generator = PitchGenerator::new(StepRng::new(0, 0));
        let pitch = generator.generate(&acme());
        assert_eq!(pitch.tagline, "Transform freelancers with Acme");
    }

    #[test]
    fn generator_advances_its_rng_between_calls() {
        let data = acme();
        let mut generator = PitchGenerator::seeded(5);
        let pitches: Vec<GeneratedPitch> = (0..20).map(|_| generator.generate(&data)).collect();
        assert!(pitches.iter().any(|p| p != &pitches[0]));
    }
}
