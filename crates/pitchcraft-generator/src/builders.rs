//! Template builders for the prose sections and the slide outline.
//!
//! Every builder filters blank bullet entries first. A field that is empty
//! after filtering contributes an empty string to its template unless the
//! builder names an explicit fallback phrase.

use pitchcraft_core::entities::StartupData;
use pitchcraft_core::enums::BulletField;
use rand::Rng;

use crate::tables::{ACTION_VERBS, SLIDE_BOILERPLATE};

const TAGLINE_TARGET_FALLBACK: &str = "businesses";
const BENEFIT_FALLBACK: &str = "innovative solutions";
const UNIQUE_VALUE_FALLBACK: &str = "cutting-edge technology";

/// Join the non-blank entries of `field`, optionally keeping only the first `limit`.
fn join_filled(data: &StartupData, field: BulletField, sep: &str, limit: Option<usize>) -> String {
    let entries = data.filled(field);
    let kept: Vec<&str> = match limit {
        Some(n) => entries.take(n).collect(),
        None => entries.collect(),
    };
    kept.join(sep)
}

/// Three-paragraph investor pitch naming the startup twice.
#[must_use]
pub fn build_elevator_pitch(data: &StartupData) -> String {
    let name = &data.name;
    let problems = join_filled(data, BulletField::Problem, ", ", None);
    let solutions = join_filled(data, BulletField::Solution, " and ", None);
    let targets = join_filled(data, BulletField::Target, " and ", None);
    let unique = join_filled(data, BulletField::Unique, " and ", Some(2));

    format!(
        "{name} addresses the critical challenge of {problems} by {solutions}. \n\n\
         We're targeting {targets} who are currently struggling with inefficient alternatives. \
         Our unique approach delivers measurable results through {unique}.\n\n\
         With a growing market opportunity and proven demand, {name} is positioned to capture \
         significant market share while solving real problems for our customers. \
         We're seeking investment to scale our solution and expand our reach."
    )
}

/// Pick a tagline verb uniformly from [`ACTION_VERBS`].
pub fn choose_action_verb<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let verb = ACTION_VERBS[rng.gen_range(0..ACTION_VERBS.len())];
    tracing::trace!(verb, "chose tagline verb");
    verb
}

/// `"<verb> <first target or 'businesses'> with <name>"`.
#[must_use]
pub fn build_tagline(data: &StartupData, verb: &str) -> String {
    let target = data
        .first_filled(BulletField::Target)
        .unwrap_or(TAGLINE_TARGET_FALLBACK);
    format!("{verb} {target} with {}", data.name)
}

#[must_use]
pub fn build_value_proposition(data: &StartupData) -> String {
    let benefit = data
        .first_filled(BulletField::Solution)
        .unwrap_or(BENEFIT_FALLBACK);
    let unique_value = data
        .first_filled(BulletField::Unique)
        .unwrap_or(UNIQUE_VALUE_FALLBACK);

    format!(
        "{} delivers {benefit} through {unique_value}, enabling our customers to achieve their \
         goals faster and more efficiently than ever before. Unlike traditional alternatives, we \
         provide a seamless experience that reduces costs while increasing productivity and \
         satisfaction.",
        data.name
    )
}

/// Eight slide bullets: four drawn from the input, four fixed.
#[must_use]
pub fn build_slide_points(data: &StartupData) -> Vec<String> {
    let mut points = vec![
        format!(
            "Problem: {}",
            join_filled(data, BulletField::Problem, " and ", Some(2))
        ),
        format!(
            "Solution: {}",
            join_filled(data, BulletField::Solution, " and ", Some(2))
        ),
        format!(
            "Market Opportunity: Large and growing target market of {}",
            join_filled(data, BulletField::Target, " and ", None)
        ),
        format!(
            "Competitive Advantage: {}",
            join_filled(data, BulletField::Unique, " and ", Some(2))
        ),
    ];
    points.extend(SLIDE_BOILERPLATE.iter().map(ToString::to_string));
    points
}
