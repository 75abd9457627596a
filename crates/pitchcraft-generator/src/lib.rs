//! # pitchcraft-generator
//!
//! Turns a [`StartupData`](pitchcraft_core::entities::StartupData) record into a
//! [`GeneratedPitch`](pitchcraft_core::entities::GeneratedPitch).
//!
//! The engine is a single synchronous pass:
//! - keyword-based industry classification over all input text
//! - template builders for the elevator pitch, tagline, value proposition and
//!   slide outline
//! - a competitor sample keyed by industry
//! - a random four-item draw from the revenue model catalog
//!
//! The two random choices (tagline verb, revenue models) come from an
//! injected [`rand::Rng`], so a seeded generator reproduces its output exactly.

pub mod builders;
pub mod generator;
pub mod industry;
pub mod selectors;
pub mod tables;

pub use builders::{
    build_elevator_pitch, build_slide_points, build_tagline, build_value_proposition,
    choose_action_verb,
};
pub use generator::PitchGenerator;
pub use industry::detect_industry;
pub use selectors::{revenue_model_catalog, select_competitors, select_revenue_models};
