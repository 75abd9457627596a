//! Keyword-based industry classification.

use pitchcraft_core::entities::StartupData;
use pitchcraft_core::enums::Industry;

use crate::tables::INDUSTRY_KEYWORDS;

/// Classify a startup by plain substring search over its text.
///
/// The name and every bullet entry (blank ones included) are joined with
/// spaces and lowercased. The first industry in [`INDUSTRY_KEYWORDS`] with any
/// keyword contained in that text wins; with no match the result is
/// [`Industry::Tech`].
#[must_use]
pub fn detect_industry(data: &StartupData) -> Industry {
    let haystack = haystack(data);

    let industry = INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map_or_else(Industry::default, |(industry, _)| *industry);

    tracing::debug!(%industry, "detected industry");
    industry
}

fn haystack(data: &StartupData) -> String {
    std::iter::once(&data.name)
        .chain(&data.problem)
        .chain(&data.solution)
        .chain(&data.target)
        .chain(&data.unique)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
