use pitchcraft_core::entities::{GeneratedPitch, RevenueModel};
use pitchcraft_core::enums::PitchSection;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a response in the requested format.
///
/// `text` produces the human-readable form and is only called for
/// [`OutputFormat::Text`].
pub fn render<T, F>(value: &T, format: OutputFormat, text: F) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T, F>(value: &T, format: OutputFormat, text: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    let rendered = render(value, format, text)?;
    println!("{rendered}");
    Ok(())
}

/// All sections, each under a heading with its description.
pub fn pitch_text(pitch: &GeneratedPitch) -> String {
    PitchSection::ALL
        .iter()
        .map(|section| {
            format!(
                "== {} ({}) ==\n{}",
                section.title(),
                section.description(),
                pitch.section_text(*section)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn lines_text(lines: &[String]) -> String {
    lines.join("\n")
}

pub fn revenue_models_text(models: &[RevenueModel]) -> String {
    models
        .iter()
        .map(|model| format!("{}: {}", model.name, model.description))
        .collect::<Vec<_>>()
        .join("\n")
}
