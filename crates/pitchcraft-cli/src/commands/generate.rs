use std::time::Duration;

use anyhow::Context;
use pitchcraft_config::PitchcraftConfig;
use pitchcraft_core::enums::PitchSection;
use pitchcraft_generator::PitchGenerator;
use serde_json::json;

use crate::cli::root_commands::GenerateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::resolve_startup;
use crate::output::{pitch_text, render};
use crate::progress::Progress;

/// Handle `pcraft generate`.
pub async fn handle(
    args: &GenerateArgs,
    config: &PitchcraftConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    parse_section(args)?;
    resolve_startup(&args.startup)?;

    let latency = config.generation.simulated_latency_ms;
    if latency > 0 {
        let spinner = Progress::spinner("Generating pitch...", flags.quiet);
        tokio::time::sleep(Duration::from_millis(latency)).await;
        spinner.finish_and_clear();
    }

    let rendered = render_pitch(args, config, flags.format)?;
    println!("{rendered}");
    Ok(())
}

fn parse_section(args: &GenerateArgs) -> anyhow::Result<Option<PitchSection>> {
    args.section
        .as_deref()
        .map(str::parse::<PitchSection>)
        .transpose()
        .context("invalid --section")
}

/// `--seed` wins over `[generation] seed`.
fn resolve_seed(args: &GenerateArgs, config: &PitchcraftConfig) -> Option<u64> {
    args.seed.or(config.generation.seed)
}

/// Generate and render the whole pitch, or only the requested section.
fn render_pitch(
    args: &GenerateArgs,
    config: &PitchcraftConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let section = parse_section(args)?;
    let data = resolve_startup(&args.startup)?;

    let seed = resolve_seed(args, config);
    let mut generator = seed.map_or_else(PitchGenerator::from_entropy, PitchGenerator::seeded);
    tracing::debug!(?seed, name = %data.name, "generating pitch");
    let pitch = generator.generate(&data);

    match section {
        Some(section) => {
            let text = pitch.section_text(section);
            render(
                &json!({ "section": section, "text": &text }),
                format,
                |_| text.clone(),
            )
        }
        None => render(&pitch, format, pitch_text),
    }
}
