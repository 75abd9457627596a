use std::path::Path;

use anyhow::{Context, bail};
use pitchcraft_core::entities::StartupData;
use pitchcraft_core::enums::BulletField;
use pitchcraft_core::form::StartupForm;

use crate::cli::root_commands::StartupInputArgs;

/// Build validated startup data from `--input` or the inline field flags.
pub fn resolve_startup(args: &StartupInputArgs) -> anyhow::Result<StartupData> {
    let form = match &args.input {
        Some(path) => StartupForm::from(read_startup_file(path)?),
        None => form_from_flags(args),
    };

    form.submit().context("startup data is incomplete")
}

fn form_from_flags(args: &StartupInputArgs) -> StartupForm {
    let mut form = StartupForm::new();
    if let Some(name) = &args.name {
        form.set_name(name.as_str());
    }
    form.set_bullets(BulletField::Problem, args.problem.iter().cloned());
    form.set_bullets(BulletField::Solution, args.solution.iter().cloned());
    form.set_bullets(BulletField::Target, args.target.iter().cloned());
    form.set_bullets(BulletField::Unique, args.unique.iter().cloned());
    form
}

/// Parse a `.json` or `.toml` file into startup data.
pub fn read_startup_file(path: &Path) -> anyhow::Result<StartupData> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file '{}'", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&contents)
            .with_context(|| format!("invalid JSON in '{}'", path.display())),
        Some("toml") => toml::from_str(&contents)
            .with_context(|| format!("invalid TOML in '{}'", path.display())),
        _ => bail!(
            "unsupported input file '{}': expected a .json or .toml extension",
            path.display()
        ),
    }
}
