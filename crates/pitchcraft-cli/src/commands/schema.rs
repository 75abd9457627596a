use anyhow::bail;
use pitchcraft_core::entities::{GeneratedPitch, StartupData};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// Handle `pcraft schema`.
///
/// Always prints JSON: a schema has no text rendering.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_by_name(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn schema_by_name(type_name: &str) -> anyhow::Result<Schema> {
    match type_name {
        "startup-data" | "startup_data" => Ok(schema_for!(StartupData)),
        "generated-pitch" | "generated_pitch" => Ok(schema_for!(GeneratedPitch)),
        other => bail!("unknown schema type '{other}': expected startup-data or generated-pitch"),
    }
}
