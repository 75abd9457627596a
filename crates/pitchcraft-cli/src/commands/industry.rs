use pitchcraft_generator::detect_industry;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StartupInputArgs;
use crate::commands::shared::input::resolve_startup;
use crate::output::output;

/// Handle `pcraft industry`.
pub fn handle(args: &StartupInputArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let data = resolve_startup(args)?;
    let industry = detect_industry(&data);

    output(
        &json!({ "name": &data.name, "industry": industry }),
        flags.format,
        |_| industry.to_string(),
    )
}
