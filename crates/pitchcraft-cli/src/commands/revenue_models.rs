use pitchcraft_generator::revenue_model_catalog;

use crate::cli::GlobalFlags;
use crate::output::{output, revenue_models_text};

/// Handle `pcraft revenue-models`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = revenue_model_catalog();
    output(catalog.as_slice(), flags.format, revenue_models_text)
}
