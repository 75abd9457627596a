use anyhow::Context;
use pitchcraft_core::enums::Industry;
use pitchcraft_generator::select_competitors;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompetitorsArgs;
use crate::output::{lines_text, output};

/// Handle `pcraft competitors`.
pub fn handle(args: &CompetitorsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let industry: Industry = args.industry.parse().context("invalid industry")?;
    let competitors = select_competitors(industry);
    output(competitors.as_slice(), flags.format, lines_text)
}
