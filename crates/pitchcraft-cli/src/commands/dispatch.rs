use pitchcraft_config::PitchcraftConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: &Commands,
    config: &PitchcraftConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::handle(args, config, flags).await,
        Commands::Industry(args) => commands::industry::handle(args, flags),
        Commands::Competitors(args) => commands::competitors::handle(args, flags),
        Commands::RevenueModels => commands::revenue_models::handle(flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
