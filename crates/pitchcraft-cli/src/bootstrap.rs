use anyhow::Context;
use pitchcraft_config::PitchcraftConfig;

/// Load layered configuration, `.env` included.
pub fn load_config() -> anyhow::Result<PitchcraftConfig> {
    PitchcraftConfig::load_with_dotenv().context("failed to load pitchcraft configuration")
}
