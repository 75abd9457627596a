//! # pitchcraft-config
//!
//! Layered configuration loading for Pitchcraft using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PITCHCRAFT_*` prefix, `__` as separator)
//! 2. Project-level `.pitchcraft/config.toml`
//! 3. User-level `~/.config/pitchcraft/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PITCHCRAFT_GENERATION__SEED` -> `generation.seed` and
//! `PITCHCRAFT_GENERAL__DEFAULT_FORMAT` -> `general.default_format`.
//!
//! # Usage
//!
//! ```no_run
//! use pitchcraft_config::PitchcraftConfig;
//!
//! let config = PitchcraftConfig::load_with_dotenv().expect("config");
//! if let Some(seed) = config.generation.seed {
//!     println!("reproducible run with seed {seed}");
//! }
//! ```

mod error;
mod general;
mod generation;

pub use error::ConfigError;
pub use general::{DefaultFormat, GeneralConfig};
pub use generation::{GenerationConfig, MAX_SIMULATED_LATENCY_MS};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "PITCHCRAFT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PitchcraftConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl PitchcraftConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration rooted at an explicit project directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment_for(project_root))
    }

    /// Build the provider chain for the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the provider chain with the project file under `project_root`.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(".pitchcraft").join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pitchcraft").join("config.toml"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.generation.validate()?;
        Ok(config)
    }
}
