//! General application configuration.

use serde::{Deserialize, Serialize};

/// How command output is rendered when `--format` is not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultFormat {
    #[default]
    Text,
    Json,
    Raw,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when the CLI flag is absent.
    #[serde(default)]
    pub default_format: DefaultFormat,
}
