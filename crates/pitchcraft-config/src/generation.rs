//! Pitch generation settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Upper bound for the simulated processing delay.
pub const MAX_SIMULATED_LATENCY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Fixed RNG seed. When set, repeated runs produce identical pitches.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Delay before generating, shown with a spinner.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl GenerationConfig {
    /// Reject out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `simulated_latency_ms`
    /// exceeds [`MAX_SIMULATED_LATENCY_MS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(ConfigError::InvalidValue {
                field: "generation.simulated_latency_ms".to_string(),
                reason: format!(
                    "{} exceeds the maximum of {MAX_SIMULATED_LATENCY_MS}",
                    self.simulated_latency_ms
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GenerationConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.simulated_latency_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn latency_above_limit_is_rejected() {
        let config = GenerationConfig {
            seed: None,
            simulated_latency_ms: MAX_SIMULATED_LATENCY_MS + 1,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "generation.simulated_latency_ms"
        ));
    }
}
