//! Cross-cutting error types for Pitchcraft.
//!
//! Configuration errors live in `pitchcraft-config`. The CLI converges
//! everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Pitchcraft crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed the minimal form checks.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An industry tag outside the fixed set was supplied.
    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),

    /// A section id outside the fixed set was supplied.
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}
