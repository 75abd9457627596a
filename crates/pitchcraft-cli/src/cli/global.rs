use clap::ValueEnum;
use pitchcraft_config::DefaultFormat;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Raw,
}

impl From<DefaultFormat> for OutputFormat {
    fn from(value: DefaultFormat) -> Self {
        match value {
            DefaultFormat::Text => Self::Text,
            DefaultFormat::Json => Self::Json,
            DefaultFormat::Raw => Self::Raw,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// Resolved output format (flag, else config default).
    pub format: OutputFormat,
    pub quiet: bool,
}
