use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a full pitch package.
    Generate(GenerateArgs),
    /// Show the industry detected for the input.
    Industry(StartupInputArgs),
    /// List sample competitors for an industry.
    Competitors(CompetitorsArgs),
    /// List the revenue model catalog.
    RevenueModels,
    /// Print the JSON Schema of an input or output record.
    Schema(SchemaArgs),
}

/// Where the startup facts come from.
#[derive(Clone, Debug, Default, Args)]
pub struct StartupInputArgs {
    /// Read startup data from a `.json` or `.toml` file.
    #[arg(short, long, conflicts_with_all = ["name", "problem", "solution", "target", "unique"])]
    pub input: Option<PathBuf>,

    /// Startup name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Problem statement bullet (repeatable).
    #[arg(long)]
    pub problem: Vec<String>,

    /// Solution bullet (repeatable).
    #[arg(long)]
    pub solution: Vec<String>,

    /// Target audience bullet (repeatable).
    #[arg(long)]
    pub target: Vec<String>,

    /// Unique value bullet (repeatable).
    #[arg(long)]
    pub unique: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub startup: StartupInputArgs,

    /// RNG seed for reproducible output (overrides config).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print only one section: elevator, tagline, value, slides, competitors, revenue.
    #[arg(long)]
    pub section: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CompetitorsArgs {
    /// Industry tag: tech, health, education, finance, social, ecommerce, sustainability.
    pub industry: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type: startup-data or generated-pitch.
    pub type_name: String,
}
