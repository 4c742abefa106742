mod commands;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Pet batch-write payload generator.
#[derive(Parser)]
#[command(
    name = "petseed",
    version,
    about = "Generate pet records as a key-value store batch-write payload"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records and write the batch-write payload
    Generate(GenerateArgs),

    /// Print the default configuration as TOML
    Config,
}

/// Flags for `petseed generate`. Every flag overrides the config file.
#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of records to generate
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
    /// Table name the records are nested under
    #[arg(long)]
    pub table: Option<String>,
    /// Output file, or - for standard output
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
    /// Timestamp of the first record (YYYY-MM-DDTHH:MM:SS[.ffffff][Z], UTC). Default: now
    #[arg(long)]
    pub base_time: Option<String>,
    /// Seed for reproducible record identifiers
    #[arg(long)]
    pub seed: Option<u64>,

    /// Display name prefix; the record index is appended
    #[arg(long)]
    pub name_prefix: Option<String>,
    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,
    #[arg(long)]
    pub breed: Option<String>,
    /// HTML description
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    /// Owning shelter UUID
    #[arg(long)]
    pub shelter_id: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    /// Available, Pending, Adopted or MedicalHold
    #[arg(long)]
    pub status: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            commands::generate::cmd_generate(&args, cli.output, cli.quiet);
        }
        Commands::Config => {
            commands::config::cmd_config(cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
