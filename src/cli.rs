use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kira-mutscan", version, about = "Deep mutational scan CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Scorers,
    Sequence(SequenceArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, value_enum)]
    pub kind: KindArg,

    #[arg(long, help = "Scorer display name, e.g. ESM-1v (see `scorers`)")]
    pub scorer: String,

    #[arg(long, help = "FASTA file (sequence kind) or PDB file (structure kind)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(
        long,
        default_value = "scorers",
        help = "Directory holding the scoring executables"
    )]
    pub scorers_dir: PathBuf,

    #[arg(long, default_value_t = false, help = "Request an AI analysis report")]
    pub ai: bool,

    #[arg(long, default_value = "DeepSeek")]
    pub provider: String,

    #[arg(long, help = "API key (falls back to the provider's environment variable)")]
    pub api_key: Option<String>,

    #[arg(long, default_value_t = false, help = "Also write mutscan.json")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SequenceArgs {
    #[arg(long, value_enum)]
    pub kind: KindArg,

    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Sequence,
    Structure,
}
