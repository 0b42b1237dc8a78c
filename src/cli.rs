use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fpmeter")]
#[command(about = "NESMA function point sizing and cost estimation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate size, effort and cost for one project snapshot
    Calc {
        /// Path to the project snapshot (JSON)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the snapshot's reuse level (high, medium, low, none)
        #[arg(long)]
        reuse: Option<String>,

        /// Substitute the neutral GSC default sheet when the score input
        /// is invalid, instead of failing the calculation
        #[arg(long = "default-vaf")]
        default_vaf: bool,

        /// Configuration file (defaults to discovering .fpmeter.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Calculate many project snapshots, one outcome per project
    Batch {
        /// Paths to project snapshots (JSON)
        inputs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to discovering .fpmeter.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the 14 general system characteristics
    Factors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
