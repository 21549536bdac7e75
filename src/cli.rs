use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devcount")]
#[command(about = "Contributing-developer analysis for git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository (default: current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(
        long,
        help = "Length of the trailing analysis window in days",
        default_value_t = crate::contributors::DEFAULT_PERIOD_DAYS
    )]
    pub days: u32,

    #[arg(long, help = "End of the analysis window (RFC3339 or YYYY-MM-DD, default: now)")]
    pub end_date: Option<String>,

    #[arg(long, help = "Exclude merge commits", default_value_t = false)]
    pub no_merges: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Distinct contributors in the window, each with their latest commit
    Contributors {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Commit and contributor counts for the window
    Stats {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Contributors { json, ndjson } => {
                crate::contributors::exec::exec_contributors(self.common, json, ndjson).await
            }
            Commands::Stats { json, ndjson } => {
                crate::contributors::exec::exec_stats(self.common, json, ndjson).await
            }
        }
    }
}
