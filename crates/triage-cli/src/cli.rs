use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(author, version, about = "Validate and prioritise self-reported symptom submissions")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "triage.yaml")]
    pub config: PathBuf,

    /// Rule set file, overriding the rules in the configuration
    #[arg(short, long, global = true, env = "TRIAGE_RULES")]
    pub rules: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Print collected metrics (Prometheus text format) to stderr on exit
    #[arg(long, global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and classify one submission (JSON)
    Classify {
        /// Submission file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Fixed observation time (RFC 3339) instead of the current time
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// Validate one submission (JSON) without classifying it
    Validate {
        /// Submission file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },

    /// Print the effective rule set as YAML
    Rules,

    /// Count case records (JSON array) by level and status
    Summarize {
        /// Records file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },
}
