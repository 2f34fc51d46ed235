//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "foryou")]
#[command(about = "Personalized music recommendations from a request snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output format - use json for tool integration
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Request file in the wire format (userId, userData, songsData)
    pub request: PathBuf,

    /// Recommend for this user instead of the request's userId
    #[arg(long)]
    pub user_id: Option<String>,

    /// Use the offline hashing embedder instead of the remote service
    #[arg(long)]
    pub offline: bool,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Request file in the wire format (userId, userData, songsData)
    pub request: PathBuf,

    /// Show the profile of this user instead of the request's userId
    #[arg(long)]
    pub user_id: Option<String>,
}
