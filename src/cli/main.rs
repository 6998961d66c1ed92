use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(
    version = "0.1.0",
    about = "Post-it board and local login demo"
)]
pub struct Cli {
    /// Path to the data directory (overrides the configured one)
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the cogs application
    #[clap(subcommand)]
    pub command: Commands,
}
