use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pythia k-nearest-neighbour prediction engine.
#[derive(Parser)]
#[command(
    name = "pythia",
    version,
    about = "Exact k-nearest-neighbour classification and regression"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a prediction over JSON training and query tables.
    Predict(PredictArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pythia.toml")]
    pub config: PathBuf,

    /// Override training table JSON path from config.
    #[arg(short, long)]
    pub training: Option<PathBuf>,

    /// Override query table JSON path from config.
    #[arg(short, long)]
    pub queries: Option<PathBuf>,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
