//! Command-line driver for viscoelastic stress start-up simulations.

use std::{error::Error as _, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rheo")]
#[command(
    version,
    about = "Simulate the stress response of a viscoelastic material in shear or extensional flow"
)]
pub(crate) struct Cli {
    /// Path to the simulation input (JSON).
    #[arg(short, long, default_value = "input.json")]
    pub(crate) config: PathBuf,

    /// Write the strain/stress series to this file as JSON.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Plot stress against strain when the run completes.
    #[arg(long)]
    pub(crate) plot: bool,

    /// Increase log verbosity (-v shows every step).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::simulate(&cli) {
        tracing::error!("{e}");
        let mut source = e.source();
        while let Some(cause) = source {
            tracing::error!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}
