//! # Strider
//!
//! Command-line entry point. Without a subcommand every demo runs in turn.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use strider::{app, Command, DemoConfig, Overrides};

#[derive(Parser, Debug)]
#[command(name = "strider")]
#[command(about = "Rollout demos and slide figures for RL bipedal locomotion", long_about = None)]
struct Cli {
    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::init_tracing();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => DemoConfig::default(),
    };
    let config = cli.overrides.apply(config);
    config.validate()?;

    let stdout = std::io::stdout();
    app::run(cli.command.unwrap_or_default(), &config, stdout.lock())
}
