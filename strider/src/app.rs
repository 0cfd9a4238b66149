//! # Strider application logic
//!
//! [`run`] dispatches one [`Command`] against a resolved [`DemoConfig`],
//! narrating to the writer it is handed. Logging goes through `tracing`;
//! [`init_tracing`] installs a subscriber on stderr so log lines never mix
//! with the narration on stdout.

use crate::config::DemoConfig;
use crate::demos;
use crate::narration::Narrator;
use anyhow::Result;
use clap::Subcommand;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Subcommand, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Command {
    /// Random-policy episodes on the bipedal walker, or the fallback env
    QuickDemo,
    /// One balance episode with its report and training-stage figures
    EpisodeReport,
    /// Print the Cassie MDP formulation
    ExplainMdp,
    /// Save the training curve and architecture slides
    Figures,
    /// Everything above, in order
    #[default]
    All,
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run `command`, writing narration to `out`.
///
/// # Errors
///
/// Returns the first failure of the demo being run.
pub fn run<W: Write>(command: Command, config: &DemoConfig, out: W) -> Result<()> {
    tracing::info!(?command, output_dir = %config.output_dir.display(), "starting");
    let mut narrator = Narrator::new(out);
    match command {
        Command::QuickDemo => {
            demos::quick_demo(config, &mut narrator)?;
        }
        Command::EpisodeReport => {
            demos::episode_report(config, &mut narrator)?;
        }
        Command::ExplainMdp => demos::explain_mdp(&mut narrator)?,
        Command::Figures => {
            demos::slide_figures(config, &mut narrator)?;
        }
        Command::All => {
            demos::quick_demo(config, &mut narrator)?;
            narrator.blank()?;
            demos::episode_report(config, &mut narrator)?;
            narrator.blank()?;
            demos::explain_mdp(&mut narrator)?;
            narrator.blank()?;
            demos::slide_figures(config, &mut narrator)?;
        }
    }
    narrator.into_inner().flush()?;
    Ok(())
}
