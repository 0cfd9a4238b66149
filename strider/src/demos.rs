//! The four course scripts: a random-policy quick demo, the balance episode
//! report, the MDP write-up and the slide figures.

use crate::config::DemoConfig;
use crate::narration::Narrator;
use anyhow::{Context, Result};
use render::figures;
use rl::metrics::EpisodeSummary;
use rl::synthetic;
use rl::{
    make, make_with_fallback, run_episode, run_episodes, Made, Policy, RandomPolicy, Rollout, RolloutConfig, Space,
    ThresholdPolicy,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Run `demo_episodes` random-policy episodes on the preferred environment,
/// or the fallback if the preferred one is unavailable.
///
/// # Errors
///
/// Fails when neither environment can be built or a rollout fails.
pub fn quick_demo<W: Write>(config: &DemoConfig, narrator: &mut Narrator<W>) -> Result<Vec<Rollout>> {
    narrator.banner("BIPEDAL LOCOMOTION DEMO")?;

    let Made { mut env, fallback_reason } = make_with_fallback(&config.preferred_env, &config.fallback_env)
        .with_context(|| {
            format!(
                "no demo environment available (tried {} and {})",
                config.preferred_env, config.fallback_env
            )
        })?;
    let env_id = env.id().to_owned();
    narrator.environment(&env_id, fallback_reason.as_ref())?;
    narrator.spaces(&*env)?;

    narrator.line(format_args!("\nRunning {} demo episodes...", config.demo_episodes))?;
    let mut policy = RandomPolicy::new(env.action_space(), Some(config.seed));
    let configs = (0..config.demo_episodes as u64)
        .map(|i| RolloutConfig::new(Some(config.seed.wrapping_add(i)), config.max_steps));
    let rollouts = run_episodes(&mut *env, &mut policy, configs).context("demo rollout failed")?;
    env.close();

    for (i, rollout) in rollouts.iter().enumerate() {
        narrator.episode_result(i + 1, rollout)?;
    }
    narrator.average_reward(&rollouts)?;
    narrator.line("Demo complete!")?;
    tracing::info!(env = %env_id, episodes = rollouts.len(), "quick demo finished");
    Ok(rollouts)
}

/// What [`episode_report`] produced.
#[derive(Debug)]
pub struct Report {
    pub rollout: Rollout,
    pub saved: Vec<PathBuf>,
}

/// Policy for the report episode: the tilt rule on two-action balance
/// tasks, a seeded random policy elsewhere.
fn report_policy(space: Space, seed: u64) -> Box<dyn Policy> {
    match space {
        Space::Discrete(2) => Box::new(ThresholdPolicy::cartpole_tilt()),
        space => Box::new(RandomPolicy::new(space, Some(seed))),
    }
}

/// Run one seeded episode of the report environment, narrate it, and save
/// `complete_demo.png` and `training_stages.png`.
///
/// # Errors
///
/// Fails when the environment cannot be built, the rollout fails, or a file
/// cannot be written.
pub fn episode_report<W: Write>(config: &DemoConfig, narrator: &mut Narrator<W>) -> Result<Report> {
    narrator.banner("RL LOCOMOTION DEMO - Enhanced Visualization")?;

    let mut env = make(&config.report_env).with_context(|| format!("cannot build {}", config.report_env))?;
    let env_id = env.id().to_owned();
    let action_space = env.action_space();
    narrator.environment(&env_id, None)?;
    narrator.line("   Similar challenge to bipedal locomotion: maintaining balance")?;
    narrator.analogy()?;

    narrator.line("\nRunning episode...")?;
    let mut policy = report_policy(action_space.clone(), config.seed);
    let rollout = run_episode(
        &mut *env,
        &mut *policy,
        RolloutConfig::new(Some(config.seed), config.max_steps),
    )
    .with_context(|| format!("report episode on {env_id} failed"))?;
    env.close();
    narrator.episode_complete(&rollout)?;

    let mut created = Vec::new();
    let path = config.output_path("complete_demo.png");
    figures::episode_report(&env_id, &rollout, &action_space)
        .save(&path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    narrator.saved(&path)?;
    created.push((path, "Comprehensive episode analysis"));

    let summary = EpisodeSummary::from_rollout(&rollout);
    narrator.blank()?;
    narrator.line(figures::comparison_summary(&summary, rollout.trace.observation_dim(), &action_space))?;

    narrator.line("\nSimulating training progress...")?;
    let stages = synthetic::training_stages(config.synthetic_seed);
    let path = config.output_path("training_stages.png");
    figures::training_stages(&stages)
        .save(&path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    narrator.saved(&path)?;
    created.push((path, "Training progression simulation"));

    if let Some(dump) = &config.dump_trace {
        let path = config.output_path(dump);
        write_trace(&path, &rollout).with_context(|| format!("failed to write trace {}", path.display()))?;
        narrator.saved(&path)?;
        created.push((path, "Episode trace (JSON)"));
    }

    narrator.blank()?;
    narrator.banner("ALL DEMO VISUALIZATIONS COMPLETE!")?;
    narrator.files_created(&created)?;
    tracing::info!(env = %env_id, steps = rollout.steps, end = %rollout.end_reason, "episode report finished");
    let saved = created.into_iter().map(|(path, _)| path).collect();
    Ok(Report { rollout, saved })
}

fn write_trace(path: &Path, rollout: &Rollout) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, rollout)?;
    writer.flush()?;
    Ok(())
}

/// # Errors
///
/// Fails only when the writer does.
pub fn explain_mdp<W: Write>(narrator: &mut Narrator<W>) -> Result<()> {
    narrator.mdp_formulation()?;
    Ok(())
}

/// Save `training_curve.png` and `architecture.png`.
///
/// # Errors
///
/// Fails when a figure cannot be written.
pub fn slide_figures<W: Write>(config: &DemoConfig, narrator: &mut Narrator<W>) -> Result<Vec<PathBuf>> {
    narrator.line("Creating figures for presentation...")?;

    let curve = synthetic::curriculum_curve(config.synthetic_seed, 1000);
    let outputs = [
        (config.output_path("training_curve.png"), figures::training_curve(&curve)),
        (config.output_path("architecture.png"), figures::architecture()),
    ];
    let mut saved = Vec::with_capacity(outputs.len());
    for (path, figure) in outputs {
        figure.save(&path).with_context(|| format!("failed to save {}", path.display()))?;
        narrator.saved(&path)?;
        saved.push(path);
    }

    narrator.line("\nAll figures created successfully!")?;
    narrator.line(format_args!("Files saved in {}:", config.output_dir.display()))?;
    for path in &saved {
        if let Some(name) = path.file_name() {
            narrator.line(format_args!("  - {}", name.to_string_lossy()))?;
        }
    }
    Ok(saved)
}
