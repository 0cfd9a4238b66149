//! The episode rollout loop.
//!
//! [`run_episode`] resets the environment once, then alternates policy and
//! environment until the episode ends. It owns the trace for the duration of
//! the rollout and hands it back only when the episode finished cleanly; an
//! environment error drops the partial trace.

use crate::env::Env;
use crate::error::RolloutError;
use crate::policy::Policy;
use crate::trace::{EpisodeTrace, TraceBuilder};
use serde::Serialize;
use std::fmt;

/// Why a rollout stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The environment reported termination. Takes priority over truncation
    /// asserted on the same step.
    Terminated,
    /// The environment reported truncation.
    Truncated,
    /// `max_steps` steps were taken without either flag.
    BudgetExhausted,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EndReason::Terminated => "terminated",
            EndReason::Truncated => "truncated",
            EndReason::BudgetExhausted => "budget exhausted",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RolloutConfig {
    /// Passed to [`Env::reset`].
    pub seed: Option<u64>,
    pub max_steps: usize,
}

impl RolloutConfig {
    pub fn new(seed: Option<u64>, max_steps: usize) -> Self {
        Self { seed, max_steps }
    }
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self { seed: None, max_steps: 500 }
    }
}

/// A finished episode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rollout {
    pub trace: EpisodeTrace,
    pub steps: usize,
    pub end_reason: EndReason,
}

/// Run one episode of `policy` in `env`.
///
/// # Errors
///
/// Returns [`RolloutError::Reset`] or [`RolloutError::Step`] as soon as the
/// environment fails. Nothing is retried and the partial trace is discarded.
pub fn run_episode<E, P>(env: &mut E, policy: &mut P, config: RolloutConfig) -> Result<Rollout, RolloutError>
where
    E: Env + ?Sized,
    P: Policy + ?Sized,
{
    let (initial, _info) = env.reset(config.seed).map_err(RolloutError::Reset)?;
    let mut trace = TraceBuilder::with_capacity(initial, config.max_steps.min(4096));
    let mut end_reason = EndReason::BudgetExhausted;

    while trace.steps() < config.max_steps {
        let action = policy.act(trace.last_observation());
        let step = env
            .step(&action)
            .map_err(|source| RolloutError::Step { step: trace.steps(), source })?;
        trace.record(action, step.reward, step.observation);

        if step.terminated {
            end_reason = EndReason::Terminated;
            break;
        }
        if step.truncated {
            end_reason = EndReason::Truncated;
            break;
        }
    }

    let trace = trace.finish();
    tracing::debug!(
        env = env.id(),
        steps = trace.len(),
        total_reward = trace.total_reward(),
        %end_reason,
        "rollout finished"
    );
    Ok(Rollout { steps: trace.len(), trace, end_reason })
}

/// Run one episode per config, strictly in sequence, each with a fresh trace.
///
/// # Errors
///
/// Stops at the first failing rollout and returns its error; traces of the
/// rollouts completed before it are dropped.
pub fn run_episodes<E, P, I>(env: &mut E, policy: &mut P, configs: I) -> Result<Vec<Rollout>, RolloutError>
where
    E: Env + ?Sized,
    P: Policy + ?Sized,
    I: IntoIterator<Item = RolloutConfig>,
{
    configs
        .into_iter()
        .map(|config| run_episode(env, policy, config))
        .collect()
}
