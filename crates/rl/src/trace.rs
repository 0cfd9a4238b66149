//! Episode traces.
//!
//! A [`TraceBuilder`] is the only way to grow a trace, and it maintains
//! `observations.len() == actions.len() + 1 == rewards.len() + 1` at every
//! point. [`TraceBuilder::finish`] freezes it into an [`EpisodeTrace`].

use crate::env::Observation;
use crate::space::Action;
use serde::Serialize;

/// Recorded observations, actions and rewards of one finished episode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeTrace {
    observations: Vec<Observation>,
    actions: Vec<Action>,
    rewards: Vec<f32>,
}

impl EpisodeTrace {
    /// All observations, starting with the one returned by reset.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn rewards(&self) -> &[f32] {
        &self.rewards
    }

    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// No step was taken; only the initial observation is present.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn initial_observation(&self) -> &[f32] {
        &self.observations[0]
    }

    pub fn final_observation(&self) -> &[f32] {
        &self.observations[self.observations.len() - 1]
    }

    pub fn total_reward(&self) -> f32 {
        self.rewards.iter().sum()
    }

    /// Dimensionality of the recorded observations.
    pub fn observation_dim(&self) -> usize {
        self.observations[0].len()
    }
}

/// Growing trace of an episode in progress.
#[derive(Debug)]
pub struct TraceBuilder {
    observations: Vec<Observation>,
    actions: Vec<Action>,
    rewards: Vec<f32>,
}

impl TraceBuilder {
    /// Start a trace from the observation returned by reset.
    pub fn new(initial_observation: Observation) -> Self {
        Self {
            observations: vec![initial_observation],
            actions: Vec::new(),
            rewards: Vec::new(),
        }
    }

    /// Pre-allocate room for `steps` transitions.
    pub fn with_capacity(initial_observation: Observation, steps: usize) -> Self {
        let mut observations = Vec::with_capacity(steps + 1);
        observations.push(initial_observation);
        Self {
            observations,
            actions: Vec::with_capacity(steps),
            rewards: Vec::with_capacity(steps),
        }
    }

    /// Append one transition.
    pub fn record(&mut self, action: Action, reward: f32, next_observation: Observation) {
        self.actions.push(action);
        self.rewards.push(reward);
        self.observations.push(next_observation);
    }

    /// Most recent observation, the one the next action is chosen from.
    pub fn last_observation(&self) -> &[f32] {
        &self.observations[self.observations.len() - 1]
    }

    pub fn steps(&self) -> usize {
        self.actions.len()
    }

    pub fn finish(self) -> EpisodeTrace {
        debug_assert_eq!(self.observations.len(), self.actions.len() + 1);
        debug_assert_eq!(self.actions.len(), self.rewards.len());
        EpisodeTrace {
            observations: self.observations,
            actions: self.actions,
            rewards: self.rewards,
        }
    }
}
