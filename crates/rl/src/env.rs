//! Reinforcement learning environment trait.

use crate::error::EnvError;
use crate::space::{Action, Space};
use std::collections::BTreeMap;

/// State vector returned by [`Env::reset`] and [`Env::step`].
pub type Observation = Vec<f32>;

/// Auxiliary diagnostics attached to resets and steps.
pub type Info = BTreeMap<String, f64>;

/// Result of one [`Env::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    /// The environment reached one of its own terminal states.
    pub terminated: bool,
    /// The episode was cut short from outside, typically by a step limit.
    pub truncated: bool,
    pub info: Info,
}

impl Step {
    pub fn new(observation: Observation, reward: f32, terminated: bool, truncated: bool) -> Self {
        Self { observation, reward, terminated, truncated, info: Info::new() }
    }

    /// Either episode-end flag is set.
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Implementations are stateful: each
/// call to [`step`] advances the episode started by the last [`reset`].
///
/// [`step`]: Env::step
/// [`reset`]: Env::reset
pub trait Env {
    /// Registry id, e.g. `CartPole-v1`.
    fn id(&self) -> &str;

    fn observation_space(&self) -> Space;

    fn action_space(&self) -> Space;

    /// Start a new episode and return the initial observation.
    ///
    /// A `Some` seed re-seeds the environment's random source so the same
    /// seed always yields the same initial state.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvError`] if the environment cannot be reset.
    fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info), EnvError>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NeedsReset`] when no episode is in progress,
    /// [`EnvError::InvalidAction`] for actions outside the action space, or
    /// any error raised by the underlying simulation.
    fn step(&mut self, action: &Action) -> Result<Step, EnvError>;

    /// Release any external resources.
    fn close(&mut self) {}
}

impl<E: Env + ?Sized> Env for Box<E> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn observation_space(&self) -> Space {
        (**self).observation_space()
    }

    fn action_space(&self) -> Space {
        (**self).action_space()
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info), EnvError> {
        (**self).reset(seed)
    }

    fn step(&mut self, action: &Action) -> Result<Step, EnvError> {
        (**self).step(action)
    }

    fn close(&mut self) {
        (**self).close();
    }
}
