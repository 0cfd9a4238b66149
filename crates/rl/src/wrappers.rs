//! Environment wrappers.

use crate::env::{Env, Info, Observation, Step};
use crate::error::EnvError;
use crate::space::{Action, Space};

/// Truncates episodes after a fixed number of steps.
///
/// The step on which the limit is reached reports `truncated = true`, even if
/// the wrapped environment also reports termination on that step. The elapsed
/// step count is published in `info["elapsed_steps"]`.
pub struct TimeLimit<E> {
    env: E,
    max_episode_steps: usize,
    elapsed_steps: usize,
    needs_reset: bool,
}

impl<E: Env> TimeLimit<E> {
    pub fn new(env: E, max_episode_steps: usize) -> Self {
        Self { env, max_episode_steps, elapsed_steps: 0, needs_reset: true }
    }

    pub fn elapsed_steps(&self) -> usize {
        self.elapsed_steps
    }
}

impl<E: Env> Env for TimeLimit<E> {
    fn id(&self) -> &str {
        self.env.id()
    }

    fn observation_space(&self) -> Space {
        self.env.observation_space()
    }

    fn action_space(&self) -> Space {
        self.env.action_space()
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info), EnvError> {
        let reset = self.env.reset(seed)?;
        self.elapsed_steps = 0;
        self.needs_reset = false;
        Ok(reset)
    }

    fn step(&mut self, action: &Action) -> Result<Step, EnvError> {
        if self.needs_reset {
            return Err(EnvError::NeedsReset);
        }
        let mut step = self.env.step(action)?;
        self.elapsed_steps += 1;
        if self.elapsed_steps >= self.max_episode_steps {
            step.truncated = true;
        }
        step.info.insert("elapsed_steps".to_owned(), self.elapsed_steps as f64);
        if step.is_done() {
            self.needs_reset = true;
        }
        Ok(step)
    }

    fn close(&mut self) {
        self.env.close();
    }
}
