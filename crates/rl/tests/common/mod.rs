#![allow(dead_code)]

use rl::{Action, Env, EnvError, Info, Observation, Space, Step};

/// Deterministic environment that replays scripted episode-end flags.
///
/// The observation is `[t, t * 0.5]` where `t` counts steps since reset, and
/// the reward of step `t` (1-based) is `t`. After the script runs out the
/// flags stay false.
pub struct ScriptedEnv {
    pub flags: Vec<(bool, bool)>,
    pub fail_reset: bool,
    pub fail_at_step: Option<usize>,
    pub t: usize,
    pub resets: usize,
    pub seeds: Vec<Option<u64>>,
}

impl ScriptedEnv {
    pub fn new(flags: Vec<(bool, bool)>) -> Self {
        Self { flags, fail_reset: false, fail_at_step: None, t: 0, resets: 0, seeds: Vec::new() }
    }

    pub fn endless() -> Self {
        Self::new(Vec::new())
    }

    fn observation(&self) -> Observation {
        vec![self.t as f32, self.t as f32 * 0.5]
    }
}

impl Env for ScriptedEnv {
    fn id(&self) -> &str {
        "Scripted-v0"
    }

    fn observation_space(&self) -> Space {
        Space::bounded(f32::NEG_INFINITY, f32::INFINITY, 2)
    }

    fn action_space(&self) -> Space {
        Space::Discrete(2)
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info), EnvError> {
        if self.fail_reset {
            return Err(EnvError::NeedsReset);
        }
        self.t = 0;
        self.resets += 1;
        self.seeds.push(seed);
        Ok((self.observation(), Info::new()))
    }

    fn step(&mut self, action: &Action) -> Result<Step, EnvError> {
        if !self.action_space().contains(action) {
            return Err(EnvError::InvalidAction { action: action.clone(), space: self.action_space() });
        }
        if self.fail_at_step == Some(self.t) {
            return Err(EnvError::NeedsReset);
        }
        let (terminated, truncated) = self.flags.get(self.t).copied().unwrap_or((false, false));
        self.t += 1;
        Ok(Step::new(self.observation(), self.t as f32, terminated, truncated))
    }
}

pub fn assert_trace_invariants(rollout: &rl::Rollout, max_steps: usize) {
    let trace = &rollout.trace;
    assert_eq!(trace.observations().len(), trace.actions().len() + 1);
    assert_eq!(trace.observations().len(), trace.rewards().len() + 1);
    assert_eq!(rollout.steps, trace.len());
    assert!(trace.len() <= max_steps);
}
