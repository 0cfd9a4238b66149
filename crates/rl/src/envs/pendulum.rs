use crate::env::{Env, Info, Observation, Step};
use crate::error::EnvError;
use crate::rng;
use crate::space::{Action, Space};
use physics::{Pendulum, PendulumConfig, PendulumState};
use std::f32::consts::PI;

/// Swing a pendulum upright with a bounded torque.
///
/// Observations are `[cos(theta), sin(theta), theta_dot]`; the single action
/// component is the torque. The reward is the negated quadratic cost, so it is
/// never positive. The environment never terminates.
pub struct PendulumEnv {
    pendulum: Pendulum,
    rng: fastrand::Rng,
    needs_reset: bool,
}

impl PendulumEnv {
    pub const ID: &'static str = "Pendulum-v1";

    pub fn new(config: PendulumConfig) -> Self {
        Self {
            pendulum: Pendulum::new(config),
            rng: fastrand::Rng::new(),
            needs_reset: true,
        }
    }

    pub fn state(&self) -> PendulumState {
        self.pendulum.state()
    }
}

impl Default for PendulumEnv {
    fn default() -> Self {
        Self::new(PendulumConfig::default())
    }
}

impl Env for PendulumEnv {
    fn id(&self) -> &str {
        Self::ID
    }

    fn observation_space(&self) -> Space {
        let speed = self.pendulum.config.max_speed;
        Space::from_bounds(vec![-1.0, -1.0, -speed], vec![1.0, 1.0, speed])
    }

    fn action_space(&self) -> Space {
        let torque = self.pendulum.config.max_torque;
        Space::bounded(-torque, torque, 1)
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info), EnvError> {
        if let Some(seed) = seed {
            self.rng = fastrand::Rng::with_seed(seed);
        }
        let theta = rng::uniform(&mut self.rng, -PI, PI);
        let theta_dot = rng::uniform(&mut self.rng, -1.0, 1.0);
        self.pendulum.set_state(PendulumState::new(theta, theta_dot));
        self.needs_reset = false;
        Ok((self.pendulum.observation().to_vec(), Info::new()))
    }

    fn step(&mut self, action: &Action) -> Result<Step, EnvError> {
        if self.needs_reset {
            return Err(EnvError::NeedsReset);
        }
        let space = self.action_space();
        let torque = match action {
            Action::Continuous(u) if space.contains(action) => u[0],
            _ => return Err(EnvError::InvalidAction { action: action.clone(), space }),
        };
        let reward = -self.pendulum.cost(torque);
        self.pendulum.apply_torque(torque)?;
        Ok(Step::new(self.pendulum.observation().to_vec(), reward, false, false))
    }
}
