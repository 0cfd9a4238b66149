use crate::env::{Env, Info, Observation, Step};
use crate::error::EnvError;
use crate::rng;
use crate::space::{Action, Space};
use physics::{CartPole, CartPoleConfig, CartPoleState};

/// Half-width of the interval every state component is drawn from on reset.
const RESET_NOISE: f32 = 0.05;

/// Balance a pole on a cart by pushing it left (`0`) or right (`1`).
///
/// Observations are `[x, x_dot, theta, theta_dot]`. Every step yields a reward
/// of `1.0`, including the step on which the pole falls or the cart leaves the
/// track. The environment never truncates on its own; the registry wraps it
/// in a [`TimeLimit`](crate::wrappers::TimeLimit).
pub struct CartPoleEnv {
    cartpole: CartPole,
    rng: fastrand::Rng,
    needs_reset: bool,
}

impl CartPoleEnv {
    pub const ID: &'static str = "CartPole-v1";

    pub fn new(config: CartPoleConfig) -> Self {
        Self {
            cartpole: CartPole::new(config),
            rng: fastrand::Rng::new(),
            needs_reset: true,
        }
    }

    /// The physical state behind the current observation.
    pub fn state(&self) -> CartPoleState {
        self.cartpole.state()
    }
}

impl Default for CartPoleEnv {
    fn default() -> Self {
        Self::new(CartPoleConfig::default())
    }
}

impl Env for CartPoleEnv {
    fn id(&self) -> &str {
        Self::ID
    }

    fn observation_space(&self) -> Space {
        let config = &self.cartpole.config;
        let x = config.position_limit * 2.0;
        let theta = config.failure_angle * 2.0;
        Space::from_bounds(
            vec![-x, f32::NEG_INFINITY, -theta, f32::NEG_INFINITY],
            vec![x, f32::INFINITY, theta, f32::INFINITY],
        )
    }

    fn action_space(&self) -> Space {
        Space::Discrete(2)
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(Observation, Info), EnvError> {
        if let Some(seed) = seed {
            self.rng = fastrand::Rng::with_seed(seed);
        }
        let mut sample = || rng::uniform(&mut self.rng, -RESET_NOISE, RESET_NOISE);
        let state = CartPoleState::new(sample(), sample(), sample(), sample());
        self.cartpole.set_state(state);
        self.needs_reset = false;
        Ok((state.to_array().to_vec(), Info::new()))
    }

    fn step(&mut self, action: &Action) -> Result<Step, EnvError> {
        if self.needs_reset {
            return Err(EnvError::NeedsReset);
        }
        let push = match action {
            Action::Discrete(1) => 1.0,
            Action::Discrete(0) => -1.0,
            _ => {
                return Err(EnvError::InvalidAction {
                    action: action.clone(),
                    space: self.action_space(),
                })
            }
        };
        let state = self.cartpole.apply_force(push)?;
        let terminated = self.cartpole.check_failure();
        if terminated {
            self.needs_reset = true;
        }
        Ok(Step::new(state.to_array().to_vec(), 1.0, terminated, false))
    }
}
