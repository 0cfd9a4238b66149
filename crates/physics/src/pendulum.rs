//! Torque-driven pendulum with clipped angular velocity.

use crate::error::PhysicsError;
use crate::types::PendulumState;
use std::f32::consts::PI;

#[derive(Clone, Debug, PartialEq)]
pub struct PendulumConfig {
    pub gravity: f32,
    pub mass: f32,
    pub length: f32,
    pub dt: f32,
    /// Angular velocity is clipped to `[-max_speed, max_speed]`.
    pub max_speed: f32,
    /// Applied torque is clipped to `[-max_torque, max_torque]`.
    pub max_torque: f32,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            gravity: 10.0,
            mass: 1.0,
            length: 1.0,
            dt: 0.05,
            max_speed: 8.0,
            max_torque: 2.0,
        }
    }
}

/// Wrap an angle into `[-pi, pi)`.
#[must_use]
pub fn angle_normalize(theta: f32) -> f32 {
    (theta + PI).rem_euclid(2.0 * PI) - PI
}

#[derive(Clone, Debug)]
pub struct Pendulum {
    pub config: PendulumConfig,
    state: PendulumState,
}

impl Pendulum {
    #[must_use]
    pub fn new(config: PendulumConfig) -> Self {
        Self { config, state: PendulumState::default() }
    }

    #[must_use]
    pub fn state(&self) -> PendulumState {
        self.state
    }

    pub fn set_state(&mut self, state: PendulumState) {
        self.state = state;
    }

    /// Observation layout `[cos(theta), sin(theta), theta_dot]`.
    #[must_use]
    pub fn observation(&self) -> [f32; 3] {
        let (sin, cos) = self.state.theta.sin_cos();
        [cos, sin, self.state.theta_dot]
    }

    /// Quadratic cost of the current state under `torque`, evaluated before
    /// the torque is applied.
    #[must_use]
    pub fn cost(&self, torque: f32) -> f32 {
        let u = torque.clamp(-self.config.max_torque, self.config.max_torque);
        let th = angle_normalize(self.state.theta);
        th * th + 0.1 * self.state.theta_dot * self.state.theta_dot + 0.001 * u * u
    }

    /// Apply `torque` for one time step.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidTimeStep`] for a non-positive `dt` and
    /// [`PhysicsError::NonFinite`] if the new state is not finite.
    pub fn apply_torque(&mut self, torque: f32) -> Result<PendulumState, PhysicsError> {
        let cfg = &self.config;
        if !(cfg.dt > 0.0 && cfg.dt.is_finite()) {
            return Err(PhysicsError::InvalidTimeStep(cfg.dt));
        }
        let u = torque.clamp(-cfg.max_torque, cfg.max_torque);
        let PendulumState { theta, theta_dot } = self.state;

        let theta_acc = 3.0 * cfg.gravity / (2.0 * cfg.length) * theta.sin()
            + 3.0 / (cfg.mass * cfg.length * cfg.length) * u;
        let theta_dot = (theta_dot + theta_acc * cfg.dt).clamp(-cfg.max_speed, cfg.max_speed);
        let next = PendulumState::new(theta + theta_dot * cfg.dt, theta_dot);

        if !next.is_finite() {
            return Err(PhysicsError::NonFinite {
                system: "pendulum",
                state: next.to_array().to_vec(),
            });
        }
        self.state = next;
        Ok(next)
    }
}
