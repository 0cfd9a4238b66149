//! CartPole entity for reinforcement learning environments
//!
//! This module provides the classic cart-pole system: a pole hinged on top of a
//! cart that moves along a frictionless track. The equations of motion follow
//! the original formulation by Barto, Sutton and Anderson, which is also what
//! the widely used `CartPole-v1` benchmark integrates.

use crate::error::PhysicsError;
use crate::integrator::Integrator;
use crate::types::CartPoleState;

/// Configuration for a CartPole entity
#[derive(Clone, Debug, PartialEq)]
pub struct CartPoleConfig {
    /// Gravitational acceleration in m/s^2
    pub gravity: f32,
    /// Cart mass in kg
    pub cart_mass: f32,
    /// Pole mass in kg
    pub pole_mass: f32,
    /// Half of the pole length in meters
    pub pole_half_length: f32,
    /// Force magnitude that can be applied to cart
    pub force_magnitude: f32,
    /// Seconds between state updates
    pub tau: f32,
    /// Angle threshold for failure detection (radians)
    pub failure_angle: f32,
    /// Position threshold for failure detection (meters)
    pub position_limit: f32,
    pub integrator: Integrator,
}

impl Default for CartPoleConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            cart_mass: 1.0,
            pole_mass: 0.1,
            pole_half_length: 0.5,
            force_magnitude: 10.0,
            tau: 0.02,
            failure_angle: 12.0 * 2.0 * std::f32::consts::PI / 360.0,
            position_limit: 2.4,
            integrator: Integrator::Euler,
        }
    }
}

impl CartPoleConfig {
    #[must_use]
    pub fn total_mass(&self) -> f32 {
        self.cart_mass + self.pole_mass
    }

    #[must_use]
    pub fn pole_mass_length(&self) -> f32 {
        self.pole_mass * self.pole_half_length
    }
}

/// A cart-pole system and its current state
#[derive(Clone, Debug)]
pub struct CartPole {
    /// Configuration for this cartpole
    pub config: CartPoleConfig,
    state: CartPoleState,
}

impl CartPole {
    #[must_use]
    pub fn new(config: CartPoleConfig) -> Self {
        Self { config, state: CartPoleState::default() }
    }

    #[must_use]
    pub fn state(&self) -> CartPoleState {
        self.state
    }

    /// Reset the cartpole to an explicit state
    pub fn set_state(&mut self, state: CartPoleState) {
        self.state = state;
    }

    /// Push the cart for one time step (-1.0 = full left, 1.0 = full right).
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidTimeStep`] for a non-positive `tau` and
    /// [`PhysicsError::NonFinite`] if the integrated state is no longer finite.
    /// The state is left untouched on error.
    pub fn apply_force(&mut self, push: f32) -> Result<CartPoleState, PhysicsError> {
        let cfg = &self.config;
        if !(cfg.tau > 0.0 && cfg.tau.is_finite()) {
            return Err(PhysicsError::InvalidTimeStep(cfg.tau));
        }

        let force = push.clamp(-1.0, 1.0) * cfg.force_magnitude;
        let CartPoleState { x, x_dot, theta, theta_dot } = self.state;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let total_mass = cfg.total_mass();
        let pole_mass_length = cfg.pole_mass_length();

        let temp = (force + pole_mass_length * theta_dot * theta_dot * sin_theta) / total_mass;
        let theta_acc = (cfg.gravity * sin_theta - cos_theta * temp)
            / (cfg.pole_half_length * (4.0 / 3.0 - cfg.pole_mass * cos_theta * cos_theta / total_mass));
        let x_acc = temp - pole_mass_length * theta_acc * cos_theta / total_mass;

        let (x, x_dot) = cfg.integrator.integrate(x, x_dot, x_acc, cfg.tau);
        let (theta, theta_dot) = cfg.integrator.integrate(theta, theta_dot, theta_acc, cfg.tau);
        let next = CartPoleState::new(x, x_dot, theta, theta_dot);

        if !next.is_finite() {
            tracing::warn!(?next, "cart-pole integration diverged");
            return Err(PhysicsError::NonFinite {
                system: "cart-pole",
                state: next.to_array().to_vec(),
            });
        }
        self.state = next;
        Ok(next)
    }

    /// Check if the cartpole has failed (fallen over or out of bounds)
    #[must_use]
    pub fn check_failure(&self) -> bool {
        self.state.x.abs() > self.config.position_limit
            || self.state.theta.abs() > self.config.failure_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upright_pole_at_rest_stays_at_rest_without_force() {
        let mut cartpole = CartPole::new(CartPoleConfig::default());
        let next = cartpole.apply_force(0.0).unwrap();
        assert_eq!(next, CartPoleState::default());
    }

    #[test]
    fn push_is_clamped_to_unit_range() {
        let mut a = CartPole::new(CartPoleConfig::default());
        let mut b = a.clone();
        a.apply_force(1.0).unwrap();
        a.apply_force(1.0).unwrap();
        b.apply_force(25.0).unwrap();
        b.apply_force(25.0).unwrap();
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn zero_tau_is_rejected() {
        let config = CartPoleConfig { tau: 0.0, ..Default::default() };
        let mut cartpole = CartPole::new(config);
        assert_eq!(cartpole.apply_force(1.0), Err(PhysicsError::InvalidTimeStep(0.0)));
    }
}
