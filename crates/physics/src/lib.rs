#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Strider Physics
//!
//! Closed-form dynamics for the classic control systems used by the demo
//! environments.
//!
//! Everything here is a plain state plus a deterministic update rule. There is
//! no notion of episodes, rewards or actions: the [`rl`] crate wraps these
//! systems into environments. Keeping the split means the equations of motion
//! can be tested on their own, without going through the environment protocol.
//!
//! ## Key Components
//!
//! -   **Cart-pole:** [`CartPole`] integrates the textbook inverted pendulum on
//!     a cart (Barto, Sutton & Anderson). The state is a [`CartPoleState`].
//! -   **Pendulum:** [`Pendulum`] is a torque-driven swing-up pendulum with
//!     clipped angular velocity. The state is a [`PendulumState`].
//! -   **Integration:** [`Integrator`] selects explicit or semi-implicit Euler.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use physics::{CartPole, CartPoleConfig, CartPoleState};
//!
//! let mut cartpole = CartPole::new(CartPoleConfig::default());
//! cartpole.set_state(CartPoleState::new(0.0, 0.0, 0.02, 0.0));
//! cartpole.apply_force(1.0)?;
//! assert!(!cartpole.check_failure());
//! ```
//!
//! [`rl`]: ../rl/index.html

pub mod cartpole;
pub mod error;
pub mod integrator;
pub mod pendulum;
pub mod types;

pub use cartpole::{CartPole, CartPoleConfig};
pub use error::PhysicsError;
pub use integrator::Integrator;
pub use pendulum::{angle_normalize, Pendulum, PendulumConfig};
pub use types::{CartPoleState, PendulumState};
