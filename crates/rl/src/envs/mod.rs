//! Environments bundled with the workspace.

pub mod cartpole;
pub mod pendulum;

pub use cartpole::CartPoleEnv;
pub use pendulum::PendulumEnv;
