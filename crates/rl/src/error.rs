use crate::space::{Action, Space};
use physics::PhysicsError;
use thiserror::Error;

/// Failure to construct an environment by id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MakeError {
    #[error("unknown environment id `{0}`")]
    UnknownId(String),
    /// The id is known but its backend is not part of this build.
    #[error("environment `{id}` is unavailable: {reason}")]
    Unavailable { id: String, reason: &'static str },
}

/// Failure raised by an environment's `reset` or `step`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("no episode in progress; call reset before stepping")]
    NeedsReset,
    #[error("action {action} is not contained in {space}")]
    InvalidAction { action: Action, space: Space },
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}

/// Failure of a rollout. The partial trace is discarded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RolloutError {
    #[error("environment reset failed")]
    Reset(#[source] EnvError),
    /// `step` is the zero-based index of the step that failed.
    #[error("environment step {step} failed")]
    Step {
        step: usize,
        #[source]
        source: EnvError,
    },
}

impl RolloutError {
    /// The environment error behind this failure.
    pub fn env_error(&self) -> &EnvError {
        match self {
            RolloutError::Reset(source) | RolloutError::Step { source, .. } => source,
        }
    }
}
