#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::must_use_candidate
)]
//! # Strider RL
//!
//! The environment protocol and the episode rollout runner.
//!
//! An [`Env`] is a black box exposing `reset`, `step` and `close`. The
//! [`runner`] drives one against a [`Policy`] and records an immutable
//! [`EpisodeTrace`]. Everything downstream (cumulative reward, smoothing,
//! histograms) is a derived view in [`metrics`].
//!
//! ## Modules
//!
//! -   [`env`], [`space`]: the protocol types.
//! -   [`envs`], [`wrappers`], [`registry`]: the bundled environments and how
//!     they are constructed by id, including the narrow fallback used when an
//!     optional environment is not part of the build.
//! -   [`policy`]: fixed-rule, uniform-random and closure policies.
//! -   [`trace`], [`runner`]: the rollout loop and its output.
//! -   [`metrics`], [`synthetic`]: post-hoc aggregation and seeded placeholder
//!     training curves.

pub mod env;
pub mod envs;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod registry;
mod rng;
pub mod runner;
pub mod space;
pub mod synthetic;
pub mod trace;
pub mod wrappers;

pub use env::{Env, Info, Observation, Step};
pub use error::{EnvError, MakeError, RolloutError};
pub use policy::{Policy, RandomPolicy, ThresholdPolicy};
pub use registry::{make, make_with_fallback, Made};
pub use runner::{run_episode, run_episodes, EndReason, Rollout, RolloutConfig};
pub use space::{Action, Space};
pub use trace::{EpisodeTrace, TraceBuilder};
