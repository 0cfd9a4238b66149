#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
//! # Strider
//!
//! Demo and slide-figure scripts for a course on RL for bipedal locomotion.
//!
//! The heavy lifting lives in two crates:
//!
//! -   **[`rl`]:** environments, the episode rollout runner, metrics and the
//!     synthetic training curves.
//! -   **[`render`]:** PNG figures.
//!
//! This crate adds the [`config`], the console [`narration`] and the
//! [`demos`] that tie them together, plus the `strider` binary.

pub mod app;
pub mod config;
pub mod demos;
pub mod narration;

pub use app::{run, Command};
pub use config::{ConfigError, DemoConfig, Overrides};
