//! Construct environments by id.
//!
//! Known ids are listed in [`registered_ids`]. Some ids are known but not
//! buildable here (they need a simulation backend this workspace does not
//! ship); constructing one fails with [`MakeError::Unavailable`], and that is
//! the only error [`make_with_fallback`] recovers from.

use crate::env::Env;
use crate::envs::{CartPoleEnv, PendulumEnv};
use crate::error::MakeError;
use crate::wrappers::TimeLimit;

pub const CART_POLE: &str = CartPoleEnv::ID;
pub const PENDULUM: &str = PendulumEnv::ID;
pub const BIPEDAL_WALKER: &str = "BipedalWalker-v3";

#[derive(Clone, Copy, Debug)]
enum Entry {
    Builtin {
        id: &'static str,
        max_episode_steps: usize,
        build: fn(usize) -> Box<dyn Env>,
    },
    Unavailable { id: &'static str, reason: &'static str },
}

impl Entry {
    fn id(self) -> &'static str {
        match self {
            Entry::Builtin { id, .. } | Entry::Unavailable { id, .. } => id,
        }
    }
}

fn cart_pole(max_episode_steps: usize) -> Box<dyn Env> {
    Box::new(TimeLimit::new(CartPoleEnv::default(), max_episode_steps))
}

fn pendulum(max_episode_steps: usize) -> Box<dyn Env> {
    Box::new(TimeLimit::new(PendulumEnv::default(), max_episode_steps))
}

const REGISTRY: &[Entry] = &[
    Entry::Builtin { id: CART_POLE, max_episode_steps: 500, build: cart_pole },
    Entry::Builtin { id: PENDULUM, max_episode_steps: 200, build: pendulum },
    Entry::Unavailable {
        id: BIPEDAL_WALKER,
        reason: "requires a Box2D backend, which is not part of this build",
    },
];

/// All ids [`make`] recognizes, buildable or not.
pub fn registered_ids() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|entry| entry.id())
}

/// Step limit the registry applies to `id`, if it is buildable.
pub fn max_episode_steps(id: &str) -> Option<usize> {
    REGISTRY.iter().find_map(|entry| match *entry {
        Entry::Builtin { id: known, max_episode_steps, .. } if known == id => Some(max_episode_steps),
        _ => None,
    })
}

/// Build the environment registered as `id`, wrapped in its time limit.
///
/// # Errors
///
/// [`MakeError::UnknownId`] for ids not in the registry and
/// [`MakeError::Unavailable`] for known ids that cannot be built here.
pub fn make(id: &str) -> Result<Box<dyn Env>, MakeError> {
    let entry = REGISTRY
        .iter()
        .find(|entry| entry.id() == id)
        .ok_or_else(|| MakeError::UnknownId(id.to_owned()))?;

    match *entry {
        Entry::Builtin { id, max_episode_steps, build } => {
            tracing::debug!(id, max_episode_steps, "constructing environment");
            Ok(build(max_episode_steps))
        }
        Entry::Unavailable { id, reason } => Err(MakeError::Unavailable { id: id.to_owned(), reason }),
    }
}

/// An environment built by [`make_with_fallback`].
pub struct Made {
    pub env: Box<dyn Env>,
    /// `Some` with the reason when the preferred id was unavailable.
    pub fallback_reason: Option<MakeError>,
}

impl Made {
    pub fn used_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Build `preferred`, or `fallback` if `preferred` is unavailable in this
/// build.
///
/// Only [`MakeError::Unavailable`] triggers the fallback; an unknown preferred
/// id is a caller bug and is returned as is.
///
/// # Errors
///
/// Returns the preferred id's error when it is not `Unavailable`, or the
/// fallback's error when the fallback cannot be built either.
pub fn make_with_fallback(preferred: &str, fallback: &str) -> Result<Made, MakeError> {
    match make(preferred) {
        Ok(env) => Ok(Made { env, fallback_reason: None }),
        Err(err @ MakeError::Unavailable { .. }) => {
            tracing::warn!(%err, fallback, "falling back to an available environment");
            let env = make(fallback)?;
            Ok(Made { env, fallback_reason: Some(err) })
        }
        Err(err) => Err(err),
    }
}
