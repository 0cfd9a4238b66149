//! Policies map the latest observation to an action.
//!
//! The runner treats a policy as a function of the current observation only.
//! `act` takes `&mut self` so samplers can advance their random source, but
//! nothing about earlier observations is required to be kept.

use crate::space::{Action, Space};

pub trait Policy {
    fn act(&mut self, observation: &[f32]) -> Action;
}

impl<F> Policy for F
where
    F: FnMut(&[f32]) -> Action,
{
    fn act(&mut self, observation: &[f32]) -> Action {
        self(observation)
    }
}

/// Fixed rule on one observation component: `above` when
/// `observation[index] > threshold`, `below` otherwise.
///
/// A missing component counts as not above the threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdPolicy {
    pub index: usize,
    pub threshold: f32,
    pub above: Action,
    pub below: Action,
}

impl ThresholdPolicy {
    pub fn new(index: usize, threshold: f32, above: Action, below: Action) -> Self {
        Self { index, threshold, above, below }
    }

    /// Push the cart towards the side the pole leans to: action `1` if the
    /// pole angle (`observation[2]`) is positive, else `0`.
    pub fn cartpole_tilt() -> Self {
        Self::new(2, 0.0, Action::Discrete(1), Action::Discrete(0))
    }
}

impl Policy for ThresholdPolicy {
    fn act(&mut self, observation: &[f32]) -> Action {
        match observation.get(self.index) {
            Some(&value) if value > self.threshold => self.above.clone(),
            _ => self.below.clone(),
        }
    }
}

/// Uniform sampler over an action space.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    space: Space,
    rng: fastrand::Rng,
}

impl RandomPolicy {
    /// A sampler seeded with `seed`, or from entropy when `None`.
    pub fn new(space: Space, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        Self { space, rng }
    }

    pub fn space(&self) -> &Space {
        &self.space
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &[f32]) -> Action {
        self.space.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_policy_follows_pole_angle() {
        let mut policy = ThresholdPolicy::cartpole_tilt();
        assert_eq!(policy.act(&[0.0, 0.0, 0.01, 0.0]), Action::Discrete(1));
        assert_eq!(policy.act(&[0.0, 0.0, 0.0, 0.0]), Action::Discrete(0));
        assert_eq!(policy.act(&[0.0, 0.0, -0.01, 0.0]), Action::Discrete(0));
        assert_eq!(policy.act(&[0.5]), Action::Discrete(0));
    }

    #[test]
    fn closures_are_policies() {
        let mut calls = 0;
        let mut policy = |obs: &[f32]| {
            calls += 1;
            Action::Continuous(vec![obs[0] * 2.0])
        };
        assert_eq!(policy.act(&[1.5]), Action::Continuous(vec![3.0]));
        assert_eq!(calls, 1);
    }

    #[test]
    fn seeded_random_policies_agree() {
        let mut a = RandomPolicy::new(Space::Discrete(4), Some(9));
        let mut b = RandomPolicy::new(Space::Discrete(4), Some(9));
        let xs: Vec<_> = (0..32).map(|_| a.act(&[])).collect();
        let ys: Vec<_> = (0..32).map(|_| b.act(&[])).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|x| a.space().contains(x)));
    }
}
