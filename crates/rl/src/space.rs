//! Action and observation spaces.

use crate::rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single action handed to [`Env::step`](crate::Env::step).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    /// Index into a [`Space::Discrete`].
    Discrete(usize),
    /// Point in a [`Space::Box`].
    Continuous(Vec<f32>),
}

impl Action {
    /// Scalar view used for plotting: the index of a discrete action or the
    /// first component of a continuous one (`NaN` when empty).
    pub fn as_scalar(&self) -> f32 {
        match self {
            Action::Discrete(i) => *i as f32,
            Action::Continuous(v) => v.first().copied().unwrap_or(f32::NAN),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Discrete(i) => write!(f, "{i}"),
            Action::Continuous(v) => {
                write!(f, "[")?;
                for (i, x) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{x:.3}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// The set of valid actions or observations of an environment.
#[derive(Clone, Debug, PartialEq)]
pub enum Space {
    /// `{0, 1, ..., n - 1}`
    Discrete(usize),
    /// Per-dimension closed intervals. Bounds may be infinite.
    Box { low: Vec<f32>, high: Vec<f32> },
}

impl Space {
    /// A box with the same bounds in every dimension.
    pub fn bounded(low: f32, high: f32, dim: usize) -> Self {
        Space::Box { low: vec![low; dim], high: vec![high; dim] }
    }

    /// A box with explicit per-dimension bounds.
    ///
    /// # Panics
    ///
    /// Panics if `low` and `high` have different lengths.
    pub fn from_bounds(low: Vec<f32>, high: Vec<f32>) -> Self {
        assert_eq!(low.len(), high.len(), "box bounds must have the same dimension");
        Space::Box { low, high }
    }

    /// Number of components of an element: 1 for discrete spaces.
    pub fn dim(&self) -> usize {
        match self {
            Space::Discrete(_) => 1,
            Space::Box { low, .. } => low.len(),
        }
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self, Space::Discrete(_))
    }

    pub fn contains(&self, action: &Action) -> bool {
        match (self, action) {
            (Space::Discrete(n), Action::Discrete(i)) => i < n,
            (Space::Box { low, high }, Action::Continuous(v)) => {
                v.len() == low.len()
                    && v.iter()
                        .zip(low.iter().zip(high))
                        .all(|(x, (lo, hi))| !x.is_nan() && x >= lo && x <= hi)
            }
            _ => false,
        }
    }

    /// Draw a uniformly distributed element.
    ///
    /// Unbounded box dimensions are sampled from a standard normal, shifted
    /// onto the bounded side when only one bound is finite.
    ///
    /// # Panics
    ///
    /// Panics when sampling from `Discrete(0)`.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Action {
        match self {
            Space::Discrete(n) => Action::Discrete(rng.usize(..*n)),
            Space::Box { low, high } => Action::Continuous(
                low.iter()
                    .zip(high)
                    .map(|(&lo, &hi)| match (lo.is_finite(), hi.is_finite()) {
                        (true, true) => rng::uniform(rng, lo, hi),
                        (true, false) => lo + rng::standard_normal(rng).abs(),
                        (false, true) => hi - rng::standard_normal(rng).abs(),
                        (false, false) => rng::standard_normal(rng),
                    })
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Discrete(n) => write!(f, "Discrete({n})"),
            Space::Box { low, high } => {
                let uniform = |v: &[f32]| v.windows(2).all(|w| w[0] == w[1]);
                match (low.first(), high.first()) {
                    (Some(lo), Some(hi)) if uniform(low) && uniform(high) => {
                        write!(f, "Box({lo:?}, {hi:?}, ({},))", low.len())
                    }
                    _ => write!(f, "Box({low:?}, {high:?}, ({},))", low.len()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discrete_contains_only_valid_indices() {
        let space = Space::Discrete(2);
        assert!(space.contains(&Action::Discrete(0)));
        assert!(space.contains(&Action::Discrete(1)));
        assert!(!space.contains(&Action::Discrete(2)));
        assert!(!space.contains(&Action::Continuous(vec![0.0])));
    }

    #[test]
    fn box_checks_dimension_bounds_and_nan() {
        let space = Space::bounded(-2.0, 2.0, 1);
        assert!(space.contains(&Action::Continuous(vec![2.0])));
        assert!(!space.contains(&Action::Continuous(vec![2.5])));
        assert!(!space.contains(&Action::Continuous(vec![f32::NAN])));
        assert!(!space.contains(&Action::Continuous(vec![0.0, 0.0])));
        assert!(!space.contains(&Action::Discrete(0)));
    }

    #[test]
    fn samples_are_contained_and_seeded() {
        let spaces = [
            Space::Discrete(3),
            Space::bounded(-2.0, 2.0, 2),
            Space::from_bounds(vec![0.0, f32::NEG_INFINITY], vec![f32::INFINITY, f32::INFINITY]),
        ];
        for space in &spaces {
            let mut a = fastrand::Rng::with_seed(11);
            let mut b = fastrand::Rng::with_seed(11);
            for _ in 0..200 {
                let action = space.sample(&mut a);
                assert!(space.contains(&action), "{action} not in {space}");
                assert_eq!(action, space.sample(&mut b));
            }
        }
    }

    #[test]
    fn display_matches_gym_style() {
        assert_eq!(Space::Discrete(2).to_string(), "Discrete(2)");
        assert_eq!(Space::bounded(-2.0, 2.0, 1).to_string(), "Box(-2.0, 2.0, (1,))");
        assert_eq!(
            Space::from_bounds(vec![-1.0, f32::NEG_INFINITY], vec![1.0, f32::INFINITY]).to_string(),
            "Box([-1.0, -inf], [1.0, inf], (2,))"
        );
    }

    #[test]
    fn action_scalar_view() {
        assert_eq!(Action::Discrete(1).as_scalar(), 1.0);
        assert_eq!(Action::Continuous(vec![0.5, 3.0]).as_scalar(), 0.5);
        assert!(Action::Continuous(vec![]).as_scalar().is_nan());
    }
}
