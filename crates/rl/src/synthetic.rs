//! Synthetic training curves for slides.
//!
//! **None of this comes from training.** These are shaped noise curves that
//! stand in for a real training run in presentation figures. Every generator
//! takes an explicit seed, and every curve carries [`SYNTHETIC_LABEL`] in its
//! title so a figure cannot be mistaken for measured data.

use crate::rng;

pub const SYNTHETIC_LABEL: &str = "synthetic";

/// Placeholder per-episode returns, plotted against the episode index.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticCurve {
    pub title: String,
    pub returns: Vec<f32>,
    /// Moving-average window drawn over the raw curve.
    pub smoothing_window: Option<usize>,
    /// Horizontal target line.
    pub target: Option<f32>,
    /// Episode indices where a curriculum stage changes.
    pub stage_boundaries: Vec<usize>,
    /// Fixed y-axis range shared by related panels.
    pub y_limits: Option<(f32, f32)>,
}

impl SyntheticCurve {
    fn new(title: &str, returns: Vec<f32>) -> Self {
        Self {
            title: format!("{title} ({SYNTHETIC_LABEL})"),
            returns,
            smoothing_window: None,
            target: None,
            stage_boundaries: Vec::new(),
            y_limits: None,
        }
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// `offset + scale * (1 - exp(-e / tau)) + N(0, sigma)` for `e` in `0..episodes`.
fn saturating_curve(
    rng: &mut fastrand::Rng,
    episodes: usize,
    offset: f32,
    scale: f32,
    tau: f32,
    sigma: f32,
) -> Vec<f32> {
    (0..episodes)
        .map(|e| offset + scale * (1.0 - (-(e as f32) / tau).exp()) + rng::standard_normal(rng) * sigma)
        .collect()
}

/// Three-stage curriculum learning curve with boundaries at episodes 200 and
/// 600, smoothed over 50 episodes.
pub fn curriculum_curve(seed: u64, episodes: usize) -> SyntheticCurve {
    let mut rng = fastrand::Rng::with_seed(seed);
    let returns = saturating_curve(&mut rng, episodes, -100.0, 300.0, 200.0, 20.0);
    SyntheticCurve {
        smoothing_window: Some(50),
        stage_boundaries: vec![200, 600],
        ..SyntheticCurve::new("Training Progress: Curriculum Learning", returns)
    }
}

/// The four panels of the staged training figure: random policy, basic skill
/// learning, task randomization, robust performance.
pub fn training_stages(seed: u64) -> [SyntheticCurve; 4] {
    let mut rng = fastrand::Rng::with_seed(seed);
    let limits = Some((0.0, 500.0));

    let random = (0..1000).map(|_| rng::uniform(&mut rng, 15.0, 25.0)).collect();
    let basic = saturating_curve(&mut rng, 250, 20.0, 180.0, 50.0, 10.0);
    let randomized = saturating_curve(&mut rng, 500, 200.0, 200.0, 100.0, 15.0);
    let robust = (0..1000).map(|_| 400.0 + rng::standard_normal(&mut rng) * 20.0).collect();

    [
        SyntheticCurve { y_limits: limits, ..SyntheticCurve::new("Stage 0: Random Policy", random) },
        SyntheticCurve {
            smoothing_window: Some(20),
            y_limits: limits,
            ..SyntheticCurve::new("Stage 1: Basic Skill Learning", basic)
        },
        SyntheticCurve {
            smoothing_window: Some(30),
            y_limits: limits,
            ..SyntheticCurve::new("Stage 2: Task Randomization", randomized)
        },
        SyntheticCurve {
            smoothing_window: Some(50),
            target: Some(450.0),
            y_limits: limits,
            ..SyntheticCurve::new("Stage 3: Robust Performance", robust)
        },
    ]
}
