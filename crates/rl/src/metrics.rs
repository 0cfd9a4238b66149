//! Post-hoc aggregation over finished rollouts.
//!
//! Everything here is a pure function of its input; calling it twice on the
//! same trace gives the same result.

use crate::env::Observation;
use crate::runner::{EndReason, Rollout};
use serde::Serialize;

/// Running total: `out[k] = values[0] + ... + values[k]`.
pub fn cumulative_sum(values: &[f32]) -> Vec<f32> {
    values
        .iter()
        .scan(0.0_f32, |total, v| {
            *total += v;
            Some(*total)
        })
        .collect()
}

/// Output of [`moving_average`].
#[derive(Clone, Debug, PartialEq)]
pub struct Smoothed {
    /// Index of the input sample the first output value lines up with.
    pub offset: usize,
    pub values: Vec<f32>,
}

impl Smoothed {
    /// `(x, y)` pairs aligned to the input's indices.
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i + self.offset) as f32, v))
    }
}

/// Uniform-window moving average keeping only full windows.
///
/// The output has `values.len() - window + 1` entries, the first aligned with
/// input index `window - 1`. A zero window or one longer than the input yields
/// no values.
pub fn moving_average(values: &[f32], window: usize) -> Smoothed {
    let offset = window.saturating_sub(1);
    if window == 0 || window > values.len() {
        return Smoothed { offset, values: Vec::new() };
    }
    let scale = 1.0 / window as f32;
    let values = values
        .windows(window)
        .map(|w| w.iter().sum::<f32>() * scale)
        .collect();
    Smoothed { offset, values }
}

pub fn mean(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f32>() / values.len() as f32)
    }
}

/// One component of every observation, in order.
///
/// Observations too short to have `index` are skipped.
pub fn column(observations: &[Observation], index: usize) -> Vec<f32> {
    observations.iter().filter_map(|o| o.get(index).copied()).collect()
}

/// Equal-width histogram.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f32>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin the finite entries of `values` into `bins` equal-width bins over
    /// their range. The last bin includes its right edge.
    ///
    /// A zero-width range is widened to `[v - 0.5, v + 0.5]`; no finite
    /// values at all gives the range `[0, 1]`.
    pub fn new(values: &[f32], bins: usize) -> Self {
        let finite: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let (mut lo, mut hi) = finite
            .iter()
            .fold(None, |range: Option<(f32, f32)>, &v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins.max(1) as f32;
        let edges = (0..=bins).map(|i| lo + width * i as f32).collect();
        let mut counts = vec![0; bins];
        if bins > 0 {
            for v in finite {
                let bin = (((v - lo) / width) as usize).min(bins - 1);
                counts[bin] += 1;
            }
        }
        Self { edges, counts }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Headline numbers of one rollout.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub total_reward: f32,
    pub steps: usize,
    pub end_reason: EndReason,
}

impl EpisodeSummary {
    /// An episode lasting longer than this counts as balanced.
    pub const SUCCESS_STEPS: usize = 100;

    pub fn from_rollout(rollout: &Rollout) -> Self {
        Self {
            total_reward: rollout.trace.total_reward(),
            steps: rollout.steps,
            end_reason: rollout.end_reason,
        }
    }

    pub fn is_success(&self) -> bool {
        self.steps > Self::SUCCESS_STEPS
    }
}
