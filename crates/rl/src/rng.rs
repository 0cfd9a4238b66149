//! Sampling helpers on top of `fastrand`.

/// Standard normal sample via the Box-Muller transform.
pub(crate) fn standard_normal(rng: &mut fastrand::Rng) -> f32 {
    // 1 - u keeps the log argument in (0, 1]
    let u1 = 1.0 - rng.f64();
    let u2 = rng.f64();
    ((-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()) as f32
}

/// Uniform sample in `[low, high)`.
pub(crate) fn uniform(rng: &mut fastrand::Rng, low: f32, high: f32) -> f32 {
    low + rng.f32() * (high - low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_samples_have_unit_scale() {
        let mut rng = fastrand::Rng::with_seed(7);
        let samples: Vec<f32> = (0..20_000).map(|_| standard_normal(&mut rng)).collect();
        let mean = samples.iter().sum::<f32>() / samples.len() as f32;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f32>() / samples.len() as f32;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..1000 {
            let v = uniform(&mut rng, -0.05, 0.05);
            assert!((-0.05..0.05).contains(&v));
        }
    }
}
