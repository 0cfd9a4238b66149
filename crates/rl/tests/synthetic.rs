use rl::metrics::moving_average;
use rl::synthetic::{curriculum_curve, training_stages, SYNTHETIC_LABEL};

#[test]
fn curves_are_seeded() {
    assert_eq!(curriculum_curve(3, 1000), curriculum_curve(3, 1000));
    assert_ne!(curriculum_curve(3, 1000), curriculum_curve(4, 1000));
    assert_eq!(training_stages(9), training_stages(9));
}

#[test]
fn curves_are_labelled_synthetic() {
    assert!(curriculum_curve(0, 10).title.contains(SYNTHETIC_LABEL));
    for stage in training_stages(0) {
        assert!(stage.title.contains(SYNTHETIC_LABEL), "{}", stage.title);
    }
}

#[test]
fn curriculum_curve_shape() {
    let curve = curriculum_curve(1, 1000);
    assert_eq!(curve.len(), 1000);
    assert_eq!(curve.stage_boundaries, vec![200, 600]);
    let smoothed = moving_average(&curve.returns, curve.smoothing_window.unwrap());
    let start = smoothed.values[0];
    let end = *smoothed.values.last().unwrap();
    assert!(start < 0.0, "early returns start below zero, got {start}");
    assert!(end > 150.0, "late returns approach 200, got {end}");
}

#[test]
fn training_stage_shapes() {
    let [random, basic, randomized, robust] = training_stages(2);
    assert_eq!(random.len(), 1000);
    assert!(random.returns.iter().all(|r| (15.0..=25.0).contains(r)));
    assert_eq!(random.smoothing_window, None);

    assert_eq!(basic.len(), 250);
    assert_eq!(basic.smoothing_window, Some(20));
    assert_eq!(randomized.len(), 500);
    assert_eq!(randomized.smoothing_window, Some(30));

    assert_eq!(robust.len(), 1000);
    assert_eq!(robust.target, Some(450.0));
    let mean = robust.returns.iter().sum::<f32>() / robust.len() as f32;
    assert!((mean - 400.0).abs() < 5.0, "mean {mean}");
    assert!([&random, &basic, &randomized, &robust].iter().all(|c| c.y_limits == Some((0.0, 500.0))));
}
