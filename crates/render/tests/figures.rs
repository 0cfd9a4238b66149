use render::canvas;
use render::figures::{self, ARCHITECTURE_DIAGRAM};
use render::{Figure, RenderError, TextPanel};
use rl::registry::CART_POLE;
use rl::synthetic::{curriculum_curve, training_stages};
use rl::{make, run_episode, RolloutConfig, ThresholdPolicy};

fn cartpole_rollout() -> (rl::Rollout, rl::Space) {
    let mut env = make(CART_POLE).unwrap();
    let space = env.action_space();
    let rollout = run_episode(&mut env, &mut ThresholdPolicy::cartpole_tilt(), RolloutConfig::new(Some(42), 500)).unwrap();
    (rollout, space)
}

#[test]
fn episode_report_saves_png() {
    let (rollout, space) = cartpole_rollout();
    let figure = figures::episode_report(CART_POLE, &rollout, &space);
    assert_eq!(figure.panel_count(), 6);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("complete_demo.png");
    figure.save(&path).unwrap();

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (1400, 1000));
    assert!(image.pixels().any(|p| *p == canvas::ORANGE));
    assert!(image.pixels().any(|p| *p == canvas::faded(canvas::PURPLE, 0.7)));
}

#[test]
fn training_figures_render() {
    let stages = training_stages(7);
    let image = figures::training_stages(&stages).render().unwrap();
    assert_eq!(image.dimensions(), (1200, 800));
    assert!(image.pixels().any(|p| *p == canvas::DARK_GREEN));

    let curve = curriculum_curve(7, 1000);
    let image = figures::training_curve(&curve).render().unwrap();
    assert_eq!(image.dimensions(), (1000, 600));
    assert!(image.pixels().any(|p| *p == canvas::DARK_BLUE));
}

#[test]
fn architecture_diagram_saves_into_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slides").join("architecture.png");
    figures::architecture().save(&path).unwrap();
    assert!(path.exists());
    assert!(ARCHITECTURE_DIAGRAM.lines().count() > 10);
}

#[test]
fn saving_empty_figure_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.png");
    let err = Figure::new(100, 100, 1, 1).save(&path).unwrap_err();
    assert!(matches!(err, RenderError::EmptyFigure));
    assert!(!path.exists());
}

#[test]
fn unwritable_path_reports_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let mut figure = Figure::new(50, 50, 1, 1);
    figure.place(0, 0, TextPanel::new("x"));
    assert!(figure.save(blocker.join("out.png")).is_err());
}
