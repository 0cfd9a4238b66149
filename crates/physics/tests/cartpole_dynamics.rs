//! Tests for CartPole physics behavior

use approx::assert_relative_eq;
use physics::{CartPole, CartPoleConfig, CartPoleState, Integrator};

#[test]
fn tilted_pole_falls_without_control() {
    let mut cartpole = CartPole::new(CartPoleConfig::default());
    cartpole.set_state(CartPoleState::new(0.0, 0.0, 0.05, 0.0));

    let mut steps = 0;
    while !cartpole.check_failure() && steps < 200 {
        cartpole.apply_force(0.0).unwrap();
        steps += 1;
    }
    assert!(cartpole.check_failure(), "pole should fall over without intervention");
    assert!(cartpole.state().theta > 0.0, "pole falls in the direction it leans");
}

#[test]
fn pushing_right_accelerates_cart_right_and_tips_pole_left() {
    let mut cartpole = CartPole::new(CartPoleConfig::default());
    // Euler moves position with the old velocity, so velocities change first.
    let first = cartpole.apply_force(1.0).unwrap();
    assert_eq!(first.x, 0.0);
    assert!(first.x_dot > 0.0);
    assert!(first.theta_dot < 0.0);

    let second = cartpole.apply_force(1.0).unwrap();
    assert!(second.x > 0.0);
    assert!(second.theta < 0.0);
}

#[test]
fn first_step_matches_hand_computed_dynamics() {
    let config = CartPoleConfig::default();
    let mut cartpole = CartPole::new(config.clone());
    let next = cartpole.apply_force(1.0).unwrap();

    // theta = 0: temp = F / M, theta_acc = -temp / (l * (4/3 - m / M))
    let total = config.total_mass();
    let temp = config.force_magnitude / total;
    let theta_acc = -temp / (config.pole_half_length * (4.0 / 3.0 - config.pole_mass / total));
    let x_acc = temp - config.pole_mass_length() * theta_acc / total;

    assert_relative_eq!(next.x_dot, config.tau * x_acc, epsilon = 1e-6);
    assert_relative_eq!(next.theta_dot, config.tau * theta_acc, epsilon = 1e-6);
}

#[test]
fn failure_thresholds() {
    let config = CartPoleConfig::default();
    let mut cartpole = CartPole::new(config.clone());

    cartpole.set_state(CartPoleState::new(config.position_limit - 0.01, 0.0, 0.0, 0.0));
    assert!(!cartpole.check_failure());
    cartpole.set_state(CartPoleState::new(-config.position_limit - 0.01, 0.0, 0.0, 0.0));
    assert!(cartpole.check_failure());

    cartpole.set_state(CartPoleState::new(0.0, 0.0, config.failure_angle + 0.001, 0.0));
    assert!(cartpole.check_failure());
    assert_relative_eq!(config.failure_angle, 0.209_439_5, epsilon = 1e-6);
}

#[test]
fn semi_implicit_integrator_moves_cart_on_first_step() {
    let config = CartPoleConfig { integrator: Integrator::SemiImplicitEuler, ..Default::default() };
    let mut cartpole = CartPole::new(config);
    let next = cartpole.apply_force(1.0).unwrap();
    assert!(next.x > 0.0);
}

#[test]
fn state_round_trips_through_array_layout() {
    let state = CartPoleState::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(state.to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(CartPoleState::from_array([1.0, 2.0, 3.0, 4.0]), state);
}

#[test]
fn identical_inputs_give_identical_trajectories() {
    let run = || {
        let mut cartpole = CartPole::new(CartPoleConfig::default());
        cartpole.set_state(CartPoleState::new(0.01, -0.02, 0.03, 0.04));
        (0..50)
            .map(|i| cartpole.apply_force(if i % 3 == 0 { 1.0 } else { -1.0 }).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
