use approx::assert_relative_eq;
use physics::{angle_normalize, Pendulum, PendulumConfig, PendulumState, PhysicsError};
use std::f32::consts::PI;

#[test]
fn angle_normalize_wraps_into_half_open_range() {
    assert_relative_eq!(angle_normalize(0.0), 0.0);
    assert_relative_eq!(angle_normalize(PI + 0.5), -PI + 0.5, epsilon = 1e-5);
    assert_relative_eq!(angle_normalize(-PI - 0.5), PI - 0.5, epsilon = 1e-5);
    assert_relative_eq!(angle_normalize(4.0 * PI + 0.25), 0.25, epsilon = 1e-5);
}

#[test]
fn upright_pendulum_has_zero_cost() {
    let pendulum = Pendulum::new(PendulumConfig::default());
    assert_eq!(pendulum.cost(0.0), 0.0);
    assert_eq!(pendulum.observation(), [1.0, 0.0, 0.0]);
}

#[test]
fn hanging_pendulum_costs_pi_squared() {
    let mut pendulum = Pendulum::new(PendulumConfig::default());
    pendulum.set_state(PendulumState::new(PI, 0.0));
    assert_relative_eq!(pendulum.cost(0.0), PI * PI, epsilon = 1e-3);
}

#[test]
fn torque_and_speed_are_clipped() {
    let config = PendulumConfig::default();
    let mut pendulum = Pendulum::new(config.clone());
    pendulum.set_state(PendulumState::new(0.0, config.max_speed));
    let next = pendulum.apply_torque(100.0).unwrap();
    assert_eq!(next.theta_dot, config.max_speed);

    let torque_cost = pendulum.cost(100.0) - pendulum.cost(0.0);
    assert_relative_eq!(torque_cost, 0.001 * config.max_torque * config.max_torque, epsilon = 1e-4);
}

#[test]
fn small_offset_falls_away_from_upright() {
    let mut pendulum = Pendulum::new(PendulumConfig::default());
    pendulum.set_state(PendulumState::new(0.1, 0.0));
    for _ in 0..10 {
        pendulum.apply_torque(0.0).unwrap();
    }
    assert!(pendulum.state().theta > 0.1);
}

#[test]
fn invalid_time_step_is_rejected() {
    let config = PendulumConfig { dt: f32::NAN, ..Default::default() };
    let mut pendulum = Pendulum::new(config);
    assert!(matches!(pendulum.apply_torque(0.0), Err(PhysicsError::InvalidTimeStep(_))));
}
