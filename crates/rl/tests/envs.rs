use rl::envs::{CartPoleEnv, PendulumEnv};
use rl::wrappers::TimeLimit;
use rl::{Action, Env, EnvError, Space};

#[test]
fn cartpole_reset_is_small_and_seeded() {
    let mut env = CartPoleEnv::default();
    let (a, _) = env.reset(Some(42)).unwrap();
    let (b, _) = env.reset(Some(42)).unwrap();
    let (c, _) = env.reset(Some(43)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 4);
    assert!(a.iter().all(|v| v.abs() <= 0.05));
}

#[test]
fn cartpole_spaces() {
    let env = CartPoleEnv::default();
    assert_eq!(env.action_space(), Space::Discrete(2));
    assert_eq!(env.observation_space().dim(), 4);
    assert_eq!(env.id(), "CartPole-v1");
}

#[test]
fn cartpole_requires_reset_before_step() {
    let mut env = CartPoleEnv::default();
    assert_eq!(env.step(&Action::Discrete(0)), Err(EnvError::NeedsReset));
}

#[test]
fn cartpole_rejects_invalid_actions() {
    let mut env = CartPoleEnv::default();
    env.reset(Some(0)).unwrap();
    assert!(matches!(env.step(&Action::Discrete(2)), Err(EnvError::InvalidAction { .. })));
    assert!(matches!(
        env.step(&Action::Continuous(vec![1.0])),
        Err(EnvError::InvalidAction { .. })
    ));
}

#[test]
fn cartpole_terminates_and_then_needs_reset() {
    let mut env = CartPoleEnv::default();
    env.reset(Some(1)).unwrap();
    let mut steps = 0;
    let last = loop {
        let step = env.step(&Action::Discrete(1)).unwrap();
        steps += 1;
        assert_eq!(step.reward, 1.0);
        if step.terminated || steps > 500 {
            break step;
        }
    };
    assert!(last.terminated, "always pushing right must topple the pole");
    assert!(!last.truncated);
    assert_eq!(env.step(&Action::Discrete(1)), Err(EnvError::NeedsReset));
}

#[test]
fn time_limit_truncates_and_reports_elapsed_steps() {
    let mut env = TimeLimit::new(PendulumEnv::default(), 3);
    env.reset(Some(0)).unwrap();
    let zero = Action::Continuous(vec![0.0]);
    for expected in 1..=3 {
        let step = env.step(&zero).unwrap();
        assert_eq!(step.info["elapsed_steps"], f64::from(expected));
        assert_eq!(step.truncated, expected == 3);
        assert!(!step.terminated);
    }
    assert_eq!(env.step(&zero), Err(EnvError::NeedsReset));

    env.reset(None).unwrap();
    assert_eq!(env.elapsed_steps(), 0);
    assert!(env.step(&zero).is_ok());
}

#[test]
fn pendulum_rewards_are_never_positive() {
    let mut env = PendulumEnv::default();
    let (obs, _) = env.reset(Some(8)).unwrap();
    assert_eq!(obs.len(), 3);
    assert!((obs[0] * obs[0] + obs[1] * obs[1] - 1.0).abs() < 1e-5);
    for i in 0..50 {
        let torque = if i % 2 == 0 { 2.0 } else { -2.0 };
        let step = env.step(&Action::Continuous(vec![torque])).unwrap();
        assert!(step.reward <= 0.0);
        assert!(step.observation[2].abs() <= 8.0);
    }
}

#[test]
fn pendulum_rejects_out_of_range_torque() {
    let mut env = PendulumEnv::default();
    env.reset(Some(0)).unwrap();
    let err = env.step(&Action::Continuous(vec![3.0])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "action [3.000] is not contained in Box(-2.0, 2.0, (1,))"
    );
}
