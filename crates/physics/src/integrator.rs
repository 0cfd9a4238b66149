//! # Numerical Integration
//!
//! One-step integrators for a single degree of freedom. The cart-pole
//! integrates its two coordinates independently with the same scheme.

/// Integration scheme for advancing `(position, velocity)` by one step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Integrator {
    /// Position uses the old velocity, then velocity is updated.
    #[default]
    Euler,
    /// Velocity is updated first and the new velocity moves the position.
    SemiImplicitEuler,
}

impl Integrator {
    /// Advance `(position, velocity)` under a constant `acceleration` for `dt`.
    #[must_use]
    pub fn integrate(self, position: f32, velocity: f32, acceleration: f32, dt: f32) -> (f32, f32) {
        match self {
            Integrator::Euler => (position + dt * velocity, velocity + dt * acceleration),
            Integrator::SemiImplicitEuler => {
                let velocity = velocity + dt * acceleration;
                (position + dt * velocity, velocity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_moves_with_old_velocity() {
        let (x, v) = Integrator::Euler.integrate(0.0, 1.0, 2.0, 0.5);
        assert_eq!(x, 0.5);
        assert_eq!(v, 2.0);
    }

    #[test]
    fn semi_implicit_moves_with_new_velocity() {
        let (x, v) = Integrator::SemiImplicitEuler.integrate(0.0, 1.0, 2.0, 0.5);
        assert_eq!(v, 2.0);
        assert_eq!(x, 1.0);
    }
}
