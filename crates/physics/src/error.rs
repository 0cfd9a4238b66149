use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The integrator produced a NaN or infinite state component.
    #[error("non-finite {system} state after integration: {state:?}")]
    NonFinite {
        system: &'static str,
        state: Vec<f32>,
    },
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f32),
}
