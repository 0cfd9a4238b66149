/// State of a cart-pole system.
///
/// Laid out as `[x, x_dot, theta, theta_dot]` so it can be handed out as an
/// observation vector without reshuffling.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CartPoleState {
    /// Cart position in meters, positive to the right.
    pub x: f32,
    /// Cart velocity in meters per second.
    pub x_dot: f32,
    /// Pole angle from vertical in radians, positive when leaning right.
    pub theta: f32,
    /// Pole angular velocity in radians per second.
    pub theta_dot: f32,
}

impl CartPoleState {
    #[must_use]
    pub const fn new(x: f32, x_dot: f32, theta: f32, theta_dot: f32) -> Self {
        Self { x, x_dot, theta, theta_dot }
    }

    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }

    #[must_use]
    pub fn from_array(values: [f32; 4]) -> Self {
        bytemuck::cast(values)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

/// State of a torque-driven pendulum.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PendulumState {
    /// Angle in radians, zero pointing straight up.
    pub theta: f32,
    /// Angular velocity in radians per second.
    pub theta_dot: f32,
}

impl PendulumState {
    #[must_use]
    pub const fn new(theta: f32, theta_dot: f32) -> Self {
        Self { theta, theta_dot }
    }

    #[must_use]
    pub fn to_array(self) -> [f32; 2] {
        bytemuck::cast(self)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.theta_dot.is_finite()
    }
}
