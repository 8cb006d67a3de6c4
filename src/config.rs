//! Global parameters read by every sub-step.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::integrator::Integrator;
use crate::vec::{Planar, Vec};

/// Parameters of the mass-spring simulation.
///
/// Passed by reference into each driver call; edits made between calls take
/// effect at the start of the next one.
///
/// # Builder Pattern
/// ```
/// use springnet::config::SimConfig;
/// use springnet::integrator::Integrator;
/// use springnet::vec::Vec3;
///
/// let config: SimConfig<Vec3<f32>> = SimConfig::new()
///     .with_mass(0.01)
///     .with_gravity(Vec3::new(0.0, -9.8, 0.0))
///     .with_point_damping(true)
///     .with_method(Integrator::Midpoint)
///     .with_sub_steps(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: serde::Serialize, V::Scalar: serde::Serialize",
        deserialize = "V: serde::Deserialize<'de>, V::Scalar: serde::Deserialize<'de>"
    ))
)]
pub struct SimConfig<V: Vec> {
    /// Mass of every particle. Default: 0.01 (10 g).
    pub mass: V::Scalar,
    /// Gravitational acceleration. Default: (0, -9.8).
    pub gravity: V,
    /// Whether gravity is applied. Default: true.
    pub use_gravity: bool,
    /// Coefficient shared by point damping and damped springs. Default: 0.01.
    pub damping: V::Scalar,
    /// Drag on each particle proportional to its own velocity. Default: true.
    pub point_damping: bool,
    /// Damping along each spring from the endpoints' relative velocity. Default: false.
    pub damped_spring: bool,
    /// Fraction of normal speed kept after hitting a wall. Default: 0.9.
    pub restitution: V::Scalar,
    /// Slack added to the contact distance. Default: 1e-4.
    pub epsilon: V::Scalar,
    /// Particle sphere radius used for wall contact. Default: 0.02.
    pub radius: V::Scalar,
    /// Integration method. Default: semi-implicit Euler.
    pub method: Integrator,
    /// Sub-steps per driver call. Default: 1.
    pub sub_steps: usize,
}

impl<V: Planar> SimConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            mass: V::Scalar::from_f32(0.01),
            gravity: V::from_xy(V::Scalar::zero(), V::Scalar::from_f32(-9.8)),
            use_gravity: true,
            damping: V::Scalar::from_f32(0.01),
            point_damping: true,
            damped_spring: false,
            restitution: V::Scalar::from_f32(0.9),
            epsilon: V::Scalar::from_f32(1.0e-4),
            radius: V::Scalar::from_f32(0.02),
            method: Integrator::default(),
            sub_steps: 1,
        }
    }
}

impl<V: Vec> SimConfig<V> {
    pub fn with_mass(mut self, mass: V::Scalar) -> Self {
        self.mass = mass;
        self
    }

    /// Set the gravity vector and enable gravity.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self.use_gravity = true;
        self
    }

    pub fn without_gravity(mut self) -> Self {
        self.use_gravity = false;
        self
    }

    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_point_damping(mut self, enabled: bool) -> Self {
        self.point_damping = enabled;
        self
    }

    pub fn with_damped_spring(mut self, enabled: bool) -> Self {
        self.damped_spring = enabled;
        self
    }

    pub fn with_restitution(mut self, restitution: V::Scalar) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_epsilon(mut self, epsilon: V::Scalar) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_radius(mut self, radius: V::Scalar) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_method(mut self, method: Integrator) -> Self {
        self.method = method;
        self
    }

    /// Set the number of sub-steps. Values below 1 are raised to 1.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// Shift the damping coefficient, never going below zero.
    pub fn nudge_damping(&mut self, delta: V::Scalar) -> V::Scalar {
        self.damping = (self.damping + delta).max(V::Scalar::zero());
        self.damping
    }

    /// Check the parameters a driver call relies on.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.mass > V::Scalar::zero()) || !self.mass.is_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        if !(self.damping >= V::Scalar::zero()) || !self.damping.is_finite() {
            return Err(PhysicsError::InvalidDamping);
        }
        if !(self.restitution >= V::Scalar::zero() && self.restitution <= V::Scalar::one()) {
            return Err(PhysicsError::InvalidRestitution);
        }
        if self.sub_steps == 0 {
            return Err(PhysicsError::InvalidSubSteps);
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidGravity);
        }
        let zero = V::Scalar::zero();
        if !(self.radius >= zero && self.radius.is_finite())
            || !(self.epsilon >= zero && self.epsilon.is_finite())
        {
            return Err(PhysicsError::InvalidContact);
        }
        Ok(())
    }
}

impl<V: Planar> Default for SimConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
