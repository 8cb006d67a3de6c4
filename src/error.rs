//! Error types for building and stepping a spring network.

use thiserror::Error;

/// Which bounded store rejected an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Particles,
    Springs,
}

impl core::fmt::Display for Store {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Store::Particles => f.write_str("particle"),
            Store::Springs => f.write_str("spring"),
        }
    }
}

/// Errors that can occur while configuring or stepping the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A particle or spring store is already at its fixed maximum.
    #[error("{store} capacity of {capacity} exceeded")]
    CapacityExceeded { store: Store, capacity: usize },
    /// Spring endpoints are equal or do not reference live particles.
    #[error("invalid spring endpoints ({a}, {b}) for {count} particles")]
    InvalidEdge { a: usize, b: usize, count: usize },
    /// Endpoints coincide, so no rest length can be captured.
    #[error("particles {a} and {b} coincide; spring would have zero rest length")]
    ZeroRestLength { a: usize, b: usize },
    /// An explicit rest length was negative, NaN or infinite.
    #[error("spring ({a}, {b}) rest length must be positive and finite")]
    InvalidRestLength { a: usize, b: usize },
    /// A spring collapsed to zero length, so its axis is undefined.
    #[error("spring {spring} has zero length")]
    NumericalDegeneracy { spring: usize },
    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Restitution must be in [0, 1].
    #[error("restitution must be in [0, 1]")]
    InvalidRestitution,
    /// Damping must be non-negative and finite.
    #[error("damping must be non-negative and finite")]
    InvalidDamping,
    /// At least one sub-step is required.
    #[error("sub-step count must be at least 1")]
    InvalidSubSteps,
    /// Stiffness scale must be positive and finite.
    #[error("stiffness scale must be positive and finite")]
    InvalidStiffness,
    /// Gravity must have finite components.
    #[error("gravity must be finite")]
    InvalidGravity,
    /// Particle radius and collision slack must be non-negative and finite.
    #[error("radius and epsilon must be non-negative and finite")]
    InvalidContact,
    /// Step duration must be non-negative and finite.
    #[error("time step must be non-negative and finite")]
    InvalidTimeStep,
    /// Frame aspect ratio must be positive and finite.
    #[error("aspect ratio must be positive and finite")]
    InvalidAspect,
}
