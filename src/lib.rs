//! Mass-spring particle networks with explicit integration.
//!
//! `springnet` simulates point masses joined by Hookean springs inside a
//! frame of four walls. Each driver call splits the elapsed time into equal
//! sub-steps; every sub-step accumulates forces, integrates, then resolves
//! wall collisions.
//!
//! # Features
//!
//! - **Forces**: gravity, point damping, Hookean springs with stiffness
//!   inversely proportional to rest length, optional damped springs
//! - **Integrators**: explicit Euler, semi-implicit Euler, midpoint average
//! - **Walls**: half-plane collisions with restitution that follow the
//!   viewport aspect ratio
//! - **Bounded stores**: capacity overflow and bad edges are errors, not UB
//! - **Observable**: monitor driver progress via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use springnet::{NoOpStepObserver, Seed, SimConfig, SpringNetwork, Vec3};
//!
//! let mut network: SpringNetwork<Vec3<f32>> = SpringNetwork::from_seed(&Seed::triangle()).unwrap();
//! network.constrain(0).unwrap();
//! let config = SimConfig::new().with_sub_steps(4);
//! let report = network.step(1.0 / 30.0, 16.0 / 9.0, &config, &mut NoOpStepObserver).unwrap();
//! assert_eq!(report.sub_steps, 4);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod integrator;
pub mod force;
pub mod collision;
pub mod network;
pub mod solver;
pub mod clock;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Planar, Vec2, Vec3};
pub use particle::Particle;
pub use spring::Spring;
pub use integrator::Integrator;
pub use force::ForceAccumulator;
pub use collision::{Wall, WallSide, frame_walls, resolve_collisions};
pub use network::{SpringNetwork, Seed, MAX_PARTICLES, MAX_SPRINGS};
pub use solver::StepReport;
pub use clock::FrameClock;
pub use simulation::Simulation;
pub use config::SimConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::{PhysicsError, Store};
