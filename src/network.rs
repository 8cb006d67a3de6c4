//! Bounded particle store and the spring network built on it.

use crate::error::{PhysicsError, Store};
use crate::float::Float;
use crate::force::ForceAccumulator;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::vec::{Planar, Vec};
use alloc::vec::Vec as AllocVec;

/// Default particle capacity.
pub const MAX_PARTICLES: usize = 10;
/// Default spring capacity.
pub const MAX_SPRINGS: usize = 30;
/// Lower bound of the global stiffness scale when nudged.
pub const MIN_STIFFNESS_SCALE: f32 = 0.1;
/// Upper bound of the global stiffness scale when nudged.
pub const MAX_STIFFNESS_SCALE: f32 = 10.0;

/// Initial topology a network is built from and reset back to.
#[derive(Clone, Debug, PartialEq)]
pub struct Seed<V: Vec> {
    pub positions: AllocVec<V>,
    pub edges: AllocVec<(usize, usize)>,
    pub max_particles: usize,
    pub max_springs: usize,
    pub stiffness_scale: V::Scalar,
}

impl<V: Planar> Seed<V> {
    /// Three particles hanging off two springs that share particle 2.
    pub fn triangle() -> Self {
        let p = |x: f32, y: f32| V::from_xy(V::Scalar::from_f32(x), V::Scalar::from_f32(y));
        Seed {
            positions: alloc::vec![p(0.0, 0.4), p(0.8, 0.2), p(0.4, 0.3)],
            edges: alloc::vec![(0, 2), (1, 2)],
            max_particles: MAX_PARTICLES,
            max_springs: MAX_SPRINGS,
            stiffness_scale: V::Scalar::one(),
        }
    }
}

impl<V: Vec> Seed<V> {
    pub fn empty() -> Self {
        Seed {
            positions: AllocVec::new(),
            edges: AllocVec::new(),
            max_particles: MAX_PARTICLES,
            max_springs: MAX_SPRINGS,
            stiffness_scale: V::Scalar::one(),
        }
    }

    pub fn with_capacity(mut self, max_particles: usize, max_springs: usize) -> Self {
        self.max_particles = max_particles;
        self.max_springs = max_springs;
        self
    }

    pub fn with_stiffness_scale(mut self, stiffness_scale: V::Scalar) -> Self {
        self.stiffness_scale = stiffness_scale;
        self
    }

    pub fn particle(mut self, pos: V) -> Self {
        self.positions.push(pos);
        self
    }

    pub fn edge(mut self, a: usize, b: usize) -> Self {
        self.edges.push((a, b));
        self
    }
}

/// Particles, springs and the global stiffness scale `k0`.
///
/// Both stores are bounded: inserting past capacity is an error rather than a
/// silent drop. Springs reference particles by index and particles are never
/// removed individually, so indices stay valid until the network is rebuilt from its seed.
#[derive(Clone, Debug)]
pub struct SpringNetwork<V: Vec> {
    pub(crate) particles: AllocVec<Particle<V>>,
    pub(crate) springs: AllocVec<Spring<V>>,
    pub(crate) accumulator: ForceAccumulator<V>,
    max_particles: usize,
    max_springs: usize,
    stiffness_scale: V::Scalar,
}

impl<V: Vec> SpringNetwork<V> {
    pub fn new() -> Self {
        Self::with_capacity(MAX_PARTICLES, MAX_SPRINGS)
    }

    pub fn with_capacity(max_particles: usize, max_springs: usize) -> Self {
        SpringNetwork {
            particles: AllocVec::with_capacity(max_particles),
            springs: AllocVec::with_capacity(max_springs),
            accumulator: ForceAccumulator::new(),
            max_particles,
            max_springs,
            stiffness_scale: V::Scalar::one(),
        }
    }

    /// Build a network from a seed, validating every edge.
    pub fn from_seed(seed: &Seed<V>) -> Result<Self, PhysicsError> {
        let mut network = Self::with_capacity(seed.max_particles, seed.max_springs);
        network.set_stiffness_scale(seed.stiffness_scale)?;
        for &pos in &seed.positions {
            network.add_particle(pos)?;
        }
        for &(a, b) in &seed.edges {
            network.add_spring(a, b)?;
        }
        Ok(network)
    }

    pub fn add_particle(&mut self, pos: V) -> Result<usize, PhysicsError> {
        self.insert_particle(Particle::new(pos))
    }

    pub fn insert_particle(&mut self, particle: Particle<V>) -> Result<usize, PhysicsError> {
        if self.particles.len() >= self.max_particles {
            return Err(PhysicsError::CapacityExceeded {
                store: Store::Particles,
                capacity: self.max_particles,
            });
        }
        let idx = self.particles.len();
        self.particles.push(particle);
        Ok(idx)
    }

    /// Connect `a` and `b` with a spring at rest at their current separation.
    pub fn add_spring(&mut self, a: usize, b: usize) -> Result<usize, PhysicsError> {
        self.ensure_spring_room()?;
        let spring = Spring::between(a, b, &self.particles, self.stiffness_scale)?;
        Ok(self.push_spring(spring))
    }

    /// Connect `a` and `b` with a spring of the given rest length.
    pub fn add_spring_with_rest_length(
        &mut self,
        a: usize,
        b: usize,
        rest_length: V::Scalar,
    ) -> Result<usize, PhysicsError> {
        self.ensure_spring_room()?;
        let spring = Spring::with_rest_length(a, b, rest_length, &self.particles, self.stiffness_scale)?;
        Ok(self.push_spring(spring))
    }

    /// Interactive attach: endpoints are stored lower index first.
    pub fn attach(&mut self, first: usize, second: usize) -> Result<usize, PhysicsError> {
        let (a, b) = if second < first { (second, first) } else { (first, second) };
        self.add_spring(a, b)
    }

    fn ensure_spring_room(&self) -> Result<(), PhysicsError> {
        if self.springs.len() >= self.max_springs {
            return Err(PhysicsError::CapacityExceeded {
                store: Store::Springs,
                capacity: self.max_springs,
            });
        }
        Ok(())
    }

    fn push_spring(&mut self, spring: Spring<V>) -> usize {
        let idx = self.springs.len();
        self.springs.push(spring);
        idx
    }

    pub fn stiffness_scale(&self) -> V::Scalar {
        self.stiffness_scale
    }

    /// Set `k0` and rebuild every spring's stiffness from it.
    pub fn set_stiffness_scale(&mut self, stiffness_scale: V::Scalar) -> Result<(), PhysicsError> {
        if !(stiffness_scale > V::Scalar::zero()) || !stiffness_scale.is_finite() {
            return Err(PhysicsError::InvalidStiffness);
        }
        self.stiffness_scale = stiffness_scale;
        for spring in self.springs.iter_mut() {
            spring.rebuild_stiffness(stiffness_scale);
        }
        Ok(())
    }

    /// Shift `k0` by `delta`, clamped to
    /// [`MIN_STIFFNESS_SCALE`, `MAX_STIFFNESS_SCALE`]. Returns the new scale.
    pub fn nudge_stiffness_scale(&mut self, delta: V::Scalar) -> V::Scalar {
        let k0 = (self.stiffness_scale + delta).clamp(
            V::Scalar::from_f32(MIN_STIFFNESS_SCALE),
            V::Scalar::from_f32(MAX_STIFFNESS_SCALE),
        );
        self.stiffness_scale = k0;
        for spring in self.springs.iter_mut() {
            spring.rebuild_stiffness(k0);
        }
        k0
    }

    fn check_index(&self, index: usize) -> Result<(), PhysicsError> {
        if index >= self.particles.len() {
            return Err(PhysicsError::ParticleOutOfBounds { index, count: self.particles.len() });
        }
        Ok(())
    }

    pub fn constrain(&mut self, index: usize) -> Result<(), PhysicsError> {
        self.check_index(index)?;
        self.particles[index].constrain();
        Ok(())
    }

    pub fn release(&mut self, index: usize) -> Result<(), PhysicsError> {
        self.check_index(index)?;
        self.particles[index].release();
        Ok(())
    }

    /// Flip the constrained flag, returning the new value.
    pub fn toggle_constrained(&mut self, index: usize) -> Result<bool, PhysicsError> {
        self.check_index(index)?;
        let p = &mut self.particles[index];
        p.constrained = !p.constrained;
        Ok(p.constrained)
    }

    /// False for indices that do not name a particle.
    pub fn is_constrained(&self, index: usize) -> bool {
        self.particles.get(index).is_some_and(|p| p.constrained)
    }

    /// Place a particle directly, e.g. while it is being dragged.
    pub fn move_particle(&mut self, index: usize, pos: V) -> Result<(), PhysicsError> {
        self.check_index(index)?;
        self.particles[index].pos = pos;
        Ok(())
    }

    pub fn set_velocity(&mut self, index: usize, vel: V) -> Result<(), PhysicsError> {
        self.check_index(index)?;
        self.particles[index].vel = vel;
        Ok(())
    }

    pub fn positions(&self) -> AllocVec<V> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn velocities(&self) -> AllocVec<V> {
        self.particles.iter().map(|p| p.vel).collect()
    }

    /// Endpoint pairs, for drawing edges.
    pub fn edges(&self) -> AllocVec<(usize, usize)> {
        self.springs.iter().map(|s| (s.a, s.b)).collect()
    }

    pub fn particles(&self) -> &[Particle<V>] {
        &self.particles
    }

    pub fn springs(&self) -> &[Spring<V>] {
        &self.springs
    }

    pub fn particle(&self, index: usize) -> &Particle<V> {
        &self.particles[index]
    }

    pub fn spring(&self, index: usize) -> &Spring<V> {
        &self.springs[index]
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn max_particles(&self) -> usize { self.max_particles }
    pub fn max_springs(&self) -> usize { self.max_springs }

    /// Net forces from the most recent sub-step.
    pub fn last_forces(&self) -> &[V] {
        self.accumulator.forces()
    }

    pub fn kinetic_energy(&self, mass: V::Scalar) -> V::Scalar {
        self.particles
            .iter()
            .fold(V::Scalar::zero(), |e, p| e + p.kinetic_energy(mass))
    }

    pub fn potential_energy(&self) -> V::Scalar {
        self.springs
            .iter()
            .fold(V::Scalar::zero(), |e, s| e + s.potential_energy(&self.particles))
    }
}

impl<V: Planar> SpringNetwork<V> {
    /// First particle whose x and y both lie within `tolerance` of `point`.
    pub fn pick(&self, point: V, tolerance: V::Scalar) -> Option<usize> {
        self.particles.iter().position(|p| {
            (p.pos.x() - point.x()).abs() <= tolerance && (p.pos.y() - point.y()).abs() <= tolerance
        })
    }
}

impl<V: Vec> Default for SpringNetwork<V> {
    fn default() -> Self {
        Self::new()
    }
}
