//! Net force accumulation for one sub-step.

use crate::config::SimConfig;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Reusable per-particle force buffer.
#[derive(Clone, Debug, Default)]
pub struct ForceAccumulator<V: Vec> {
    forces: AllocVec<V>,
}

impl<V: Vec> ForceAccumulator<V> {
    pub fn new() -> Self {
        ForceAccumulator { forces: AllocVec::new() }
    }

    /// Forces from the last `accumulate` call, one per particle.
    pub fn forces(&self) -> &[V] {
        &self.forces
    }

    /// Recompute the net force on every particle from the current state.
    ///
    /// Constrained particles still receive a force; the integrator discards it.
    /// Springs of zero current length contribute nothing: their index is
    /// pushed to `degenerate` (once) and reported to the observer.
    pub fn accumulate<O: StepObserver>(
        &mut self,
        particles: &[Particle<V>],
        springs: &[Spring<V>],
        config: &SimConfig<V>,
        degenerate: &mut AllocVec<usize>,
        observer: &mut O,
    ) {
        self.forces.clear();
        self.forces.resize(particles.len(), V::zero());

        let weight = config.gravity.scale(config.mass);
        for (f, p) in self.forces.iter_mut().zip(particles) {
            if config.use_gravity {
                *f = *f + weight;
            }
            if config.point_damping {
                *f = *f - p.vel.scale(config.damping);
            }
        }

        for (j, spring) in springs.iter().enumerate() {
            let Some((axis, length)) = spring.axis(particles) else {
                if !degenerate.contains(&j) {
                    degenerate.push(j);
                }
                observer.on_degenerate_spring(j);
                continue;
            };

            if config.damped_spring {
                let f = spring.damping_force(axis, particles, config.damping);
                self.forces[spring.b] = self.forces[spring.b] + f;
                self.forces[spring.a] = self.forces[spring.a] - f;
            }

            let f = spring.elastic_force(axis, length);
            self.forces[spring.b] = self.forces[spring.b] + f;
            self.forces[spring.a] = self.forces[spring.a] - f;
        }

        observer.on_forces();
    }
}
