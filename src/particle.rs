//! Point masses carrying explicit position and velocity.

use crate::float::Float;
use crate::integrator::Integrator;
use crate::vec::Vec;

/// A simulated point mass.
///
/// Mass is uniform across the network and lives in the configuration, so a
/// particle only carries its kinematic state and whether it is held fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<V: Vec> {
    pub pos: V,
    pub vel: V,
    pub constrained: bool,
}

impl<V: Vec> Particle<V> {
    pub fn new(pos: V) -> Self {
        Particle {
            pos,
            vel: V::zero(),
            constrained: false,
        }
    }

    /// A particle that starts out pinned in place.
    pub fn anchored(pos: V) -> Self {
        Particle {
            pos,
            vel: V::zero(),
            constrained: true,
        }
    }

    /// Advance one sub-step of size `h` under the net `force`.
    ///
    /// Constrained particles are left untouched.
    pub fn integrate(&mut self, method: Integrator, force: V, mass: V::Scalar, h: V::Scalar) {
        if self.constrained {
            return;
        }
        let accel = force.scale(V::Scalar::one() / mass);
        let (pos, vel) = method.advance(self.pos, self.vel, accel, h);
        self.pos = pos;
        self.vel = vel;
    }

    pub fn constrain(&mut self) {
        self.constrained = true;
    }

    pub fn release(&mut self) {
        self.constrained = false;
    }

    pub fn kinetic_energy(&self, mass: V::Scalar) -> V::Scalar {
        V::Scalar::half() * mass * self.vel.length_sq()
    }
}
