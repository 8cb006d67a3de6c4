//! Explicit single-step integration schemes.

use crate::float::Float;
use crate::vec::Vec;

/// Time-stepping method used to advance unconstrained particles.
///
/// The method carries no state between steps; switching it mid-run only
/// changes how the next sub-step combines position, velocity and force.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Integrator {
    /// `x += h v`, then `v += h a`. Position uses the old velocity.
    ExplicitEuler,
    /// `v += h a`, then `x += h v`. Position uses the new velocity.
    #[default]
    SemiImplicitEuler,
    /// `v = (2v + h a) / 2`, then `x += h v`.
    Midpoint,
}

impl Integrator {
    /// Returns the new `(position, velocity)` after a step of size `h`
    /// under constant acceleration `accel`.
    pub fn advance<V: Vec>(self, pos: V, vel: V, accel: V, h: V::Scalar) -> (V, V) {
        match self {
            Integrator::ExplicitEuler => {
                let new_pos = pos + vel.scale(h);
                let new_vel = vel + accel.scale(h);
                (new_pos, new_vel)
            }
            Integrator::SemiImplicitEuler => {
                let new_vel = vel + accel.scale(h);
                (pos + new_vel.scale(h), new_vel)
            }
            Integrator::Midpoint => {
                let new_vel = (vel.scale(V::Scalar::two()) + accel.scale(h)).scale(V::Scalar::half());
                (pos + new_vel.scale(h), new_vel)
            }
        }
    }
}
