//! Hookean springs between two particles of the network.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;

/// An edge of the spring network.
///
/// Endpoints are indices into the owning network's particle store. The rest
/// length is fixed when the spring is created; stiffness is cached as
/// `k0 / rest_length` and rebuilt whenever the global scale `k0` changes,
/// so short springs are stiffer than long ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<V: Vec> {
    pub a: usize,
    pub b: usize,
    pub rest_length: V::Scalar,
    pub stiffness: V::Scalar,
}

impl<V: Vec> Spring<V> {
    /// Spring whose rest length is the current separation of `a` and `b`.
    pub fn between(
        a: usize,
        b: usize,
        particles: &[Particle<V>],
        stiffness_scale: V::Scalar,
    ) -> Result<Self, PhysicsError> {
        check_endpoints(a, b, particles.len())?;
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Self::with_rest_length(a, b, rest_length, particles, stiffness_scale)
    }

    /// Spring with an explicit rest length, independent of where the
    /// endpoints currently sit.
    pub fn with_rest_length(
        a: usize,
        b: usize,
        rest_length: V::Scalar,
        particles: &[Particle<V>],
        stiffness_scale: V::Scalar,
    ) -> Result<Self, PhysicsError> {
        check_endpoints(a, b, particles.len())?;
        if rest_length == V::Scalar::zero() {
            return Err(PhysicsError::ZeroRestLength { a, b });
        }
        if !(rest_length > V::Scalar::zero()) || !rest_length.is_finite() {
            return Err(PhysicsError::InvalidRestLength { a, b });
        }
        Ok(Spring {
            a,
            b,
            rest_length,
            stiffness: stiffness_scale / rest_length,
        })
    }

    pub fn rebuild_stiffness(&mut self, stiffness_scale: V::Scalar) {
        self.stiffness = stiffness_scale / self.rest_length;
    }

    /// Unit vector from `b` towards `a` and the current length.
    ///
    /// `None` when the endpoints coincide and the axis is undefined.
    pub fn axis(&self, particles: &[Particle<V>]) -> Option<(V, V::Scalar)> {
        let delta = particles[self.a].pos - particles[self.b].pos;
        let length = delta.length();
        if length == V::Scalar::zero() {
            return None;
        }
        Some((delta.scale(V::Scalar::one() / length), length))
    }

    /// Hookean force along `axis` for a spring of the given current length.
    /// Added to `b` and subtracted from `a`.
    pub fn elastic_force(&self, axis: V, length: V::Scalar) -> V {
        axis.scale(self.stiffness * (length - self.rest_length))
    }

    /// Relative-velocity damping along `axis`. Added to `b`, subtracted from `a`.
    pub fn damping_force(&self, axis: V, particles: &[Particle<V>], damping: V::Scalar) -> V {
        let relative = particles[self.a].vel - particles[self.b].vel;
        axis.scale(damping * relative.dot(axis))
    }

    pub fn potential_energy(&self, particles: &[Particle<V>]) -> V::Scalar {
        let stretch = particles[self.a].pos.distance(particles[self.b].pos) - self.rest_length;
        V::Scalar::half() * self.stiffness * stretch * stretch
    }
}

fn check_endpoints(a: usize, b: usize, count: usize) -> Result<(), PhysicsError> {
    if a == b || a >= count || b >= count {
        return Err(PhysicsError::InvalidEdge { a, b, count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;
    use alloc::vec;

    fn pair(distance: f32) -> alloc::vec::Vec<Particle<Vec2<f32>>> {
        vec![
            Particle::new(Vec2::new(0.0, 0.0)),
            Particle::new(Vec2::new(distance, 0.0)),
        ]
    }

    #[test]
    fn stiffness_is_inverse_to_rest_length() {
        let particles = pair(0.5);
        let spring = Spring::between(0, 1, &particles, 2.0).unwrap();
        assert!((spring.rest_length - 0.5).abs() < 1e-6);
        assert!((spring.stiffness - 4.0).abs() < 1e-6);
    }

    #[test]
    fn rebuild_tracks_new_scale() {
        let particles = pair(0.25);
        let mut spring = Spring::between(0, 1, &particles, 1.0).unwrap();
        spring.rebuild_stiffness(3.0);
        assert!((spring.stiffness - 12.0).abs() < 1e-5);
    }

    #[test]
    fn rejects_self_loop_and_out_of_range() {
        let particles = pair(1.0);
        assert_eq!(
            Spring::between(1, 1, &particles, 1.0),
            Err(PhysicsError::InvalidEdge { a: 1, b: 1, count: 2 })
        );
        assert_eq!(
            Spring::between(0, 5, &particles, 1.0),
            Err(PhysicsError::InvalidEdge { a: 0, b: 5, count: 2 })
        );
    }

    #[test]
    fn coincident_endpoints_have_no_rest_length() {
        let particles = pair(0.0);
        assert_eq!(
            Spring::between(0, 1, &particles, 1.0),
            Err(PhysicsError::ZeroRestLength { a: 0, b: 1 })
        );
    }

    #[test]
    fn explicit_rest_length_must_be_positive_and_finite() {
        let particles = pair(1.0);
        for bad in [-0.5, f32::NAN, f32::INFINITY] {
            assert_eq!(
                Spring::with_rest_length(0, 1, bad, &particles, 1.0),
                Err(PhysicsError::InvalidRestLength { a: 0, b: 1 })
            );
        }
        assert!(Spring::with_rest_length(0, 1, 0.25, &particles, 1.0).is_ok());
    }

    #[test]
    fn axis_points_from_b_to_a() {
        let particles = pair(2.0);
        let spring = Spring::between(0, 1, &particles, 1.0).unwrap();
        let (axis, length) = spring.axis(&particles).unwrap();
        assert!((axis.x + 1.0).abs() < 1e-6);
        assert!((length - 2.0).abs() < 1e-6);
    }

    #[test]
    fn collapsed_spring_has_no_axis() {
        let mut particles = pair(1.0);
        let spring = Spring::between(0, 1, &particles, 1.0).unwrap();
        particles[1].pos = particles[0].pos;
        assert!(spring.axis(&particles).is_none());
    }
}
