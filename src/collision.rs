//! Wall collisions with restitution.
//!
//! Four half-planes frame the visible region: left and right at
//! `x = ∓aspect`, bottom and top at `y = ∓1`. Their normals point into the
//! frame. Every pass rebuilds them from the current aspect ratio so the walls
//! follow window resizes.
//!
//! Walls are handled one after another for each particle rather than
//! simultaneously. A particle pushed out of one wall into another in the same
//! pass is corrected by the later wall only, so a corner can keep a small
//! residual penetration against the earlier one until the next pass.

use crate::config::SimConfig;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::{Planar, Vec};

/// Which side of the frame a wall bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
    Bottom,
    Top,
}

impl WallSide {
    /// Resolution order.
    pub const ALL: [WallSide; 4] = [WallSide::Left, WallSide::Right, WallSide::Bottom, WallSide::Top];
}

/// A half-plane with an inward-facing unit normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wall<V: Vec> {
    pub side: WallSide,
    pub normal: V,
    pub point: V,
}

impl<V: Planar> Wall<V> {
    pub fn new(side: WallSide, aspect: V::Scalar) -> Self {
        let zero = V::Scalar::zero();
        let one = V::Scalar::one();
        let (normal, point) = match side {
            WallSide::Left => (V::from_xy(one, zero), V::from_xy(-aspect, zero)),
            WallSide::Right => (V::from_xy(-one, zero), V::from_xy(aspect, zero)),
            WallSide::Bottom => (V::from_xy(zero, one), V::from_xy(zero, -one)),
            WallSide::Top => (V::from_xy(zero, -one), V::from_xy(zero, one)),
        };
        Wall { side, normal, point }
    }
}

impl<V: Vec> Wall<V> {
    /// Positive inside the frame, negative past the wall.
    pub fn signed_distance(&self, pos: V) -> V::Scalar {
        self.normal.dot(pos - self.point)
    }

    /// Push `particle` out to exactly `radius + epsilon` if it is closer than
    /// that, reflecting any velocity heading into the wall.
    ///
    /// Returns true when the position was corrected.
    pub fn resolve(
        &self,
        particle: &mut Particle<V>,
        radius: V::Scalar,
        epsilon: V::Scalar,
        restitution: V::Scalar,
    ) -> bool {
        let contact = radius + epsilon;
        let d = self.signed_distance(particle.pos);
        if !(d < contact) {
            return false;
        }
        particle.pos = particle.pos + self.normal.scale(contact - d);

        let v_n = self.normal.dot(particle.vel);
        if v_n < V::Scalar::zero() {
            particle.vel = particle.vel - self.normal.scale((V::Scalar::one() + restitution) * v_n);
        }
        true
    }
}

/// The four walls framing a viewport of the given aspect ratio.
pub fn frame_walls<V: Planar>(aspect: V::Scalar) -> [Wall<V>; 4] {
    WallSide::ALL.map(|side| Wall::new(side, aspect))
}

/// Resolve every unconstrained particle against every wall, in index order.
///
/// Returns the number of corrections made.
pub fn resolve_collisions<V: Planar, O: StepObserver>(
    particles: &mut [Particle<V>],
    aspect: V::Scalar,
    config: &SimConfig<V>,
    observer: &mut O,
) -> usize {
    let walls = frame_walls::<V>(aspect);
    let mut hits = 0;
    for (i, particle) in particles.iter_mut().enumerate() {
        if particle.constrained {
            continue;
        }
        for wall in walls.iter() {
            if wall.resolve(particle, config.radius, config.epsilon, config.restitution) {
                hits += 1;
                observer.on_collision(i, wall.side);
            }
        }
    }
    hits
}
