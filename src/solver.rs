//! The simulation driver: one external step split into equal sub-steps.

use crate::collision::resolve_collisions;
use crate::config::SimConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::network::SpringNetwork;
use crate::observer::StepObserver;
use crate::vec::Planar;
use alloc::vec::Vec as AllocVec;

/// Summary of one driver call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Sub-steps that were run.
    pub sub_steps: usize,
    /// Wall corrections across all sub-steps.
    pub collisions: usize,
    /// Springs skipped because they had zero length, each listed once.
    pub degenerate_springs: AllocVec<usize>,
}

impl StepReport {
    /// Turn a skipped spring into an error for callers that treat it as fatal.
    pub fn check(&self) -> Result<(), PhysicsError> {
        match self.degenerate_springs.first() {
            Some(&spring) => Err(PhysicsError::NumericalDegeneracy { spring }),
            None => Ok(()),
        }
    }
}

impl<V: Planar> SpringNetwork<V> {
    /// Advance the network by `dt` using `config.sub_steps` sub-steps of
    /// size `dt / sub_steps`.
    ///
    /// Each sub-step accumulates forces from the current state, integrates
    /// every unconstrained particle, then resolves wall collisions against a
    /// frame of the given `aspect` ratio. Fails if `config`, `dt` or `aspect`
    /// is invalid, in which case the state is untouched.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: V::Scalar,
        aspect: V::Scalar,
        config: &SimConfig<V>,
        observer: &mut O,
    ) -> Result<StepReport, PhysicsError> {
        config.validate()?;
        if !(dt >= V::Scalar::zero()) || !dt.is_finite() {
            return Err(PhysicsError::InvalidTimeStep);
        }
        check_aspect(aspect)?;
        let h = dt / V::Scalar::from_usize(config.sub_steps);

        let mut report = StepReport {
            sub_steps: config.sub_steps,
            ..StepReport::default()
        };

        for sub in 0..config.sub_steps {
            observer.on_sub_step(sub);
            let hits = self.sub_step(h, aspect, config, &mut report.degenerate_springs, observer);
            report.collisions += hits;
        }

        observer.on_step_complete(&report);
        Ok(report)
    }

    /// Forces, integration and collisions for a single sub-step of size `h`.
    fn sub_step<O: StepObserver>(
        &mut self,
        h: V::Scalar,
        aspect: V::Scalar,
        config: &SimConfig<V>,
        degenerate: &mut AllocVec<usize>,
        observer: &mut O,
    ) -> usize {
        self.accumulator
            .accumulate(&self.particles, &self.springs, config, degenerate, observer);

        for (p, &f) in self.particles.iter_mut().zip(self.accumulator.forces()) {
            p.integrate(config.method, f, config.mass, h);
        }
        observer.on_integrate();

        resolve_collisions(&mut self.particles, aspect, config, observer)
    }

    /// Resolve wall collisions without integrating, e.g. right after seeding.
    /// Returns the number of wall corrections.
    pub fn settle<O: StepObserver>(
        &mut self,
        aspect: V::Scalar,
        config: &SimConfig<V>,
        observer: &mut O,
    ) -> Result<usize, PhysicsError> {
        config.validate()?;
        check_aspect(aspect)?;
        Ok(resolve_collisions(&mut self.particles, aspect, config, observer))
    }
}

/// Walls at `±aspect` only bound a frame when `aspect` is positive.
pub(crate) fn check_aspect<F: Float>(aspect: F) -> Result<(), PhysicsError> {
    if !(aspect > F::zero()) || !aspect.is_finite() {
        return Err(PhysicsError::InvalidAspect);
    }
    Ok(())
}
