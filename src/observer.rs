//! Step observer trait for monitoring the simulation driver.

use crate::collision::WallSide;
use crate::solver::StepReport;

/// Trait for observing driver progress.
///
/// The crate never prints; implement this to log, count or visualize what
/// happens inside a step. All methods have default no-op implementations.
pub trait StepObserver {
    /// Called at the start of each sub-step.
    fn on_sub_step(&mut self, _index: usize) {}

    /// Called after forces have been accumulated for the current state.
    fn on_forces(&mut self) {}

    /// Called after all unconstrained particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a particle was pushed back out of a wall.
    fn on_collision(&mut self, _particle: usize, _wall: WallSide) {}

    /// Called when a spring's contribution was skipped because it has zero length.
    fn on_degenerate_spring(&mut self, _spring: usize) {}

    /// Called when a driver call is fully complete.
    fn on_step_complete(&mut self, _report: &StepReport) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
