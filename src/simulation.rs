//! A spring network together with its parameters, frame clock and seed.

use crate::clock::FrameClock;
use crate::config::SimConfig;
use crate::error::PhysicsError;
use crate::network::{Seed, SpringNetwork};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::solver::{check_aspect, StepReport};
use crate::vec::Planar;

/// Everything a front end drives once per rendered frame.
///
/// Input handling mutates the network and config between ticks through
/// `&mut` accessors; `tick` is the only place the driver runs.
pub struct Simulation<V: Planar> {
    network: SpringNetwork<V>,
    config: SimConfig<V>,
    clock: FrameClock<V::Scalar>,
    seed: Seed<V>,
    aspect: V::Scalar,
}

impl<V: Planar> Simulation<V> {
    /// Build from a seed and settle it against a frame of the given aspect
    /// ratio.
    pub fn new(
        seed: Seed<V>,
        config: SimConfig<V>,
        aspect: V::Scalar,
    ) -> Result<Self, PhysicsError> {
        let mut network = SpringNetwork::from_seed(&seed)?;
        network.settle(aspect, &config, &mut NoOpStepObserver)?;
        Ok(Simulation {
            network,
            config,
            clock: FrameClock::default(),
            seed,
            aspect,
        })
    }

    /// Feed elapsed wall-clock time and the current aspect ratio.
    ///
    /// Returns the driver report when a frame was due and the simulation is
    /// running, `None` otherwise.
    pub fn tick<O: StepObserver>(
        &mut self,
        delta: V::Scalar,
        aspect: V::Scalar,
        observer: &mut O,
    ) -> Result<Option<StepReport>, PhysicsError> {
        check_aspect(aspect)?;
        self.aspect = aspect;
        match self.clock.tick(delta) {
            Some(dt) => self.network.step(dt, aspect, &self.config, observer).map(Some),
            None => Ok(None),
        }
    }

    /// Snap back to the seeded topology. Mode, parameters and the current
    /// stiffness scale are kept.
    pub fn reset(&mut self) -> Result<(), PhysicsError> {
        let mut network = SpringNetwork::from_seed(&self.seed)?;
        network.set_stiffness_scale(self.network.stiffness_scale())?;
        network.settle(self.aspect, &self.config, &mut NoOpStepObserver)?;
        self.network = network;
        Ok(())
    }

    pub fn network(&self) -> &SpringNetwork<V> {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut SpringNetwork<V> {
        &mut self.network
    }

    pub fn config(&self) -> &SimConfig<V> {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SimConfig<V> {
        &mut self.config
    }

    pub fn clock(&self) -> &FrameClock<V::Scalar> {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock<V::Scalar> {
        &mut self.clock
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Flip between paused and running; returns true if now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.clock.toggle()
    }

    pub fn aspect(&self) -> V::Scalar {
        self.aspect
    }
}
