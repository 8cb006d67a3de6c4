//! Frame pacing and the paused/running state.

use crate::float::Float;

/// Accumulates wall-clock time and decides when the driver should run.
///
/// Elapsed time piles up across calls to [`FrameClock::tick`]. Once it
/// exceeds the frame period the whole accumulated amount is handed out as the
/// step length (if running) and the accumulator restarts from zero, so time
/// spent paused is dropped rather than replayed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameClock<F: Float> {
    frame_period: F,
    elapsed: F,
    paused: bool,
}

impl<F: Float> FrameClock<F> {
    /// A paused clock with the given frame period in seconds.
    pub fn new(frame_period: F) -> Self {
        FrameClock {
            frame_period,
            elapsed: F::zero(),
            paused: true,
        }
    }

    /// Feed `delta` seconds; returns the step length when a frame is due.
    pub fn tick(&mut self, delta: F) -> Option<F> {
        self.elapsed = self.elapsed + delta;
        if !(self.elapsed > self.frame_period) {
            return None;
        }
        let elapsed = self.elapsed;
        self.elapsed = F::zero();
        if self.paused {
            None
        } else {
            Some(elapsed)
        }
    }

    pub fn frame_period(&self) -> F {
        self.frame_period
    }

    pub fn set_frame_period(&mut self, frame_period: F) {
        self.frame_period = frame_period;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip between paused and running; returns true if now paused.
    pub fn toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

impl<F: Float> Default for FrameClock<F> {
    /// 30 frames per second, starting paused.
    fn default() -> Self {
        Self::new(F::one() / F::from_f32(30.0))
    }
}
