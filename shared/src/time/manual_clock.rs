use std::{cell::Cell, rc::Rc};

use crate::time::clock::{Clock, ClockMode};

#[derive(Debug, Default)]
struct ManualClockState {
    real_time: Cell<f64>,
    frame_time: Cell<f64>,
    mode: Cell<ClockMode>,
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a handle can be given to a
/// [`ClockDelta`](crate::ClockDelta) while the host keeps another to step it.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    state: Rc<ManualClockState>,
}

impl ManualClock {
    /// Creates a clock reading `start` for both real and frame time.
    pub fn new(start: f64) -> Self {
        let clock = Self::default();
        clock.set_time(start);
        clock
    }

    pub fn set_time(&self, time: f64) {
        self.state.real_time.set(time);
        self.state.frame_time.set(time);
    }

    /// Moves real time only; frame time catches up on the next [`tick`](Self::tick).
    pub fn set_real_time(&self, time: f64) {
        self.state.real_time.set(time);
    }

    pub fn set_frame_time(&self, time: f64) {
        self.state.frame_time.set(time);
    }

    /// Moves both real and frame time forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.set_time(self.state.real_time.get() + seconds);
    }

    /// Samples real time into frame time.
    pub fn tick(&self) {
        self.state.frame_time.set(self.state.real_time.get());
    }

    pub fn set_mode(&self, mode: ClockMode) {
        self.state.mode.set(mode);
    }

    /// Jumps the clock by `adjustment` seconds and returns the adjustment, to
    /// be announced as a clock reset.
    pub fn adjust(&self, adjustment: f64) -> f64 {
        self.state
            .real_time
            .set(self.state.real_time.get() + adjustment);
        self.state
            .frame_time
            .set(self.state.frame_time.get() + adjustment);
        adjustment
    }
}

impl Clock for ManualClock {
    fn real_time(&self) -> f64 {
        self.state.real_time.get()
    }

    fn frame_time(&self) -> f64 {
        self.state.frame_time.get()
    }

    fn mode(&self) -> ClockMode {
        self.state.mode.get()
    }
}
