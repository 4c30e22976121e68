use std::cell::Cell;

use log::warn;

use crate::{
    backends::Timestamp,
    time::clock::{Clock, ClockMode},
};

/// A clock driven by the platform's monotonic time source, counting seconds
/// since it was created.
#[derive(Debug)]
pub struct SystemClock {
    origin: Timestamp,
    offset: Cell<f64>,
    last_real_time: Cell<f64>,
    frame_time: Cell<f64>,
    mode: Cell<ClockMode>,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Timestamp::now(),
            offset: Cell::new(0.0),
            last_real_time: Cell::new(0.0),
            frame_time: Cell::new(0.0),
            mode: Cell::new(ClockMode::Normal),
        }
    }

    /// Samples real time into frame time. Call once at the start of every tick.
    pub fn tick(&self) {
        self.frame_time.set(self.real_time());
    }

    pub fn set_mode(&self, mode: ClockMode) {
        self.mode.set(mode);
    }

    /// Shifts the reported time by `adjustment` seconds and returns the
    /// adjustment, to be announced as a clock reset.
    pub fn adjust(&self, adjustment: f64) -> f64 {
        self.offset.set(self.offset.get() + adjustment);
        self.last_real_time
            .set(self.last_real_time.get() + adjustment);
        self.frame_time.set(self.frame_time.get() + adjustment);
        adjustment
    }
}

impl Clock for SystemClock {
    fn real_time(&self) -> f64 {
        match self.origin.try_elapsed() {
            Ok(elapsed) => {
                let now = elapsed + self.offset.get();
                self.last_real_time.set(now);
                now
            }
            Err(error) => {
                warn!("{error}, holding time at {:.3}", self.last_real_time.get());
                self.last_real_time.get()
            }
        }
    }

    fn frame_time(&self) -> f64 {
        self.frame_time.get()
    }

    fn mode(&self) -> ClockMode {
        self.mode.get()
    }
}
