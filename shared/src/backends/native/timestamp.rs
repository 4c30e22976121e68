use std::time::Instant;

use crate::backends::TimeError;

/// A monotonic origin, read back as seconds elapsed since creation.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    origin: Instant,
}

impl Timestamp {
    pub fn now() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Returns the number of seconds elapsed since this origin was taken.
    ///
    /// # Errors
    /// Never fails on native targets.
    pub fn try_elapsed(&self) -> Result<f64, TimeError> {
        Ok(self.origin.elapsed().as_secs_f64())
    }
}
