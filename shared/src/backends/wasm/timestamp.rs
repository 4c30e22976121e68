use crate::backends::TimeError;

/// A millisecond origin taken from `Date.now()`, read back as seconds
/// elapsed since creation.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    origin_ms: f64,
}

impl Timestamp {
    pub fn now() -> Self {
        Self {
            origin_ms: js_sys::Date::now(),
        }
    }

    /// Returns the number of seconds elapsed since this origin was taken.
    ///
    /// # Errors
    /// Returns `TimeError::Unavailable` if the browser clock returns a
    /// non-finite value.
    pub fn try_elapsed(&self) -> Result<f64, TimeError> {
        let now_ms = js_sys::Date::now();
        if !now_ms.is_finite() || !self.origin_ms.is_finite() {
            return Err(TimeError::Unavailable);
        }
        Ok((now_ms - self.origin_ms) / 1000.0)
    }
}
