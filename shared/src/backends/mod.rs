cfg_if! {
    if #[cfg(all(target_arch = "wasm32", feature = "wbindgen"))] {
        mod wasm;
        pub use wasm::timestamp::Timestamp;
    } else {
        mod native;
        pub use native::timestamp::Timestamp;
    }
}

/// Error type for host time reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// The host clock could not be read
    Unavailable,
}

impl std::fmt::Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeError::Unavailable => write!(f, "Host clock is unavailable"),
        }
    }
}

impl std::error::Error for TimeError {}
