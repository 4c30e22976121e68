use thiserror::Error;

/// Errors that can occur while validating a [`NetworkTimeConfig`](super::NetworkTimeConfig)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Network timestamps are either 16 or 32 bits wide
    #[error("Invalid network time width of {bits} bits. Only 16 and 32 bit timestamps are supported")]
    InvalidTimeBits { bits: u8 },

    /// Precision must be a finite, strictly positive number of ticks per second
    #[error("Invalid network time precision {precision}. Must be a finite number of ticks per second greater than zero")]
    InvalidPrecision { precision: String },

    /// Clock drift must be finite and non-negative
    #[error("Invalid clock drift of {drift} seconds per hour. Must be finite and non-negative")]
    NegativeClockDrift { drift: String },

    /// Peer-to-peer resync delay must be finite and non-negative
    #[error("Invalid peer-to-peer resync delay of {delay} seconds. Must be finite and non-negative")]
    NegativeResyncDelay { delay: String },
}
