use crate::{
    constants::{CLOCK_DRIFT_PER_HOUR, NETWORK_TIME_PRECISION, P2P_RESYNC_DELAY},
    time::error::ConfigError,
};

/// Width of a network timestamp on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TimeBits {
    /// 16 bit timestamps, only meaningful relative to a nearby reference time
    #[default]
    Narrow,
    /// 32 bit timestamps, treated as absolute
    Wide,
}

impl TimeBits {
    pub const fn width(self) -> u32 {
        match self {
            TimeBits::Narrow => 16,
            TimeBits::Wide => 32,
        }
    }

    /// Largest representable positive tick count.
    pub const fn max_ticks(self) -> i64 {
        (1 << (self.width() - 1)) - 1
    }
}

impl TryFrom<u8> for TimeBits {
    type Error = ConfigError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(TimeBits::Narrow),
            32 => Ok(TimeBits::Wide),
            _ => Err(ConfigError::InvalidTimeBits { bits }),
        }
    }
}

/// Contains config properties which control how network time is encoded and
/// how clock samples are weighed
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkTimeConfig {
    /// Default timestamp width for conversions
    pub bits: TimeBits,
    /// Network ticks per second
    pub precision: f64,
    /// Assumed worst-case drift between both endpoints, in seconds per hour
    pub clock_drift_per_hour: f64,
    /// Minimum number of seconds between two honored peer-to-peer resyncs
    pub p2p_resync_delay: f64,
    /// When the clock runs in non-real-time mode (e.g. recording a movie),
    /// network timestamps are taken to mean "now"
    pub movie_network_time: bool,
}

impl Default for NetworkTimeConfig {
    fn default() -> Self {
        Self {
            bits: TimeBits::Narrow,
            precision: NETWORK_TIME_PRECISION,
            clock_drift_per_hour: CLOCK_DRIFT_PER_HOUR,
            p2p_resync_delay: P2P_RESYNC_DELAY,
            movie_network_time: false,
        }
    }
}

impl NetworkTimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bits(mut self, bits: TimeBits) -> Self {
        self.bits = bits;
        self
    }

    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn clock_drift_per_hour(mut self, drift: f64) -> Self {
        self.clock_drift_per_hour = drift;
        self
    }

    pub fn p2p_resync_delay(mut self, delay: f64) -> Self {
        self.p2p_resync_delay = delay;
        self
    }

    pub fn movie_network_time(mut self, enabled: bool) -> Self {
        self.movie_network_time = enabled;
        self
    }

    /// Checks every property is within its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(ConfigError::InvalidPrecision {
                precision: self.precision.to_string(),
            });
        }
        if !self.clock_drift_per_hour.is_finite() || self.clock_drift_per_hour < 0.0 {
            return Err(ConfigError::NegativeClockDrift {
                drift: self.clock_drift_per_hour.to_string(),
            });
        }
        if !self.p2p_resync_delay.is_finite() || self.p2p_resync_delay < 0.0 {
            return Err(ConfigError::NegativeResyncDelay {
                delay: self.p2p_resync_delay.to_string(),
            });
        }
        Ok(())
    }

    pub fn clock_drift_per_second(&self) -> f64 {
        self.clock_drift_per_hour / 3600.0
    }

    /// Half-window of offsets a timestamp of the configured width can
    /// represent, in seconds.
    pub fn max_time_delta(&self) -> f64 {
        self.bits.max_ticks() as f64 / self.precision
    }
}
