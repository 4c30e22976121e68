/// Default width of a network timestamp on the wire.
pub const NETWORK_TIME_BITS: u8 = 16;
/// Default number of network ticks per second (10 ms resolution).
pub const NETWORK_TIME_PRECISION: f64 = 100.0;
/// Assumed combined worst-case drift of both endpoint clocks.
pub const CLOCK_DRIFT_PER_HOUR: f64 = 1.0;
/// Minimum local time between two honored peer-to-peer resyncs.
pub const P2P_RESYNC_DELAY: f64 = 10.0;
/// Maximum number of recipient channels in a cluster datagram header.
pub const MAX_DATAGRAM_RECIPIENTS: usize = u8::MAX as usize;
