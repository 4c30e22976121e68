use log::{debug, info, warn};

use crate::{
    time::{
        clock::{Clock, ClockMode},
        error::ConfigError,
        network_time::{NetworkTimeConfig, TimeBits},
    },
    types::{DoId, NetworkTimestamp},
    wrapping_number::{sign_extend, wrapping_diff},
};

/// The confidence window around the current delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncWindow {
    /// No sample has been accepted yet; the uncertainty is unbounded
    Unsynced,
    /// At local time `last_resync`, the true delta was within
    /// `delta ± uncertainty`
    Synced { uncertainty: f64, last_resync: f64 },
}

/// What [`ClockDelta::new_delta`] did with a candidate sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMerge {
    /// First sample since start or [`ClockDelta::clear`], adopted as-is
    Initialized,
    /// Windows intersected; the estimate moved to the intersection midpoint
    Narrowed,
    /// Windows were disjoint and the candidate was trusted
    Overwritten,
    /// Windows were disjoint and the candidate was not trusted, or the
    /// candidate itself was unusable (non-finite, negative uncertainty)
    Rejected,
}

impl DeltaMerge {
    pub fn is_accepted(self) -> bool {
        self != DeltaMerge::Rejected
    }
}

/// Why a peer-to-peer sample was not used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeerRejection {
    /// The echoed timestamp is in the future or older than the resync delay
    StaleTimestamp,
    /// The sample contradicts the current estimate
    Inconsistent,
    /// The peer's uncertainty or server time is not a usable number
    InvalidSample,
}

/// Result of [`ClockDelta::peer_to_peer_resync`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeerResync {
    Accepted,
    Rejected(PeerRejection),
    /// Arrived within the resync delay of the previous sync and was not considered
    Suppressed,
}

/// Maintains the offset between local real time and network time, along
/// with a bound on how wrong that offset may be.
///
/// `network_time ≈ local_real_time - delta`. Samples from the authoritative
/// server or relayed by peers narrow the window; between samples it widens
/// at the configured drift rate.
pub struct ClockDelta<C: Clock> {
    clock: C,
    config: NetworkTimeConfig,
    delta: f64,
    window: SyncWindow,
}

impl<C: Clock> ClockDelta<C> {
    pub fn new(clock: C, config: NetworkTimeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            clock,
            config,
            delta: 0.0,
            window: SyncWindow::Unsynced,
        })
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &NetworkTimeConfig {
        &self.config
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn window(&self) -> SyncWindow {
        self.window
    }

    pub fn is_synchronized(&self) -> bool {
        matches!(self.window, SyncWindow::Synced { .. })
    }

    /// Uncertainty at the current real time, grown by drift since the last
    /// resync. `None` if never synchronized.
    pub fn uncertainty_now(&self) -> Option<f64> {
        self.uncertainty_at(self.clock.real_time())
    }

    pub fn uncertainty_at(&self, now: f64) -> Option<f64> {
        match self.window {
            SyncWindow::Unsynced => None,
            SyncWindow::Synced {
                uncertainty,
                last_resync,
            } => Some(uncertainty + (now - last_resync) * self.config.clock_drift_per_second()),
        }
    }

    /// Local real time of the last accepted sample, or 0 if never synchronized.
    pub fn last_resync_time(&self) -> f64 {
        match self.window {
            SyncWindow::Unsynced => 0.0,
            SyncWindow::Synced { last_resync, .. } => last_resync,
        }
    }

    /// Returns to the never-synchronized state.
    pub fn clear(&mut self) {
        self.delta = 0.0;
        self.window = SyncWindow::Unsynced;
    }

    /// Host clock jumped by `adjustment` seconds. The offset moves with it;
    /// the window stays valid relative to the new clock.
    pub fn on_clock_reset(&mut self, adjustment: f64) {
        debug!(
            "clock reset by {:.3} s, delta {:.3} -> {:.3}",
            adjustment,
            self.delta,
            self.delta + adjustment
        );
        self.delta += adjustment;
    }

    /// Merges a sample from the authoritative server: `network_time` was the
    /// server's clock at our `local_time`.
    pub fn resynchronize(
        &mut self,
        local_time: f64,
        network_time: NetworkTimestamp,
        new_uncertainty: f64,
        trust_new: bool,
    ) -> DeltaMerge {
        let new_delta = local_time - f64::from(network_time) / self.config.precision;
        self.new_delta(local_time, new_delta, new_uncertainty, trust_new)
    }

    /// Merges a sample relayed by another client.
    ///
    /// `echoed_timestamp` is a narrow timestamp this process sent earlier and
    /// the peer returned unchanged; `peer_server_time` is the peer's estimate
    /// of network time, in seconds, when it received it.
    pub fn peer_to_peer_resync(
        &mut self,
        peer: DoId,
        echoed_timestamp: NetworkTimestamp,
        peer_server_time: f64,
        peer_uncertainty: f64,
    ) -> PeerResync {
        let now = self.clock.real_time();
        if now - self.last_resync_time() < self.config.p2p_resync_delay {
            return PeerResync::Suppressed;
        }

        if !is_valid_sample(peer_server_time, peer_uncertainty) {
            warn!(
                "Ignoring unusable resync from {}: time {}, +/- {}.",
                peer, peer_server_time, peer_uncertainty
            );
            return PeerResync::Rejected(PeerRejection::InvalidSample);
        }

        let local_sent = self.network_to_local(echoed_timestamp, Some(now), TimeBits::Narrow);
        let elapsed = now - local_sent;

        if elapsed < 0.0 || elapsed > self.config.p2p_resync_delay {
            info!("Ignoring old request for resync from {}.", peer);
            return PeerResync::Rejected(PeerRejection::StaleTimestamp);
        }

        info!(
            "Got sync +/- {:.3} s, elapsed {:.3} s, from {}.",
            peer_uncertainty, elapsed, peer
        );

        // re-center on the send instant before widening the window
        let mut delta = (local_sent + now) / 2.0 - peer_server_time;
        delta -= elapsed / 2.0;
        let uncertainty = peer_uncertainty + elapsed / 2.0;

        match self.new_delta(local_sent, delta, uncertainty, false) {
            DeltaMerge::Rejected => PeerResync::Rejected(PeerRejection::Inconsistent),
            _ => PeerResync::Accepted,
        }
    }

    /// Merges the candidate window `new_delta ± new_uncertainty`, measured at
    /// `local_time`, into the current estimate.
    ///
    /// Overlapping windows are intersected. Disjoint windows replace the
    /// estimate only when `trust_new` is set.
    pub fn new_delta(
        &mut self,
        local_time: f64,
        new_delta: f64,
        new_uncertainty: f64,
        trust_new: bool,
    ) -> DeltaMerge {
        if !is_valid_sample(new_delta, new_uncertainty) {
            warn!(
                "discarding unusable delta {} +/- {}.",
                new_delta, new_uncertainty
            );
            return DeltaMerge::Rejected;
        }

        let mut new_delta = new_delta;
        let mut new_uncertainty = new_uncertainty;

        let merge = match self.uncertainty_now() {
            None => DeltaMerge::Initialized,
            Some(old_uncertainty) => {
                info!(
                    "previous delta at {:.3} s, +/- {:.3} s.",
                    self.delta, old_uncertainty
                );
                info!(
                    "new delta at {:.3} s, +/- {:.3} s.",
                    new_delta, new_uncertainty
                );

                let low = (self.delta - old_uncertainty).max(new_delta - new_uncertainty);
                let high = (self.delta + old_uncertainty).min(new_delta + new_uncertainty);

                if low > high {
                    if !trust_new {
                        info!("discarding new delta.");
                        return DeltaMerge::Rejected;
                    }
                    info!("discarding previous delta.");
                    DeltaMerge::Overwritten
                } else {
                    new_delta = (low + high) / 2.0;
                    new_uncertainty = (high - low) / 2.0;
                    info!(
                        "intersection at {:.3} s, +/- {:.3} s.",
                        new_delta, new_uncertainty
                    );
                    DeltaMerge::Narrowed
                }
            }
        };

        self.delta = new_delta;
        self.window = SyncWindow::Synced {
            uncertainty: new_uncertainty,
            last_resync: local_time,
        };
        merge
    }

    /// Converts a network timestamp to local real time.
    ///
    /// A narrow timestamp is disambiguated against `now` (frame time if
    /// `None`) and is exact within `± max_time_delta` of it. Wide timestamps
    /// are absolute. `bits` defaults to the configured width.
    pub fn network_to_local(
        &self,
        network_time: NetworkTimestamp,
        now: Option<f64>,
        bits: impl Into<Option<TimeBits>>,
    ) -> f64 {
        let now = now.unwrap_or_else(|| self.clock.frame_time());
        let bits = self.bits_or_default(bits);

        if self.config.movie_network_time && self.clock.mode() == ClockMode::NonRealTime {
            return now;
        }

        let now_network = self.to_ticks(now);
        let diff = match bits {
            TimeBits::Narrow => i64::from(wrapping_diff(
                sign_extend(now_network, TimeBits::Narrow),
                network_time,
                TimeBits::Narrow,
            )),
            TimeBits::Wide => i64::from(network_time) - now_network,
        };

        now + diff as f64 / self.config.precision
    }

    /// Converts local real time to a network timestamp of the given width,
    /// or of the configured width for `None`.
    pub fn local_to_network(
        &self,
        local_time: f64,
        bits: impl Into<Option<TimeBits>>,
    ) -> NetworkTimestamp {
        sign_extend(self.to_ticks(local_time), self.bits_or_default(bits))
    }

    /// Network time of the current real time.
    pub fn real_network_time(&self, bits: impl Into<Option<TimeBits>>) -> NetworkTimestamp {
        self.local_to_network(self.clock.real_time(), bits)
    }

    /// Network time of the current frame.
    pub fn frame_network_time(&self, bits: impl Into<Option<TimeBits>>) -> NetworkTimestamp {
        self.local_to_network(self.clock.frame_time(), bits)
    }

    /// Seconds of local time since `network_time`, as of the current frame.
    /// Timestamps from the future report 0.
    pub fn local_elapsed_time(
        &self,
        network_time: NetworkTimestamp,
        bits: impl Into<Option<TimeBits>>,
    ) -> f64 {
        let now = self.clock.frame_time();
        let elapsed = now - self.network_to_local(network_time, Some(now), bits);
        elapsed.max(0.0)
    }

    fn bits_or_default(&self, bits: impl Into<Option<TimeBits>>) -> TimeBits {
        bits.into().unwrap_or(self.config.bits)
    }

    fn to_ticks(&self, local_time: f64) -> i64 {
        ((local_time - self.delta) * self.config.precision + 0.5).floor() as i64
    }
}

// A window must have a finite centre and a finite, non-negative half-width
fn is_valid_sample(delta: f64, uncertainty: f64) -> bool {
    delta.is_finite() && uncertainty.is_finite() && uncertainty >= 0.0
}
