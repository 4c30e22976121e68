//! # Distobj Shared
//! Network clock synchronization, message tables and datagram framing shared
//! by distributed-object clients and servers.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

cfg_if! {
    if #[cfg(all(target_arch = "wasm32", not(feature = "wbindgen")))]
    {
        compile_error!("wasm target for 'distobj_shared' crate requires the 'wbindgen' feature to be enabled.");
    }
}

mod backends;
mod constants;
mod events;
mod messages;
mod time;
mod timer_queue;
mod types;
mod wrapping_number;

pub use backends::{TimeError, Timestamp};
pub use constants::{
    CLOCK_DRIFT_PER_HOUR, MAX_DATAGRAM_RECIPIENTS, NETWORK_TIME_BITS, NETWORK_TIME_PRECISION,
    P2P_RESYNC_DELAY,
};
pub use events::{EventBus, EventName, EventNameError, EventSubscriber, SubscriptionKey};
pub use messages::{
    datagram::{get_network_time, put_network_time, DatagramHeader, PeerResyncReport, TimeSyncSample},
    error::{DatagramError, MessageRegistryError},
    message_registry::MessageRegistry,
    msg_types,
};
pub use time::{
    clock::{Clock, ClockMode},
    clock_delta::{ClockDelta, DeltaMerge, PeerRejection, PeerResync, SyncWindow},
    error::ConfigError,
    manual_clock::ManualClock,
    network_time::{NetworkTimeConfig, TimeBits},
    system_clock::SystemClock,
};
pub use timer_queue::{TaskScheduler, TimerHandle, TimerQueue};
pub use types::{Channel, DoId, MsgCode, NetworkTimestamp};
pub use wrapping_number::{sign_extend, wrapping_diff};
