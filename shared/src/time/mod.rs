pub mod clock;
pub mod clock_delta;
pub mod error;
pub mod manual_clock;
pub mod network_time;
pub mod system_clock;
