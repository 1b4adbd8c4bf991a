//! Host side of a wheel: the page that mounts it and keeps the history.
//!
//! The engine never writes history itself. The host listens for settled
//! spins and records them in a list it owns.

mod history;
mod wheel_host;

pub use history::{format_time, HistoryEntry, SpinHistory, DEFAULT_HISTORY_CAPACITY};
pub use wheel_host::{FixedTime, LocalClock, TimeSource, WheelHost, WheelHostBuilder};
