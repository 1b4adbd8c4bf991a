//! Core wheel types: configuration, tuning, easing, RNG, errors.
//!
//! These are the building blocks every other module depends on. Hosts
//! describe a wheel via `WheelConfig` and `SpinTuning` rather than by
//! reaching into the engine.

pub mod config;
pub mod easing;
pub mod error;
pub mod rng;

pub use config::{SpinTuning, WheelConfig};
pub use easing::{ease_out_cubic, Easing};
pub use error::WheelError;
pub use rng::{WheelRng, WheelRngState};
