//! # spin-wheel
//!
//! A random-choice spinning wheel engine.
//!
//! A wheel is divided into N labeled segments. Spinning draws a random
//! forward rotation, animates to it, and reports the segment that ends up
//! under a fixed pointer at 12 o'clock.
//!
//! ## Design Principles
//!
//! 1. **One Mapping**: The label reported when a spin settles and the label
//!    returned by `current_label()` come from the same rotation through the
//!    same function. They cannot disagree.
//!
//! 2. **Fair Draws**: The landing offset is uniform over `[0, 360)`, so
//!    every segment is equally likely regardless of turn count.
//!
//! 3. **Single Flight**: A wheel runs one spin at a time. Spin requests
//!    during a spin are ignored, never queued.
//!
//! 4. **No Blocking**: A spin waits for its animation through a deferred
//!    task on a single-threaded `Scheduler`, keyed by a spin generation so
//!    stale work is ignored and teardown is always safe.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use std::time::Duration;
//! use spin_wheel::{presets, ManualScheduler, WheelEngine};
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let wheel = WheelEngine::with_seed(presets::entertainment(), 7, scheduler.clone()).unwrap();
//!
//! assert_eq!(wheel.current_label(), "Netflix");
//!
//! wheel.spin();
//! scheduler.advance(Duration::from_millis(5000));
//! assert_eq!(wheel.selected_label(), Some(wheel.current_label()));
//! ```
//!
//! ## Modules
//!
//! - `core`: Configuration, tuning, easing, RNG, errors
//! - `selection`: Rotation to segment mapping and spin draws
//! - `render`: Geometry, animation, confetti
//! - `timer`: Single-threaded deferred task scheduling
//! - `engine`: The wheel state machine
//! - `host`: History and tabbed hosting
//! - `presets`: Built-in wheels

pub mod core;
pub mod selection;
pub mod render;
pub mod timer;
pub mod engine;
pub mod host;
pub mod presets;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Easing, SpinTuning, WheelConfig, WheelError, WheelRng, WheelRngState};

pub use crate::selection::{draw_spin, index_at, label_at, normalize_degrees, SpinDraw};

pub use crate::render::{Point, SegmentLayout, SpinAnimation};

pub use crate::timer::{ManualScheduler, Scheduler, TimerId};

pub use crate::engine::{
    Decorations, ListenerId, SpinOutcome, SpinPhase, SpinState, WheelControl, WheelEngine,
};

pub use crate::host::{HistoryEntry, SpinHistory, WheelHost, WheelHostBuilder};
