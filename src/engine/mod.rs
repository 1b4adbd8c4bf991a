//! Wheel engine: spin state machine, completion notification, decorations.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use spin_wheel::core::WheelConfig;
//! use spin_wheel::engine::{SpinPhase, WheelEngine};
//! use spin_wheel::timer::ManualScheduler;
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let config = WheelConfig::from_labels(["Tea", "Coffee", "Water"], ["#fff"]).unwrap();
//! let wheel = WheelEngine::with_seed(config, 42, scheduler.clone()).unwrap();
//!
//! let results = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&results);
//! wheel.on_spin_complete(move |outcome| sink.borrow_mut().push(outcome.label.clone()));
//!
//! assert!(wheel.spin());
//! assert!(!wheel.spin()); // already spinning
//!
//! scheduler.advance(Duration::from_millis(5000));
//! assert_eq!(wheel.phase(), SpinPhase::Stopped);
//! assert_eq!(*results.borrow(), vec![wheel.current_label()]);
//! ```

mod state;
mod wheel;

pub use state::{Decorations, ListenerId, SpinOutcome, SpinPhase, SpinState};
pub use wheel::WheelEngine;

/// Imperative handle a host uses to drive a wheel it does not own the
/// internals of.
///
/// Hosts that show several wheels can hold them as `&dyn WheelControl`.
pub trait WheelControl {
    /// Start a spin. No-op returning `false` while one is in flight.
    fn spin(&self) -> bool;

    /// Label implied by the current rotation.
    fn current_label(&self) -> String;

    /// Current spin phase.
    fn phase(&self) -> SpinPhase;

    /// Whether a spin is in flight.
    fn is_spinning(&self) -> bool {
        self.phase() == SpinPhase::Spinning
    }
}
