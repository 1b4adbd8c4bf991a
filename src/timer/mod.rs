//! Deferred one-shot tasks on a single thread.
//!
//! A spin logically blocks for its animation duration without blocking the
//! thread: the engine hands a completion task to a [`Scheduler`] and returns
//! immediately. The scheduler runs it later on the same thread.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use spin_wheel::timer::{ManualScheduler, Scheduler};
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//!
//! let flag = Rc::clone(&fired);
//! scheduler.schedule(Duration::from_millis(5000), Box::new(move || flag.set(true)));
//!
//! scheduler.advance(Duration::from_millis(4999));
//! assert!(!fired.get());
//! scheduler.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

mod manual;

pub use manual::ManualScheduler;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl TimerId {
    /// Create a new timer ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Single-threaded deferred task runner.
///
/// Implementations must run each task at most once, never before its delay
/// has elapsed, and on the thread that owns the scheduler. Methods take
/// `&self` so tasks can reach the scheduler through a shared handle.
pub trait Scheduler {
    /// Current time on this scheduler's clock.
    fn now(&self) -> Duration;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;

    /// Drop a pending task. Returns `false` if it already ran or was cancelled.
    fn cancel(&self, id: TimerId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_id() {
        let id = TimerId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Timer(7)");
        assert!(TimerId::new(1) < TimerId::new(2));
    }
}
