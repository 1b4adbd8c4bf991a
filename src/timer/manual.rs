//! Virtual-clock scheduler.
//!
//! Time only moves when the host calls [`ManualScheduler::advance`]. Hosts
//! drive it from their frame or event loop; tests drive it directly, which
//! makes every spin fully deterministic.
//!
//! ## Driving From Wall-Clock Time
//!
//! A live host measures the real time between frames and feeds it in. Every
//! timer that fell due in that interval runs inside `advance`.
//!
//! ```
//! use std::rc::Rc;
//! use std::time::Instant;
//! use spin_wheel::{presets, ManualScheduler, WheelEngine};
//!
//! struct FrameClock {
//!     scheduler: Rc<ManualScheduler>,
//!     last: Instant,
//! }
//!
//! impl FrameClock {
//!     /// Call once per frame. Returns the number of timers that fired.
//!     fn tick(&mut self) -> usize {
//!         let now = Instant::now();
//!         let ran = self.scheduler.advance(now.duration_since(self.last));
//!         self.last = now;
//!         ran
//!     }
//! }
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let wheel = WheelEngine::with_seed(presets::goals(), 1, scheduler.clone()).unwrap();
//! let mut clock = FrameClock { scheduler, last: Instant::now() };
//!
//! wheel.spin();
//! clock.tick();
//! // A frame is far shorter than the spin.
//! assert!(wheel.is_spinning());
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::trace;

use super::{Scheduler, Task, TimerId};

/// Single-threaded deferred task queue with a manually advanced clock.
///
/// Tasks run in deadline order, ties in scheduling order. No internal
/// borrow is held while a task runs, so tasks may schedule or cancel
/// other tasks.
pub struct ManualScheduler {
    state: RefCell<QueueState>,
}

#[derive(Default)]
struct QueueState {
    now: Duration,
    next_id: u64,
    /// Ordered by deadline, then by id (scheduling order).
    queue: BTreeMap<(Duration, TimerId), Task>,
    /// Deadline lookup for cancellation.
    deadlines: FxHashMap<TimerId, Duration>,
}

impl ManualScheduler {
    /// Create a scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RefCell::new(QueueState::default()),
        }
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Deadline of the earliest pending task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.borrow().queue.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Move the clock forward by `delta`, running every task that falls due.
    ///
    /// Returns the number of tasks run.
    pub fn advance(&self, delta: Duration) -> usize {
        let target = self.now() + delta;
        self.advance_to(target)
    }

    /// Move the clock to `target` (never backwards), running due tasks.
    ///
    /// Tasks scheduled while advancing also run if they fall due before
    /// `target`. Returns the number of tasks run.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }

        let mut state = self.state.borrow_mut();
        if target > state.now {
            state.now = target;
        }
        ran
    }

    /// Run tasks until the queue is empty, jumping the clock as needed.
    ///
    /// Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some(deadline) = self.next_deadline() {
            ran += self.advance_to(deadline);
        }
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.state.borrow_mut();
        let &(deadline, id) = state.queue.keys().next()?;
        if deadline > target {
            return None;
        }

        let task = state.queue.remove(&(deadline, id))?;
        state.deadlines.remove(&id);
        if deadline > state.now {
            state.now = deadline;
        }
        trace!(timer = id.raw(), at_ms = deadline.as_millis() as u64, "timer fired");
        Some(task)
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId::new(state.next_id);
        state.next_id += 1;

        let deadline = state.now + delay;
        state.queue.insert((deadline, id), task);
        state.deadlines.insert(id, deadline);
        trace!(timer = id.raw(), delay_ms = delay.as_millis() as u64, "timer scheduled");
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        let mut state = self.state.borrow_mut();
        match state.deadlines.remove(&id) {
            Some(deadline) => {
                state.queue.remove(&(deadline, id));
                trace!(timer = id.raw(), "timer cancelled");
                true
            }
            None => false,
        }
    }
}
