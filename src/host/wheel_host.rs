//! A page hosting one wheel at a time, with tabs and a spin history.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{Local, NaiveTime};
use tracing::debug;

use crate::core::{SpinTuning, WheelConfig, WheelError, WheelRng};
use crate::engine::{WheelControl, WheelEngine};
use crate::timer::Scheduler;

use super::history::{SpinHistory, DEFAULT_HISTORY_CAPACITY};

/// Where history timestamps come from.
pub trait TimeSource {
    fn now(&self) -> NaiveTime;
}

/// Local wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always the same time of day.
#[derive(Clone, Copy, Debug)]
pub struct FixedTime(pub NaiveTime);

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Owns the active wheel and records every settled spin.
///
/// Each tab is a separate wheel configuration. Switching tabs unmounts the
/// current engine (any spin in flight is dropped without a history entry)
/// and mounts a fresh one, since a configuration never changes under a
/// live engine.
pub struct WheelHost {
    tabs: Vec<WheelConfig>,
    active: usize,
    tuning: SpinTuning,
    rng: WheelRng,
    scheduler: Rc<dyn Scheduler>,
    clock: Rc<dyn TimeSource>,
    history: Rc<RefCell<SpinHistory>>,
    engine: WheelEngine,
}

/// Builder for [`WheelHost`].
pub struct WheelHostBuilder {
    tabs: Vec<WheelConfig>,
    tuning: SpinTuning,
    seed: Option<u64>,
    clock: Rc<dyn TimeSource>,
    history_capacity: usize,
}

impl Default for WheelHostBuilder {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            tuning: SpinTuning::default(),
            seed: None,
            clock: Rc::new(LocalClock),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl WheelHostBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tab. The first tab added is shown first.
    #[must_use]
    pub fn tab(mut self, config: WheelConfig) -> Self {
        self.tabs.push(config);
        self
    }

    #[must_use]
    pub fn tuning(mut self, tuning: SpinTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Seed for every wheel the host mounts. Unseeded hosts use OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl TimeSource + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    #[must_use]
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Build the host with its first tab mounted.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::NoTabs`] without tabs, or any error from
    /// mounting the first wheel.
    pub fn build(self, scheduler: Rc<dyn Scheduler>) -> Result<WheelHost, WheelError> {
        let first = self.tabs.first().cloned().ok_or(WheelError::NoTabs)?;
        let mut rng = self.seed.map_or_else(WheelRng::from_entropy, WheelRng::new);
        let history = Rc::new(RefCell::new(SpinHistory::with_capacity(self.history_capacity)));

        let engine = mount(
            first,
            &self.tuning,
            &mut rng,
            &scheduler,
            &self.clock,
            &history,
        )?;

        Ok(WheelHost {
            tabs: self.tabs,
            active: 0,
            tuning: self.tuning,
            rng,
            scheduler,
            clock: self.clock,
            history,
            engine,
        })
    }
}

impl WheelHost {
    /// Host for `tabs` with the first tab shown, seeded spins and the local
    /// clock for history timestamps.
    ///
    /// Use [`WheelHostBuilder`] to pick a clock or history capacity.
    ///
    /// # Errors
    ///
    /// See [`WheelHostBuilder::build`].
    pub fn new(
        tabs: Vec<WheelConfig>,
        tuning: SpinTuning,
        seed: u64,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, WheelError> {
        tabs.into_iter()
            .fold(WheelHostBuilder::new(), WheelHostBuilder::tab)
            .tuning(tuning)
            .seed(seed)
            .build(scheduler)
    }

    /// Start a spin on the active wheel.
    ///
    /// Ignored while a spin is in flight. Returns whether a spin started.
    pub fn request_spin(&self) -> bool {
        if self.engine.is_spinning() {
            debug!(tab = self.active, "spin request ignored while spinning");
            return false;
        }
        self.engine.spin()
    }

    /// Show tab `index`, mounting a fresh wheel for it.
    ///
    /// Selecting the tab already shown keeps the current wheel.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::UnknownTab`] for an out-of-range index.
    pub fn select_tab(&mut self, index: usize) -> Result<(), WheelError> {
        let config = self
            .tabs
            .get(index)
            .cloned()
            .ok_or(WheelError::UnknownTab { index, tabs: self.tabs.len() })?;
        if index == self.active {
            return Ok(());
        }

        let engine = mount(
            config,
            &self.tuning,
            &mut self.rng,
            &self.scheduler,
            &self.clock,
            &self.history,
        )?;
        debug!(from = self.active, to = index, "tab switched");

        // The old engine is dropped here, cancelling its pending work.
        self.engine = engine;
        self.active = index;
        Ok(())
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn tabs(&self) -> &[WheelConfig] {
        &self.tabs
    }

    /// The mounted wheel.
    #[must_use]
    pub fn engine(&self) -> &WheelEngine {
        &self.engine
    }

    /// The mounted wheel as a control handle.
    #[must_use]
    pub fn control(&self) -> &dyn WheelControl {
        &self.engine
    }

    /// Snapshot of the spin history, newest first.
    #[must_use]
    pub fn history(&self) -> SpinHistory {
        self.history.borrow().clone()
    }

    pub fn clear_history(&self) {
        self.history.borrow_mut().clear();
    }
}

impl fmt::Debug for WheelHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelHost")
            .field("tabs", &self.tabs.len())
            .field("active", &self.active)
            .field("engine", &self.engine)
            .field("history", &self.history.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Mount an engine for `config` that records into `history` when it settles.
fn mount(
    config: WheelConfig,
    tuning: &SpinTuning,
    rng: &mut WheelRng,
    scheduler: &Rc<dyn Scheduler>,
    clock: &Rc<dyn TimeSource>,
    history: &Rc<RefCell<SpinHistory>>,
) -> Result<WheelEngine, WheelError> {
    let engine = WheelEngine::new(config, tuning.clone(), rng.fork(), Rc::clone(scheduler))?;

    let history = Rc::downgrade(history);
    let clock = Rc::clone(clock);
    engine.on_spin_complete(move |outcome| {
        if let Some(history) = history.upgrade() {
            history.borrow_mut().record_label_at(outcome.label.clone(), clock.now());
        }
    });

    Ok(engine)
}
