//! The wheel engine.
//!
//! One engine per displayed wheel. The engine owns its configuration and
//! spin state; the host drives it through [`WheelEngine::spin`], reads it
//! through [`WheelEngine::current_label`], and hears about settled spins
//! through [`WheelEngine::on_spin_complete`].
//!
//! ## Spin Lifecycle
//!
//! 1. `spin()` draws the target, switches to `Spinning`, and schedules one
//!    completion task `spin_duration` later
//! 2. The animation runs over the same `spin_duration`
//! 3. The completion task settles the wheel, raises decorations, and
//!    notifies listeners
//! 4. Decoration timeouts clear the confetti and the result label
//!
//! Deferred tasks hold only a weak reference to the engine and carry the
//! spin generation they belong to. Dropping the engine cancels them.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{SpinTuning, WheelConfig, WheelError, WheelRng, WheelRngState};
use crate::render::{confetti_burst, ConfettiPiece, SpinAnimation};
use crate::selection::{draw_spin, index_at, label_at};
use crate::timer::{Scheduler, TimerId};

use super::state::{Decorations, ListenerId, SpinOutcome, SpinPhase, SpinState};
use super::WheelControl;

type Listener = Rc<RefCell<dyn FnMut(&SpinOutcome)>>;

/// Random-choice wheel with a single spin in flight at a time.
pub struct WheelEngine {
    core: Rc<RefCell<EngineCore>>,
    listeners: Rc<RefCell<Listeners>>,
    scheduler: Rc<dyn Scheduler>,
}

struct EngineCore {
    config: WheelConfig,
    tuning: SpinTuning,
    rng: WheelRng,
    state: SpinState,
    decorations: Decorations,
    animation: Option<SpinAnimation>,
    /// Timers scheduled by this engine that may still be pending.
    timers: SmallVec<[TimerId; 4]>,
}

#[derive(Default)]
struct Listeners {
    next_id: u32,
    entries: SmallVec<[(ListenerId, Listener); 2]>,
}

/// Which decoration a timeout hides.
#[derive(Clone, Copy, Debug)]
enum Fade {
    Confetti,
    ResultLabel,
}

impl WheelEngine {
    /// Mount a wheel.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` breaks the segment/label contract or
    /// `tuning` would not produce a forward spin.
    pub fn new(
        config: WheelConfig,
        tuning: SpinTuning,
        rng: WheelRng,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, WheelError> {
        config.validate()?;
        tuning.validate()?;

        debug!(
            segments = config.segment_count(),
            seed = rng.seed(),
            "wheel mounted"
        );

        Ok(Self {
            core: Rc::new(RefCell::new(EngineCore {
                config,
                tuning,
                rng,
                state: SpinState::default(),
                decorations: Decorations::default(),
                animation: None,
                timers: SmallVec::new(),
            })),
            listeners: Rc::new(RefCell::new(Listeners::default())),
            scheduler,
        })
    }

    /// Mount a wheel with default tuning and a seeded RNG.
    ///
    /// # Errors
    ///
    /// See [`WheelEngine::new`].
    pub fn with_seed(
        config: WheelConfig,
        seed: u64,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, WheelError> {
        Self::new(config, SpinTuning::default(), WheelRng::new(seed), scheduler)
    }

    /// Start a spin.
    ///
    /// Returns `false` and changes nothing if a spin is already in flight.
    pub fn spin(&self) -> bool {
        let (generation, duration, stale_timers) = {
            let mut core = self.core.borrow_mut();
            if core.state.phase == SpinPhase::Spinning {
                debug!(generation = core.state.generation, "spin ignored: already spinning");
                return false;
            }

            let EngineCore { rng, tuning, .. } = &mut *core;
            let draw = draw_spin(rng, tuning);
            let from = core.state.rotation;
            let to = draw.target_from(from);
            let duration = core.tuning.spin_duration();

            core.state.phase = SpinPhase::Spinning;
            core.state.rotation = to;
            core.state.selected_label = None;
            core.state.generation += 1;
            core.decorations.clear();
            core.animation = Some(SpinAnimation {
                from,
                to,
                started_at: self.scheduler.now(),
                duration,
                easing: core.tuning.easing,
            });

            debug!(
                generation = core.state.generation,
                turns = draw.full_turns,
                offset = draw.offset,
                target = to,
                "spin accepted"
            );

            (core.state.generation, duration, std::mem::take(&mut core.timers))
        };

        // Fade timers from the previous spin have nothing left to hide.
        for id in stale_timers {
            self.scheduler.cancel(id);
        }

        let core = Rc::downgrade(&self.core);
        let listeners = Rc::downgrade(&self.listeners);
        let scheduler = Rc::downgrade(&self.scheduler);
        let id = self.scheduler.schedule(
            duration,
            Box::new(move || settle(&core, &listeners, &scheduler, generation)),
        );
        self.core.borrow_mut().timers.push(id);
        true
    }

    /// Label under the pointer for the current rotation.
    ///
    /// Valid in every phase. While spinning this is the label the wheel
    /// will settle on.
    #[must_use]
    pub fn current_label(&self) -> String {
        let core = self.core.borrow();
        label_at(&core.config, core.state.rotation).to_owned()
    }

    /// Segment index under the pointer for the current rotation.
    #[must_use]
    pub fn current_index(&self) -> usize {
        let core = self.core.borrow();
        index_at(core.state.rotation, core.config.segment_count())
    }

    /// Register a listener called once for every settled spin.
    pub fn on_spin_complete<F>(&self, listener: F) -> ListenerId
    where
        F: FnMut(&SpinOutcome) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = ListenerId::new(listeners.next_id);
        listeners.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        listeners.entries.push((id, listener));
        id
    }

    /// Deregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry, _)| *entry != id);
        listeners.entries.len() != before
    }

    #[must_use]
    pub fn phase(&self) -> SpinPhase {
        self.core.borrow().state.phase
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.phase() == SpinPhase::Spinning
    }

    /// Absolute target rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.core.borrow().state.rotation
    }

    /// Rotation as currently drawn, following the easing curve.
    ///
    /// Equals [`WheelEngine::rotation`] once the animation has run its
    /// duration.
    #[must_use]
    pub fn visual_rotation(&self) -> f64 {
        let core = self.core.borrow();
        match &core.animation {
            Some(animation) => animation.rotation_at(self.scheduler.now()),
            None => core.state.rotation,
        }
    }

    /// Label under the pointer as currently drawn.
    ///
    /// Differs from [`WheelEngine::current_label`] only mid-animation.
    #[must_use]
    pub fn displayed_label(&self) -> String {
        let rotation = self.visual_rotation();
        label_at(&self.core.borrow().config, rotation).to_owned()
    }

    /// Winner of the last settled spin.
    #[must_use]
    pub fn selected_label(&self) -> Option<String> {
        self.core.borrow().state.selected_label.clone()
    }

    #[must_use]
    pub fn spin_count(&self) -> u64 {
        self.core.borrow().state.spin_count
    }

    /// Snapshot of the spin state.
    #[must_use]
    pub fn state(&self) -> SpinState {
        self.core.borrow().state.clone()
    }

    #[must_use]
    pub fn decorations(&self) -> Decorations {
        self.core.borrow().decorations.clone()
    }

    /// The current spin animation, if the wheel has ever spun.
    #[must_use]
    pub fn animation(&self) -> Option<SpinAnimation> {
        self.core.borrow().animation.clone()
    }

    /// Confetti for the current celebration, empty when none is showing.
    ///
    /// Drawn from a per-spin context stream, so it is stable across calls
    /// and never shifts the spin draws.
    #[must_use]
    pub fn confetti(&self, count: usize, width: f64) -> Vec<ConfettiPiece> {
        let core = self.core.borrow();
        if !core.decorations.confetti {
            return Vec::new();
        }
        let context = format!("confetti-{}", core.state.spin_count);
        confetti_burst(&mut core.rng.for_context(&context), count, width)
    }

    #[must_use]
    pub fn config(&self) -> WheelConfig {
        self.core.borrow().config.clone()
    }

    #[must_use]
    pub fn tuning(&self) -> SpinTuning {
        self.core.borrow().tuning.clone()
    }

    /// RNG position, enough to replay the upcoming spin draws.
    #[must_use]
    pub fn rng_state(&self) -> WheelRngState {
        self.core.borrow().rng.state()
    }
}

impl WheelControl for WheelEngine {
    fn spin(&self) -> bool {
        WheelEngine::spin(self)
    }

    fn current_label(&self) -> String {
        WheelEngine::current_label(self)
    }

    fn phase(&self) -> SpinPhase {
        WheelEngine::phase(self)
    }
}

impl Drop for WheelEngine {
    fn drop(&mut self) {
        let Ok(mut core) = self.core.try_borrow_mut() else {
            return;
        };
        let spinning = core.state.phase == SpinPhase::Spinning;
        let timers = std::mem::take(&mut core.timers);
        drop(core);

        let cancelled = timers.into_iter().filter(|&id| self.scheduler.cancel(id)).count();
        debug!(spinning, cancelled, "wheel torn down");
    }
}

impl fmt::Debug for WheelEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core.borrow();
        f.debug_struct("WheelEngine")
            .field("config", &core.config)
            .field("state", &core.state)
            .field("decorations", &core.decorations)
            .finish_non_exhaustive()
    }
}

/// Completion task for spin `generation`.
fn settle(
    core: &Weak<RefCell<EngineCore>>,
    listeners: &Weak<RefCell<Listeners>>,
    scheduler: &Weak<dyn Scheduler>,
    generation: u64,
) {
    let Some(core) = core.upgrade() else {
        trace!(generation, "completion suppressed: wheel torn down");
        return;
    };

    let (outcome, confetti_after, result_after) = {
        let mut guard = core.borrow_mut();
        let engine = &mut *guard;
        if engine.state.generation != generation || engine.state.phase != SpinPhase::Spinning {
            trace!(generation, "completion suppressed: stale spin");
            return;
        }

        let index = index_at(engine.state.rotation, engine.config.segment_count());
        let label = engine.config.labels()[index].clone();

        engine.state.phase = SpinPhase::Stopped;
        engine.state.selected_label = Some(label.clone());
        engine.state.spin_count += 1;
        engine.decorations = Decorations {
            confetti: true,
            highlighted: Some(index),
            result_label: Some(label.clone()),
        };

        debug!(generation, index, label = %label, "spin settled");

        (
            SpinOutcome {
                index,
                label,
                rotation: engine.state.rotation,
                spin_number: engine.state.spin_count,
            },
            engine.tuning.confetti_display(),
            engine.tuning.result_display(),
        )
    };

    if let Some(scheduler) = scheduler.upgrade() {
        let fades = [
            schedule_fade(&core, &*scheduler, confetti_after, generation, Fade::Confetti),
            schedule_fade(&core, &*scheduler, result_after, generation, Fade::ResultLabel),
        ];
        core.borrow_mut().timers.extend(fades);
    }

    // Release our strong handle before running host code, so a listener
    // that drops the engine tears it down immediately.
    drop(core);
    if let Some(listeners) = listeners.upgrade() {
        notify(&listeners, &outcome);
    }
}

fn schedule_fade(
    core: &Rc<RefCell<EngineCore>>,
    scheduler: &dyn Scheduler,
    after: Duration,
    generation: u64,
    fade: Fade,
) -> TimerId {
    let core = Rc::downgrade(core);
    scheduler.schedule(
        after,
        Box::new(move || {
            let Some(core) = core.upgrade() else {
                return;
            };
            let mut core = core.borrow_mut();
            if core.state.generation != generation {
                return;
            }
            trace!(generation, ?fade, "decoration cleared");
            match fade {
                Fade::Confetti => core.decorations.confetti = false,
                Fade::ResultLabel => core.decorations.result_label = None,
            }
        }),
    )
}

/// Call every listener with no engine borrow held.
fn notify(listeners: &RefCell<Listeners>, outcome: &SpinOutcome) {
    let snapshot: SmallVec<[Listener; 2]> = listeners
        .borrow()
        .entries
        .iter()
        .map(|(_, listener)| Rc::clone(listener))
        .collect();

    for listener in snapshot {
        match listener.try_borrow_mut() {
            Ok(mut callback) => (&mut *callback)(outcome),
            Err(_) => trace!("listener already running, skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn wheel(seed: u64) -> (Rc<ManualScheduler>, WheelEngine) {
        let scheduler = Rc::new(ManualScheduler::new());
        let config = WheelConfig::from_labels(
            ["Netflix", "Draw", "Movie", "Rest", "Game"],
            ["#E50914", "#1DB954", "#FFD700", "#007AFF", "#FF6B6B"],
        )
        .unwrap();
        let engine = WheelEngine::with_seed(config, seed, scheduler.clone()).unwrap();
        (scheduler, engine)
    }

    #[test]
    fn test_initial_state() {
        let (_, engine) = wheel(1);
        assert_eq!(engine.phase(), SpinPhase::Idle);
        assert_eq!(engine.current_label(), "Netflix");
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.selected_label(), None);
        assert_eq!(engine.visual_rotation(), 0.0);
    }

    #[test]
    fn test_spin_settles_after_duration() {
        let (scheduler, engine) = wheel(2);

        assert!(engine.spin());
        assert_eq!(engine.phase(), SpinPhase::Spinning);

        scheduler.advance(ms(4999));
        assert_eq!(engine.phase(), SpinPhase::Spinning);
        assert_eq!(engine.selected_label(), None);

        scheduler.advance(ms(1));
        assert_eq!(engine.phase(), SpinPhase::Stopped);
        assert_eq!(engine.selected_label(), Some(engine.current_label()));
        assert_eq!(engine.spin_count(), 1);
    }

    #[test]
    fn test_rotation_travel() {
        let (scheduler, engine) = wheel(3);
        engine.spin();
        let first = engine.rotation();
        assert!((1440.0..2160.0).contains(&first));

        scheduler.advance(ms(5000));
        engine.spin();
        assert!(engine.rotation() - first >= 1440.0);
    }

    #[test]
    fn test_visual_rotation_follows_animation() {
        let (scheduler, engine) = wheel(4);
        engine.spin();
        let target = engine.rotation();

        assert_eq!(engine.visual_rotation(), 0.0);
        scheduler.advance(ms(2500));
        let mid = engine.visual_rotation();
        assert!(mid > 0.0 && mid < target);

        scheduler.advance(ms(2500));
        assert_eq!(engine.visual_rotation(), target);
        assert_eq!(engine.displayed_label(), engine.current_label());
    }

    #[test]
    fn test_decorations_fade() {
        let (scheduler, engine) = wheel(5);
        engine.spin();
        assert!(!engine.decorations().is_active());
        assert!(engine.confetti(10, 600.0).is_empty());

        scheduler.advance(ms(5000));
        let shown = engine.decorations();
        assert!(shown.confetti);
        assert_eq!(shown.highlighted, Some(engine.current_index()));
        assert_eq!(shown.result_label, engine.selected_label());
        assert_eq!(engine.confetti(10, 600.0).len(), 10);
        assert_eq!(engine.confetti(10, 600.0), engine.confetti(10, 600.0));

        scheduler.advance(ms(3000));
        assert!(!engine.decorations().confetti);
        assert!(engine.decorations().result_label.is_some());

        scheduler.advance(ms(3000));
        let faded = engine.decorations();
        assert!(faded.result_label.is_none());
        assert_eq!(faded.highlighted, Some(engine.current_index()));
    }

    #[test]
    fn test_new_spin_clears_decorations() {
        let (scheduler, engine) = wheel(6);
        engine.spin();
        scheduler.advance(ms(5000));
        assert!(engine.decorations().is_active());

        engine.spin();
        assert!(!engine.decorations().is_active());
        // Old fade timers were cancelled, only the new completion is pending.
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_listener_removal() {
        let (scheduler, engine) = wheel(7);
        let count = Rc::new(RefCell::new(0));

        let seen = Rc::clone(&count);
        let id = engine.on_spin_complete(move |_| *seen.borrow_mut() += 1);

        engine.spin();
        scheduler.advance(ms(5000));
        assert_eq!(*count.borrow(), 1);

        assert!(engine.remove_listener(id));
        assert!(!engine.remove_listener(id));

        engine.spin();
        scheduler.advance(ms(5000));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_rejects_bad_tuning() {
        let scheduler: Rc<dyn Scheduler> = Rc::new(ManualScheduler::new());
        let config = WheelConfig::from_labels(["a"], ["#000"]).unwrap();
        let result = WheelEngine::new(
            config,
            SpinTuning::default().with_min_full_turns(0),
            WheelRng::new(1),
            scheduler,
        );
        assert!(matches!(result, Err(WheelError::InvalidTuning(_))));
    }

    #[test]
    fn test_drop_cancels_timers() {
        let (scheduler, engine) = wheel(8);
        engine.spin();
        assert_eq!(scheduler.pending(), 1);

        drop(engine);
        assert_eq!(scheduler.pending(), 0);
    }
}
