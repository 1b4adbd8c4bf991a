//! Wheel bindings for Python.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{SpinTuning, WheelConfig, WheelError, WheelRng};
use crate::engine::{SpinOutcome, SpinPhase, WheelEngine};
use crate::selection;
use crate::timer::ManualScheduler;

fn to_py_err(err: WheelError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a wheel on its own virtual clock.
///
/// Time only moves through `advance`, so scripts can simulate thousands of
/// spins instantly.
#[pyclass(name = "Wheel", unsendable)]
pub struct PyWheel {
    engine: WheelEngine,
    scheduler: Rc<ManualScheduler>,
    outcomes: Rc<RefCell<Vec<SpinOutcome>>>,
}

#[pymethods]
impl PyWheel {
    /// Create a wheel.
    ///
    /// # Arguments
    /// - labels: One label per segment, clockwise from the pointer
    /// - colors: Fill colors, cycled when shorter than labels
    /// - seed: RNG seed for deterministic spins
    /// - min_full_turns / extra_full_turns: Spin length
    /// - spin_duration_ms: Animation and completion delay
    #[new]
    #[pyo3(signature = (
        labels,
        colors = Vec::new(),
        seed = 42,
        min_full_turns = 4,
        extra_full_turns = 1,
        spin_duration_ms = 5000
    ))]
    fn new(
        labels: Vec<String>,
        colors: Vec<String>,
        seed: u64,
        min_full_turns: u32,
        extra_full_turns: u32,
        spin_duration_ms: u64,
    ) -> PyResult<Self> {
        let config = WheelConfig::from_labels(labels, colors).map_err(to_py_err)?;
        let tuning = SpinTuning::default()
            .with_min_full_turns(min_full_turns)
            .with_extra_full_turns(extra_full_turns)
            .with_spin_duration(Duration::from_millis(spin_duration_ms));

        let scheduler = Rc::new(ManualScheduler::new());
        let engine = WheelEngine::new(config, tuning, WheelRng::new(seed), scheduler.clone())
            .map_err(to_py_err)?;

        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&outcomes);
        engine.on_spin_complete(move |outcome| sink.borrow_mut().push(outcome.clone()));

        Ok(Self { engine, scheduler, outcomes })
    }

    /// Start a spin. Returns False if one is already in flight.
    fn spin(&self) -> bool {
        self.engine.spin()
    }

    /// Advance the virtual clock. Returns the number of timers that fired.
    fn advance(&self, ms: u64) -> usize {
        self.scheduler.advance(Duration::from_millis(ms))
    }

    /// Spin and run the clock until the wheel settles. Returns the label.
    fn spin_to_completion(&self) -> Option<String> {
        if !self.engine.spin() {
            return None;
        }
        self.scheduler.run_until_idle();
        self.engine.selected_label()
    }

    fn current_label(&self) -> String {
        self.engine.current_label()
    }

    fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    #[getter]
    fn phase(&self) -> &'static str {
        match self.engine.phase() {
            SpinPhase::Idle => "idle",
            SpinPhase::Spinning => "spinning",
            SpinPhase::Stopped => "stopped",
        }
    }

    #[getter]
    fn rotation(&self) -> f64 {
        self.engine.rotation()
    }

    #[getter]
    fn visual_rotation(&self) -> f64 {
        self.engine.visual_rotation()
    }

    #[getter]
    fn selected_label(&self) -> Option<String> {
        self.engine.selected_label()
    }

    #[getter]
    fn spin_count(&self) -> u64 {
        self.engine.spin_count()
    }

    /// Settled spins since the last call, as (index, label, rotation).
    fn drain_outcomes(&self) -> Vec<(usize, String, f64)> {
        self.outcomes
            .borrow_mut()
            .drain(..)
            .map(|o| (o.index, o.label, o.rotation))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Wheel(segments={}, phase={}, label={:?})",
            self.engine.config().segment_count(),
            self.phase(),
            self.engine.current_label()
        )
    }
}

/// Label under the pointer for `rotation` degrees.
#[pyfunction]
pub fn label_at(labels: Vec<String>, rotation: f64) -> PyResult<String> {
    let none: [String; 0] = [];
    let config = WheelConfig::from_labels(labels, none).map_err(to_py_err)?;
    Ok(selection::label_at(&config, rotation).to_owned())
}
