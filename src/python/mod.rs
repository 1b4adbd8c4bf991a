//! Python bindings for the spin-wheel engine.
//!
//! # Quick Start
//!
//! ```python
//! import spin_wheel as sw
//!
//! wheel = sw.Wheel(["Netflix", "Draw", "Movie", "Rest", "Game"], seed=7)
//! label = wheel.spin_to_completion()
//! assert label == wheel.current_label()
//!
//! # Fairness check over many spins
//! counts = {}
//! for _ in range(10_000):
//!     picked = wheel.spin_to_completion()
//!     counts[picked] = counts.get(picked, 0) + 1
//! ```

use pyo3::prelude::*;

mod py_wheel;

pub use py_wheel::*;

/// spin_wheel: random-choice wheel with consistent selection.
#[pymodule]
fn spin_wheel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWheel>()?;
    m.add_function(wrap_pyfunction!(label_at, m)?)?;
    Ok(())
}
