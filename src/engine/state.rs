//! Spin state and the values the engine reports to its host.

use serde::{Deserialize, Serialize};

/// Where a wheel is in its spin cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinPhase {
    /// Never spun.
    #[default]
    Idle,
    /// Animating towards the drawn target; further spin requests are ignored.
    Spinning,
    /// Settled; `selected_label` holds the winner.
    Stopped,
}

/// Snapshot of a wheel's spin state.
///
/// Whenever `selected_label` is present it equals the label under the
/// pointer at `rotation`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinState {
    pub phase: SpinPhase,

    /// Absolute clockwise rotation in degrees. Only grows; read modulo 360.
    pub rotation: f64,

    /// Winner of the last settled spin. `None` until a spin settles and
    /// again while the next spin is in flight.
    pub selected_label: Option<String>,

    /// Number of spins that have settled.
    pub spin_count: u64,

    /// Identity of the latest accepted spin. Deferred work tagged with an
    /// older generation is ignored.
    pub generation: u64,
}

/// Result delivered to completion listeners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Winning segment index.
    pub index: usize,
    /// Winning label.
    pub label: String,
    /// Absolute rotation the wheel settled at.
    pub rotation: f64,
    /// 1-based count of settled spins on this wheel.
    pub spin_number: u64,
}

/// Transient celebration state raised when a spin settles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decorations {
    /// Confetti burst on screen.
    pub confetti: bool,
    /// Winning slice drawn highlighted. Stays until the next spin.
    pub highlighted: Option<usize>,
    /// Floating result label above the pointer.
    pub result_label: Option<String>,
}

impl Decorations {
    /// Whether anything is currently shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.confetti || self.highlighted.is_some() || self.result_label.is_some()
    }

    /// Hide everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Handle for a registered completion listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}
