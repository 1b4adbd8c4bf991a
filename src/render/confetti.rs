//! Confetti burst shown when a spin settles.

use serde::{Deserialize, Serialize};

use crate::core::WheelRng;

/// Palette the burst draws from.
pub const CONFETTI_COLORS: [&str; 3] = ["#ff6b6b", "#4ecdc4", "#ffe66d"];

/// One falling confetti square.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfettiPiece {
    pub color: String,
    /// Horizontal start offset in pixels.
    pub left: f64,
    /// Start delay in seconds.
    pub delay: f64,
    /// Edge length in pixels.
    pub size: f64,
}

/// Generate `count` pieces spread over `width` pixels.
///
/// Delays fall in `[0, 2)` seconds and sizes in `[3, 13)` pixels.
pub fn confetti_burst(rng: &mut WheelRng, count: usize, width: f64) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            color: rng.choose(&CONFETTI_COLORS).copied().unwrap_or(CONFETTI_COLORS[0]).to_owned(),
            left: if width > 0.0 { rng.gen_f64(0.0, width) } else { 0.0 },
            delay: rng.gen_f64(0.0, 2.0),
            size: rng.gen_f64(3.0, 13.0),
        })
        .collect()
}
