//! Random spin targets.

use serde::{Deserialize, Serialize};

use crate::core::{SpinTuning, WheelRng};

/// One random draw for a spin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinDraw {
    /// Full clockwise turns.
    pub full_turns: u32,
    /// Extra offset in `[0, 360)` degrees.
    pub offset: f64,
}

impl SpinDraw {
    /// Total forward travel in degrees.
    #[must_use]
    pub fn travel(&self) -> f64 {
        f64::from(self.full_turns) * 360.0 + self.offset
    }

    /// Absolute target rotation starting from `base`.
    #[must_use]
    pub fn target_from(&self, base: f64) -> f64 {
        base + self.travel()
    }
}

/// Draw turn count and offset for the next spin.
///
/// Turns are uniform over `min_full_turns..=min_full_turns + extra_full_turns`
/// and the offset is uniform over `[0, 360)`, so every landing angle is
/// equally likely whatever the turn count.
pub fn draw_spin(rng: &mut WheelRng, tuning: &SpinTuning) -> SpinDraw {
    let extra = rng.gen_inclusive(0, tuning.extra_full_turns);
    SpinDraw {
        full_turns: tuning.min_full_turns.saturating_add(extra),
        offset: rng.gen_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_turns() {
        let mut rng = WheelRng::new(11);
        let tuning = SpinTuning::default();

        for _ in 0..500 {
            let draw = draw_spin(&mut rng, &tuning);
            assert!(draw.full_turns == 4 || draw.full_turns == 5);
            assert!((0.0..360.0).contains(&draw.offset));
            assert!(draw.travel() >= 4.0 * 360.0);
        }
    }

    #[test]
    fn test_no_extra_turns() {
        let mut rng = WheelRng::new(5);
        let tuning = SpinTuning::default().with_min_full_turns(1).with_extra_full_turns(0);

        for _ in 0..100 {
            assert_eq!(draw_spin(&mut rng, &tuning).full_turns, 1);
        }
    }

    #[test]
    fn test_target_from_base() {
        let draw = SpinDraw { full_turns: 4, offset: 30.0 };
        assert_eq!(draw.target_from(100.0), 100.0 + 1440.0 + 30.0);
    }
}
