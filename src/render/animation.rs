//! Spin animation timeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Easing;

/// A forward rotation from `from` to `to` degrees over `duration`.
///
/// Purely presentational. The engine builds it from the same duration it
/// uses to schedule completion, so the wheel is at rest exactly when the
/// result is announced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    /// Scheduler time at which the spin started.
    pub started_at: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl SpinAnimation {
    /// Fraction of the duration elapsed at scheduler time `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed rotation at scheduler time `now`.
    #[must_use]
    pub fn rotation_at(&self, now: Duration) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    /// Whether the animation has run its full duration at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.started_at + self.duration
    }
}
