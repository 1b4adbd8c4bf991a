//! Built-in wheels.
//!
//! The "what to do tonight" page offers two tabs, an entertainment wheel
//! and a goals wheel. A bare wheel defaults to four numbered options.

use crate::core::WheelConfig;

/// Entertainment tab: five evening activities.
#[must_use]
pub fn entertainment() -> WheelConfig {
    build(
        &["Netflix", "Draw", "Movie", "Rest", "Game"],
        &["#E50914", "#1DB954", "#FFD700", "#007AFF", "#FF6B6B"],
    )
}

/// Goals tab: four small self-improvement tasks.
#[must_use]
pub fn goals() -> WheelConfig {
    build(
        &["Exercise 30 minutes", "Learn a new skill", "Read a chapter", "Plan tomorrow"],
        &["#34C759", "#FF9500", "#5AC8FA", "#5856D6"],
    )
}

/// Default wheel: four numbered options, first color repeated at the end.
#[must_use]
pub fn default_wheel() -> WheelConfig {
    build(
        &["Option 1", "Option 2", "Option 3", "Option 4"],
        &["#ff6b6b", "#4ecdc4", "#ffe66d", "#ff6b6b"],
    )
}

/// All preset tabs in page order.
#[must_use]
pub fn tabs() -> Vec<WheelConfig> {
    vec![entertainment(), goals()]
}

fn build(labels: &[&str], colors: &[&str]) -> WheelConfig {
    // Label lists are non-empty literals, so this cannot fail.
    match WheelConfig::from_labels(labels.iter().copied(), colors.iter().copied()) {
        Ok(config) => config,
        Err(err) => unreachable!("preset wheel is invalid: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_valid() {
        assert_eq!(entertainment().segment_count(), 5);
        assert_eq!(goals().segment_count(), 4);
        assert_eq!(default_wheel().segment_count(), 4);
        assert_eq!(tabs().len(), 2);
    }

    #[test]
    fn test_entertainment_order() {
        let config = entertainment();
        assert_eq!(config.label(0), Some("Netflix"));
        assert_eq!(config.label(4), Some("Game"));
        assert_eq!(config.segment_color(2), Some("#FFD700"));
    }
}
