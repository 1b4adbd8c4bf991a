//! Wheel configuration types.
//!
//! Hosts configure a wheel at creation by providing:
//! - `WheelConfig`: the labeled segments and their fill colors
//! - `SpinTuning`: turn counts, animation timing, and decoration timeouts
//!
//! A `WheelConfig` is fixed for the life of an engine. Changing the segments
//! means mounting a fresh engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Easing, WheelError};

/// Segment layout of a wheel.
///
/// `labels[i]` is the sole identity of segment `i`. Colors are cosmetic and
/// cycle when there are fewer colors than segments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WheelConfigData")]
pub struct WheelConfig {
    segment_count: usize,
    labels: Vec<String>,
    colors: Vec<String>,
}

/// Unvalidated wire form of [`WheelConfig`].
#[derive(Deserialize)]
struct WheelConfigData {
    segment_count: usize,
    labels: Vec<String>,
    #[serde(default)]
    colors: Vec<String>,
}

impl TryFrom<WheelConfigData> for WheelConfig {
    type Error = WheelError;

    fn try_from(data: WheelConfigData) -> Result<Self, Self::Error> {
        Self::new(data.segment_count, data.labels, data.colors)
    }
}

impl WheelConfig {
    /// Create a wheel configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::NoSegments`] for a zero segment count and
    /// [`WheelError::LabelCountMismatch`] when `labels` is not exactly
    /// `segment_count` long.
    pub fn new<L, C>(segment_count: usize, labels: L, colors: C) -> Result<Self, WheelError>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let config = Self {
            segment_count,
            labels: labels.into_iter().map(Into::into).collect(),
            colors: colors.into_iter().map(Into::into).collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration with one segment per label.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::NoSegments`] when `labels` is empty.
    pub fn from_labels<L, C>(labels: L, colors: C) -> Result<Self, WheelError>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self::new(labels.len(), labels, colors)
    }

    /// Check the segment/label contract.
    ///
    /// # Errors
    ///
    /// See [`WheelConfig::new`].
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.segment_count == 0 {
            return Err(WheelError::NoSegments);
        }
        if self.labels.len() != self.segment_count {
            return Err(WheelError::LabelCountMismatch {
                segments: self.segment_count,
                labels: self.labels.len(),
            });
        }
        Ok(())
    }

    /// Number of equal angular slices.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Angular width of one segment in degrees.
    #[must_use]
    pub fn segment_width(&self) -> f64 {
        360.0 / self.segment_count as f64
    }

    /// All labels, index-aligned with segments.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of segment `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Configured colors (may be shorter than the segment count).
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Fill color of segment `index`, cycling through the palette.
    ///
    /// Returns `None` only when no colors were configured.
    #[must_use]
    pub fn segment_color(&self, index: usize) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()].as_str())
    }
}

/// Spin feel and timing.
///
/// The defaults match the site: 4 or 5 full turns, a 5 second decelerating
/// spin, confetti for 3 seconds and the floating result for 6 seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinTuning {
    /// Guaranteed full rotations per spin (at least 1).
    pub min_full_turns: u32,

    /// Up to this many extra full rotations, drawn uniformly.
    pub extra_full_turns: u32,

    /// Animation length. Completion is scheduled after exactly this long.
    pub spin_duration_ms: u64,

    /// How long the floating result label stays up after a spin.
    pub result_display_ms: u64,

    /// How long the confetti burst stays up after a spin.
    pub confetti_display_ms: u64,

    /// Easing curve of the spin animation.
    pub easing: Easing,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            min_full_turns: 4,
            extra_full_turns: 1,
            spin_duration_ms: 5000,
            result_display_ms: 6000,
            confetti_display_ms: 3000,
            easing: Easing::default(),
        }
    }
}

impl SpinTuning {
    /// Set the guaranteed number of full turns.
    #[must_use]
    pub fn with_min_full_turns(mut self, turns: u32) -> Self {
        self.min_full_turns = turns;
        self
    }

    /// Set the maximum number of extra full turns.
    #[must_use]
    pub fn with_extra_full_turns(mut self, turns: u32) -> Self {
        self.extra_full_turns = turns;
        self
    }

    /// Set the spin animation duration.
    #[must_use]
    pub fn with_spin_duration(mut self, duration: Duration) -> Self {
        self.spin_duration_ms = duration_ms(duration);
        self
    }

    /// Set the result label display time.
    #[must_use]
    pub fn with_result_display(mut self, duration: Duration) -> Self {
        self.result_display_ms = duration_ms(duration);
        self
    }

    /// Set the confetti display time.
    #[must_use]
    pub fn with_confetti_display(mut self, duration: Duration) -> Self {
        self.confetti_display_ms = duration_ms(duration);
        self
    }

    /// Set the animation easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    #[must_use]
    pub fn result_display(&self) -> Duration {
        Duration::from_millis(self.result_display_ms)
    }

    #[must_use]
    pub fn confetti_display(&self) -> Duration {
        Duration::from_millis(self.confetti_display_ms)
    }

    /// Check that every spin is a forward spin of at least one turn.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::InvalidTuning`] for zero guaranteed turns, a
    /// zero spin duration, or an easing curve that leaves `[0, 1]`.
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.min_full_turns == 0 {
            return Err(WheelError::InvalidTuning(
                "min_full_turns must be at least 1".into(),
            ));
        }
        if self.spin_duration_ms == 0 {
            return Err(WheelError::InvalidTuning(
                "spin_duration_ms must be positive".into(),
            ));
        }
        self.easing.validate()
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = WheelConfig::new(3, ["a", "b", "c"], ["#fff"]).unwrap();

        assert_eq!(config.segment_count(), 3);
        assert_eq!(config.label(1), Some("b"));
        assert_eq!(config.label(3), None);
        assert!((config.segment_width() - 120.0).abs() < 1e-12);
    }

    #[test]
    fn test_config_rejects_zero_segments() {
        let empty: [&str; 0] = [];
        assert_eq!(
            WheelConfig::new(0, empty, ["#fff"]),
            Err(WheelError::NoSegments)
        );
        assert_eq!(
            WheelConfig::from_labels(empty, ["#fff"]),
            Err(WheelError::NoSegments)
        );
    }

    #[test]
    fn test_config_rejects_label_mismatch() {
        let result = WheelConfig::new(5, ["a", "b", "c", "d"], ["#fff"]);
        assert_eq!(
            result,
            Err(WheelError::LabelCountMismatch { segments: 5, labels: 4 })
        );
    }

    #[test]
    fn test_colors_cycle() {
        let config = WheelConfig::from_labels(["a", "b", "c", "d", "e"], ["red", "blue"]).unwrap();

        assert_eq!(config.segment_color(0), Some("red"));
        assert_eq!(config.segment_color(1), Some("blue"));
        assert_eq!(config.segment_color(4), Some("red"));
    }

    #[test]
    fn test_no_colors() {
        let none: [&str; 0] = [];
        let config = WheelConfig::from_labels(["a", "b"], none).unwrap();
        assert_eq!(config.segment_color(0), None);
    }

    #[test]
    fn test_config_serde_revalidates() {
        let config = WheelConfig::from_labels(["a", "b"], ["red"]).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: WheelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        let bad = r#"{"segment_count":3,"labels":["a","b"],"colors":[]}"#;
        assert!(serde_json::from_str::<WheelConfig>(bad).is_err());

        let no_colors = r#"{"segment_count":1,"labels":["only"]}"#;
        let parsed: WheelConfig = serde_json::from_str(no_colors).unwrap();
        assert_eq!(parsed.label(0), Some("only"));
    }

    #[test]
    fn test_default_tuning() {
        let tuning = SpinTuning::default();
        assert_eq!(tuning.min_full_turns, 4);
        assert_eq!(tuning.extra_full_turns, 1);
        assert_eq!(tuning.spin_duration(), Duration::from_millis(5000));
        assert_eq!(tuning.result_display(), Duration::from_secs(6));
        assert_eq!(tuning.confetti_display(), Duration::from_secs(3));
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_tuning_builder() {
        let tuning = SpinTuning::default()
            .with_min_full_turns(2)
            .with_extra_full_turns(3)
            .with_spin_duration(Duration::from_millis(1200))
            .with_easing(Easing::Linear);

        assert_eq!(tuning.min_full_turns, 2);
        assert_eq!(tuning.extra_full_turns, 3);
        assert_eq!(tuning.spin_duration_ms, 1200);
        assert_eq!(tuning.easing, Easing::Linear);
    }

    #[test]
    fn test_tuning_validation() {
        assert!(matches!(
            SpinTuning::default().with_min_full_turns(0).validate(),
            Err(WheelError::InvalidTuning(_))
        ));
        assert!(matches!(
            SpinTuning::default().with_spin_duration(Duration::ZERO).validate(),
            Err(WheelError::InvalidTuning(_))
        ));
    }

    #[test]
    fn test_tuning_rejects_overshooting_easing() {
        let backward = Easing::CubicBezier { x1: 0.5, y1: -2.0, x2: 0.5, y2: 3.0 };
        assert!(matches!(
            SpinTuning::default().with_easing(backward).validate(),
            Err(WheelError::InvalidTuning(_))
        ));
        assert!(SpinTuning::default().with_easing(Easing::EaseOutCubic).validate().is_ok());
    }

    #[test]
    fn test_tuning_serialization() {
        let tuning = SpinTuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: SpinTuning = serde_json::from_str(&json).unwrap();
        assert_eq!(tuning, back);
    }
}
