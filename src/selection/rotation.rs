//! Rotation to segment mapping.
//!
//! The pointer is fixed at 12 o'clock. Segments are laid out clockwise from
//! angle 0, segment `i` spanning `[i * w, (i + 1) * w)` with `w = 360 / N`.
//! Rotating the wheel clockwise by `r` degrees brings the slice originally at
//! `(360 - r) mod 360` under the pointer.

use crate::core::WheelConfig;

/// Reduce an absolute rotation into `[0, 360)`.
///
/// Handles negative and very large magnitudes. A result that rounds up to
/// exactly 360.0 is folded back to 0.0.
#[must_use]
pub fn normalize_degrees(rotation: f64) -> f64 {
    let r = rotation.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Angle on the unrotated wheel that sits under the pointer.
#[must_use]
pub fn pointer_angle(rotation: f64) -> f64 {
    normalize_degrees(360.0 - normalize_degrees(rotation))
}

/// Index of the segment under the pointer for an absolute rotation.
///
/// A NaN or infinite rotation has no position on the wheel and maps to the
/// rest position, segment 0.
///
/// # Panics
///
/// Panics if `segment_count` is 0. A validated [`WheelConfig`] always has
/// at least one segment.
#[must_use]
pub fn index_at(rotation: f64, segment_count: usize) -> usize {
    assert!(segment_count > 0, "wheel must have at least one segment");
    if !rotation.is_finite() {
        return 0;
    }

    let width = 360.0 / segment_count as f64;
    // Non-negative and finite, so the cast truncates like floor.
    let index = (pointer_angle(rotation) / width) as usize;
    index % segment_count
}

/// Label of the segment under the pointer for an absolute rotation.
///
/// This is the one mapping used both when a spin settles and when a host
/// queries the current selection.
#[must_use]
pub fn label_at(config: &WheelConfig, rotation: f64) -> &str {
    let index = index_at(rotation, config.segment_count());
    config.labels()[index].as_str()
}

/// Rotation that puts the middle of segment `index` under the pointer.
///
/// Inverse of [`index_at`] up to whole turns.
#[must_use]
pub fn rotation_for_index(index: usize, segment_count: usize) -> f64 {
    let width = 360.0 / segment_count as f64;
    let center = (index % segment_count) as f64 * width + width / 2.0;
    normalize_degrees(360.0 - center)
}
