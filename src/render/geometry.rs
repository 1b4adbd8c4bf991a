//! Wheel geometry: slice outlines, label placement, colors.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, matching the
//! selection math. Screen coordinates have y growing downwards.

use serde::{Deserialize, Serialize};

use crate::core::WheelConfig;

/// Fraction of the radius at which labels are centered.
pub const LABEL_RADIUS_RATIO: f64 = 0.75;

/// A point in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convert a wheel angle to screen coordinates.
///
/// Angle 0 is straight up from `center`; angles grow clockwise.
#[must_use]
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// SVG path for a pie slice from `start` to `end` degrees.
#[must_use]
pub fn segment_arc_path(center: Point, radius: f64, start: f64, end: f64) -> String {
    let from = polar_to_cartesian(center, radius, end);
    let to = polar_to_cartesian(center, radius, start);
    let large_arc = u8::from(end - start > 180.0);

    format!(
        "M {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        center.x, center.y, from.x, from.y, radius, radius, large_arc, to.x, to.y
    )
}

/// Angle through the middle of segment `index`.
#[must_use]
pub fn label_angle(index: usize, segment_count: usize) -> f64 {
    let width = 360.0 / segment_count as f64;
    index as f64 * width + width / 2.0
}

/// Where the label of segment `index` is drawn.
#[must_use]
pub fn label_position(index: usize, segment_count: usize, center: Point, radius: f64) -> Point {
    polar_to_cartesian(
        center,
        radius * LABEL_RADIUS_RATIO,
        label_angle(index, segment_count),
    )
}

/// Everything a renderer needs to draw one slice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentLayout {
    pub index: usize,
    pub label: String,
    pub color: Option<String>,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub label_position: Point,
    /// Text rotation so labels read outward along the slice.
    pub label_angle: f64,
}

/// Lay out every slice of a wheel.
#[must_use]
pub fn segment_layout(config: &WheelConfig, center: Point, radius: f64) -> Vec<SegmentLayout> {
    let n = config.segment_count();
    let width = config.segment_width();

    config
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let start_angle = index as f64 * width;
            let end_angle = (index + 1) as f64 * width;
            SegmentLayout {
                index,
                label: label.clone(),
                color: config.segment_color(index).map(str::to_owned),
                start_angle,
                end_angle,
                path: segment_arc_path(center, radius, start_angle, end_angle),
                label_position: label_position(index, n, center, radius),
                label_angle: label_angle(index, n),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(300.0, 300.0);

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_polar_zero_is_up() {
        assert!(close(polar_to_cartesian(CENTER, 250.0, 0.0), Point::new(300.0, 50.0)));
        assert!(close(polar_to_cartesian(CENTER, 250.0, 90.0), Point::new(550.0, 300.0)));
        assert!(close(polar_to_cartesian(CENTER, 250.0, 180.0), Point::new(300.0, 550.0)));
    }

    #[test]
    fn test_large_arc_flag() {
        let small = segment_arc_path(CENTER, 250.0, 0.0, 90.0);
        let big = segment_arc_path(CENTER, 250.0, 0.0, 360.0);

        assert!(small.starts_with("M 300 300 L"));
        assert!(small.contains(" 0 0 0 "));
        assert!(big.contains(" 0 1 0 "));
        assert!(small.ends_with('Z'));
    }

    #[test]
    fn test_label_angles() {
        assert_eq!(label_angle(0, 4), 45.0);
        assert_eq!(label_angle(3, 4), 315.0);
        assert_eq!(label_angle(0, 1), 180.0);
    }

    #[test]
    fn test_label_position_radius() {
        let p = label_position(1, 4, CENTER, 200.0);
        let d = ((p.x - CENTER.x).powi(2) + (p.y - CENTER.y).powi(2)).sqrt();
        assert!((d - 150.0).abs() < 1e-9);
        // Segment 1 of 4 is centered at 135 degrees: lower right.
        assert!(p.x > CENTER.x && p.y > CENTER.y);
    }

    #[test]
    fn test_segment_layout() {
        let config = WheelConfig::from_labels(["a", "b", "c"], ["red", "blue"]).unwrap();
        let layout = segment_layout(&config, CENTER, 250.0);

        assert_eq!(layout.len(), 3);
        assert_eq!(layout[2].label, "c");
        assert_eq!(layout[2].color.as_deref(), Some("red"));
        assert_eq!(layout[1].start_angle, 120.0);
        assert_eq!(layout[1].end_angle, 240.0);
        assert_eq!(layout[0].label_angle, 60.0);
    }
}
