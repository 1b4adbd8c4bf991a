//! Presentation helpers.
//!
//! None of this affects which label wins. It turns a `WheelConfig` and a
//! rotation into things a view layer can draw: slice outlines, label
//! positions, an eased animation timeline, and confetti.

mod animation;
mod confetti;
mod geometry;

pub use animation::SpinAnimation;
pub use confetti::{confetti_burst, ConfettiPiece, CONFETTI_COLORS};
pub use crate::core::{ease_out_cubic, Easing};
pub use geometry::{
    label_angle, label_position, polar_to_cartesian, segment_arc_path, segment_layout, Point,
    SegmentLayout, LABEL_RADIUS_RATIO,
};
