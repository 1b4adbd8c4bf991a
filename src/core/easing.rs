//! Easing curves for the spin animation.

use serde::{Deserialize, Serialize};

use super::WheelError;

/// Progress curve mapping elapsed fraction to travelled fraction.
///
/// All curves map 0 to 0 and 1 to 1. The spin curves decelerate towards
/// the end so the wheel visibly settles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// `1 - (1 - t)^3`.
    EaseOutCubic,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Default for Easing {
    /// `cubic-bezier(0.2, 0.8, 0.3, 1)`: fast start, long settle.
    fn default() -> Self {
        Easing::CubicBezier { x1: 0.2, y1: 0.8, x2: 0.3, y2: 1.0 }
    }
}

impl Easing {
    /// Check that the curve stays within `[0, 1]` and never runs backwards.
    ///
    /// Bezier control points must be finite and inside the unit square.
    /// Points outside it overshoot or undershoot, which draws the wheel
    /// turning against the spin.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::InvalidTuning`] naming the offending point.
    pub fn validate(&self) -> Result<(), WheelError> {
        let Easing::CubicBezier { x1, y1, x2, y2 } = *self else {
            return Ok(());
        };
        for (name, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(WheelError::InvalidTuning(format!(
                    "easing control point {name} = {value} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Apply the curve to `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_x(t, x1, x2);
                bezier_component(s, y1, y2)
            }
        }
    }
}

/// Ease-out cubic: decelerates to a stop.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// One coordinate of a cubic Bézier with endpoints 0 and 1.
fn bezier_component(s: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}

/// Find the curve parameter whose x coordinate is `x`.
///
/// Newton's method first, bisection when the slope is too flat.
fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_component(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    while lo < hi {
        let value = bezier_component(s, x1, x2);
        if (value - x).abs() < EPSILON {
            return s;
        }
        if x > value {
            lo = s;
        } else {
            hi = s;
        }
        let next = (lo + hi) / 2.0;
        if (next - s).abs() < f64::EPSILON {
            break;
        }
        s = next;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 3] = [
        Easing::Linear,
        Easing::EaseOutCubic,
        Easing::CubicBezier { x1: 0.2, y1: 0.8, x2: 0.3, y2: 1.0 },
    ];

    #[test]
    fn test_endpoints() {
        for easing in CURVES {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert!((easing.apply(7.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in CURVES {
            let mut prev = 0.0;
            for i in 1..=200 {
                let v = easing.apply(f64::from(i) / 200.0);
                assert!(v + 1e-9 >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_decelerates() {
        // Past the halfway point in time, more than half the distance is covered.
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.8);
        assert!(Easing::default().apply(0.5) > 0.8);
    }

    #[test]
    fn test_validate_control_points() {
        for easing in CURVES {
            assert_eq!(easing.validate(), Ok(()));
        }

        let overshoot = Easing::CubicBezier { x1: 0.5, y1: -2.0, x2: 0.5, y2: 3.0 };
        assert!(matches!(overshoot.validate(), Err(WheelError::InvalidTuning(_))));

        let nan = Easing::CubicBezier { x1: f64::NAN, y1: 0.8, x2: 0.3, y2: 1.0 };
        assert!(nan.validate().is_err());

        let infinite = Easing::CubicBezier { x1: 0.2, y1: 0.8, x2: 0.3, y2: f64::INFINITY };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = Easing::CubicBezier { x1: 0.25, y1: 0.25, x2: 0.75, y2: 0.75 };
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-5);
        }
    }
}
