//! Selection math: which segment a rotation points at, and how far to spin.
//!
//! Everything here is a pure function of its inputs. The engine calls
//! [`label_at`] both when a spin settles and when the host asks for the
//! current label, so the two can never disagree.
//!
//! ```
//! use spin_wheel::core::WheelConfig;
//! use spin_wheel::selection::{index_at, label_at};
//!
//! let config = WheelConfig::from_labels(
//!     ["Netflix", "Draw", "Movie", "Rest", "Game"],
//!     ["#E50914"],
//! ).unwrap();
//!
//! assert_eq!(label_at(&config, 0.0), "Netflix");
//! assert_eq!(index_at(72.0, 5), 4);
//! assert_eq!(label_at(&config, 72.0 + 360.0 * 9.0), "Game");
//! ```

mod draw;
mod rotation;

pub use draw::{draw_spin, SpinDraw};
pub use rotation::{index_at, label_at, normalize_degrees, pointer_angle, rotation_for_index};
