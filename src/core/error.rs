//! Error type for wheel construction.
//!
//! Only contract violations are errors. Runtime policies such as a spin
//! request while already spinning, or teardown in the middle of a spin,
//! are handled silently by the engine.

use thiserror::Error;

/// Errors raised when a wheel or its host is configured incorrectly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WheelError {
    /// A wheel needs at least one segment.
    #[error("wheel must have at least one segment")]
    NoSegments,

    /// Labels are index-aligned with segments and must match in length.
    #[error("segment count {segments} does not match label count {labels}")]
    LabelCountMismatch { segments: usize, labels: usize },

    /// Spin tuning parameters are out of range.
    #[error("invalid spin tuning: {0}")]
    InvalidTuning(String),

    /// A host was asked to show a tab it does not have.
    #[error("tab {index} out of range ({tabs} tabs)")]
    UnknownTab { index: usize, tabs: usize },

    /// A host was created without any wheel configurations.
    #[error("host needs at least one wheel configuration")]
    NoTabs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WheelError::LabelCountMismatch { segments: 5, labels: 4 }.to_string(),
            "segment count 5 does not match label count 4"
        );
        assert_eq!(
            WheelError::NoSegments.to_string(),
            "wheel must have at least one segment"
        );
        assert_eq!(
            WheelError::UnknownTab { index: 3, tabs: 2 }.to_string(),
            "tab 3 out of range (2 tabs)"
        );
    }
}
