// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Gesture handling itself is total and never fails. These errors only come
//! out of the validating constructors in [`config`](crate::config).

use core::fmt;

/// A configuration value was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A zoom bound was zero, negative, or not finite.
    InvalidZoomBound(f64),
    /// The minimum zoom is larger than the maximum zoom.
    InvertedZoomBounds {
        /// Requested minimum zoom.
        min: f64,
        /// Requested maximum zoom.
        max: f64,
    },
    /// A swipe threshold was negative or not finite.
    InvalidThreshold {
        /// Name of the offending threshold.
        name: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomBound(value) => {
                write!(f, "zoom bound must be finite and positive, got {value}")
            }
            Self::InvertedZoomBounds { min, max } => {
                write!(f, "minimum zoom {min} exceeds maximum zoom {max}")
            }
            Self::InvalidThreshold { name } => {
                write!(f, "swipe threshold `{name}` must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_offending_value() {
        let err = ConfigError::InvertedZoomBounds { min: 4.0, max: 2.0 };
        assert_eq!(err.to_string(), "minimum zoom 4 exceeds maximum zoom 2");

        let err = ConfigError::InvalidThreshold {
            name: "quick_move_distance",
        };
        assert!(err.to_string().contains("quick_move_distance"));
    }
}
