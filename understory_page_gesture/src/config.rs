// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance-scoped gesture configuration.
//!
//! All tunables live in plain value types owned by one
//! [`GestureCoordinator`](crate::GestureCoordinator), so two views in the same
//! process can be tuned independently.
//!
//! ```
//! use understory_page_gesture::{GestureConfig, SwipeConfig, ZoomBounds};
//!
//! let config = GestureConfig::default()
//!     .with_zoom(ZoomBounds::HIGH)
//!     .with_swipe(SwipeConfig::new(40.0, 300, 0.5).unwrap())
//!     .with_swipe_enabled(true);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.zoom.max, 8.0);
//! ```

use crate::error::ConfigError;

/// Thresholds used to classify a finished horizontal drag as a page turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Minimum horizontal travel for a quick move, in screen pixels.
    pub quick_move_distance: f64,
    /// Maximum duration of a quick move, in milliseconds.
    pub quick_move_time: u64,
    /// Fraction of the scaled optimal page width a slow drag must cover to turn the page.
    pub page_change_width_fraction: f64,
}

impl SwipeConfig {
    /// Default thresholds: 50px within 250ms, or half a page.
    pub const DEFAULT: Self = Self {
        quick_move_distance: 50.0,
        quick_move_time: 250,
        page_change_width_fraction: 0.5,
    };

    /// Create a validated swipe configuration.
    ///
    /// `quick_move_distance` and `page_change_width_fraction` must be finite and non-negative.
    pub fn new(
        quick_move_distance: f64,
        quick_move_time: u64,
        page_change_width_fraction: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            quick_move_distance,
            quick_move_time,
            page_change_width_fraction,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_non_negative(self.quick_move_distance) {
            return Err(ConfigError::InvalidThreshold {
                name: "quick_move_distance",
            });
        }
        if !is_non_negative(self.page_change_width_fraction) {
            return Err(ConfigError::InvalidThreshold {
                name: "page_change_width_fraction",
            });
        }
        Ok(())
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Inclusive range of allowed zoom factors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomBounds {
    /// Smallest allowed zoom factor.
    pub min: f64,
    /// Largest allowed zoom factor.
    pub max: f64,
}

impl ZoomBounds {
    /// Standard profile: 1x to 6x.
    pub const STANDARD: Self = Self { min: 1.0, max: 6.0 };

    /// Profile for devices that can keep more page tiles around: 1x to 8x.
    pub const HIGH: Self = Self { min: 1.0, max: 8.0 };

    /// Create validated zoom bounds.
    ///
    /// Both bounds must be finite and strictly positive, and `min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that the bounds describe a usable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for bound in [self.min, self.max] {
            if !bound.is_finite() || bound <= 0.0 {
                return Err(ConfigError::InvalidZoomBound(bound));
            }
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedZoomBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Returns `true` if `zoom` lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, zoom: f64) -> bool {
        zoom >= self.min && zoom <= self.max
    }

    /// Clamp a relative scale so that `current_zoom * scale` stays within bounds.
    ///
    /// Returns `scale_delta` unchanged when the wanted zoom is already in range,
    /// otherwise the exact ratio that lands on the violated bound.
    ///
    /// ```
    /// use understory_page_gesture::ZoomBounds;
    ///
    /// let bounds = ZoomBounds::STANDARD;
    /// assert_eq!(bounds.clamp_scale(2.0, 1.5), 1.5);
    /// assert_eq!(bounds.clamp_scale(2.0, 0.25), 0.5);
    /// assert_eq!(bounds.clamp_scale(4.0, 2.0), 1.5);
    /// ```
    #[must_use]
    pub fn clamp_scale(&self, current_zoom: f64, scale_delta: f64) -> f64 {
        let wanted = current_zoom * scale_delta;
        if wanted < self.min {
            self.min / current_zoom
        } else if wanted > self.max {
            self.max / current_zoom
        } else {
            scale_delta
        }
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Complete configuration for one [`GestureCoordinator`](crate::GestureCoordinator).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Page-turn classification thresholds.
    pub swipe: SwipeConfig,
    /// Allowed zoom range for pinch gestures.
    pub zoom: ZoomBounds,
    /// Whether finished horizontal drags turn pages. Off by default.
    pub swipe_enabled: bool,
}

impl GestureConfig {
    /// Replace the swipe thresholds.
    #[must_use]
    pub const fn with_swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    /// Replace the zoom bounds.
    #[must_use]
    pub const fn with_zoom(mut self, zoom: ZoomBounds) -> Self {
        self.zoom = zoom;
        self
    }

    /// Enable or disable swipe page turns.
    #[must_use]
    pub const fn with_swipe_enabled(mut self, enabled: bool) -> Self {
        self.swipe_enabled = enabled;
        self
    }

    /// Validate a configuration assembled through its public fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zoom.validate()?;
        self.swipe.validate()
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_profile() {
        let config = GestureConfig::default();
        assert_eq!(config.zoom, ZoomBounds { min: 1.0, max: 6.0 });
        assert_eq!(config.swipe.quick_move_distance, 50.0);
        assert_eq!(config.swipe.quick_move_time, 250);
        assert_eq!(config.swipe.page_change_width_fraction, 0.5);
        assert!(!config.swipe_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zoom_bounds_reject_bad_values() {
        assert_eq!(
            ZoomBounds::new(0.0, 6.0),
            Err(ConfigError::InvalidZoomBound(0.0))
        );
        assert_eq!(
            ZoomBounds::new(1.0, f64::INFINITY),
            Err(ConfigError::InvalidZoomBound(f64::INFINITY))
        );
        assert_eq!(
            ZoomBounds::new(4.0, 2.0),
            Err(ConfigError::InvertedZoomBounds { min: 4.0, max: 2.0 })
        );
        assert!(ZoomBounds::new(f64::NAN, 2.0).is_err());
        // A degenerate, fixed zoom is allowed.
        assert!(ZoomBounds::new(2.0, 2.0).is_ok());
    }

    #[test]
    fn swipe_config_rejects_negative_thresholds() {
        assert_eq!(
            SwipeConfig::new(-1.0, 250, 0.5),
            Err(ConfigError::InvalidThreshold {
                name: "quick_move_distance"
            })
        );
        assert_eq!(
            SwipeConfig::new(50.0, 250, f64::NAN),
            Err(ConfigError::InvalidThreshold {
                name: "page_change_width_fraction"
            })
        );
        assert!(SwipeConfig::new(0.0, 0, 0.0).is_ok());
    }

    #[test]
    fn clamp_scale_passes_in_range_delta_through() {
        let bounds = ZoomBounds::STANDARD;
        assert_eq!(bounds.clamp_scale(1.0, 3.0), 3.0);
        // Landing exactly on a bound is not a violation.
        assert_eq!(bounds.clamp_scale(3.0, 2.0), 2.0);
        assert_eq!(bounds.clamp_scale(2.0, 0.5), 0.5);
    }

    #[test]
    fn clamp_scale_snaps_to_violated_bound() {
        let bounds = ZoomBounds::STANDARD;
        assert_eq!(bounds.clamp_scale(2.0, 0.1), 0.5);
        assert_eq!(bounds.clamp_scale(3.0, 4.0), 2.0);
        // Already outside the range: the ratio pulls it back in.
        assert_eq!(bounds.clamp_scale(0.5, 1.0), 2.0);
        assert_eq!(bounds.clamp_scale(12.0, 1.0), 0.5);
    }

    #[test]
    fn clamp_scale_result_stays_within_bounds() {
        let bounds = ZoomBounds::HIGH;
        let zooms = [0.01, 0.3, 1.0, 1.7, 4.2, 8.0, 9.5, 1.0e4];
        let deltas = [1.0e-6, 0.1, 0.9, 1.0, 1.1, 3.3, 50.0, 1.0e6];
        for zoom in zooms {
            for delta in deltas {
                let result = zoom * bounds.clamp_scale(zoom, delta);
                assert!(
                    result >= bounds.min - 1e-12 && result <= bounds.max + 1e-12,
                    "zoom {zoom} * delta {delta} escaped bounds: {result}"
                );
            }
        }
    }

    #[test]
    fn builder_helpers_replace_fields() {
        let config = GestureConfig::default()
            .with_zoom(ZoomBounds::HIGH)
            .with_swipe_enabled(true);
        assert_eq!(config.zoom.max, 8.0);
        assert!(config.swipe_enabled);
        assert_eq!(config.swipe, SwipeConfig::DEFAULT);
    }

    #[test]
    fn validate_catches_hand_built_config() {
        let config = GestureConfig {
            zoom: ZoomBounds { min: 3.0, max: 1.0 },
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
