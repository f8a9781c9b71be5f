// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time settings for a [`TransformativeView`](crate::TransformativeView).

use core::fmt;
use core::time::Duration;

use transformative_bounds::RevertToggles;
use transformative_geometry::ScaleCenter;
use transformative_revert::Easing;

const DEFAULT_MAX_SCALE_FACTOR: f64 = 2.0;
const DEFAULT_INITIAL_SCALE_MULTIPLIER: f64 = 1.2;
const DEFAULT_REVERT_DURATION: Duration = Duration::from_millis(300);

/// Problem found by [`TransformConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The maximum scale factor is not a positive finite number.
    InvalidMaxScale(f64),
    /// The explicit minimum scale factor is not a positive finite number.
    InvalidMinScale(f64),
    /// The explicit minimum scale factor exceeds the maximum.
    MinAboveMax {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The initial scale multiplier is not a positive finite number.
    InvalidInitialScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxScale(v) => write!(f, "max scale factor {v} must be positive"),
            Self::InvalidMinScale(v) => write!(f, "min scale factor {v} must be positive"),
            Self::MinAboveMax { min, max } => {
                write!(f, "min scale factor {min} exceeds max scale factor {max}")
            }
            Self::InvalidInitialScale(v) => {
                write!(f, "initial scale multiplier {v} must be positive")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Settings fixed when a view is constructed.
///
/// Build with [`TransformConfig::default`] and the `with_*` methods. Views
/// always store the [`normalized`](TransformConfig::normalized) form, so
/// invalid values are clamped rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformConfig {
    /// Upper bound of the running scale factor.
    pub max_scale_factor: f64,
    /// Explicit lower bound; when set it replaces both per‑orientation
    /// minimums computed at layout time.
    pub min_scale_factor: Option<f64>,
    /// Initial scale relative to the fit‑to‑viewport minimum.
    pub initial_scale_multiplier: f64,
    /// Duration of the snap‑back animation.
    pub revert_duration: Duration,
    /// Progress curve of the snap‑back animation.
    pub easing: Easing,
    /// Pivot for scale operations.
    pub scale_center: ScaleCenter,
    /// Which corrections run when a gesture ends.
    pub revert: RevertToggles,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            max_scale_factor: DEFAULT_MAX_SCALE_FACTOR,
            min_scale_factor: None,
            initial_scale_multiplier: DEFAULT_INITIAL_SCALE_MULTIPLIER,
            revert_duration: DEFAULT_REVERT_DURATION,
            easing: Easing::default(),
            scale_center: ScaleCenter::default(),
            revert: RevertToggles::NONE,
        }
    }
}

impl TransformConfig {
    /// Sets the maximum scale factor.
    #[must_use]
    pub fn with_max_scale_factor(mut self, max: f64) -> Self {
        self.max_scale_factor = max;
        self
    }

    /// Sets an explicit minimum scale factor.
    #[must_use]
    pub fn with_min_scale_factor(mut self, min: Option<f64>) -> Self {
        self.min_scale_factor = min;
        self
    }

    /// Sets the initial scale multiplier.
    #[must_use]
    pub fn with_initial_scale_multiplier(mut self, multiplier: f64) -> Self {
        self.initial_scale_multiplier = multiplier;
        self
    }

    /// Sets the snap‑back duration.
    #[must_use]
    pub fn with_revert_duration(mut self, duration: Duration) -> Self {
        self.revert_duration = duration;
        self
    }

    /// Sets the snap‑back easing.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the scale pivot.
    #[must_use]
    pub fn with_scale_center(mut self, scale_center: ScaleCenter) -> Self {
        self.scale_center = scale_center;
        self
    }

    /// Sets which corrections run when a gesture ends.
    #[must_use]
    pub fn with_revert(mut self, revert: RevertToggles) -> Self {
        self.revert = revert;
        self
    }

    /// Reports the first invalid setting, if any.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.max_scale_factor) {
            return Err(ConfigError::InvalidMaxScale(self.max_scale_factor));
        }
        if let Some(min) = self.min_scale_factor {
            if !is_positive(min) {
                return Err(ConfigError::InvalidMinScale(min));
            }
            if min > self.max_scale_factor {
                return Err(ConfigError::MinAboveMax {
                    min,
                    max: self.max_scale_factor,
                });
            }
        }
        if !is_positive(self.initial_scale_multiplier) {
            return Err(ConfigError::InvalidInitialScale(
                self.initial_scale_multiplier,
            ));
        }
        Ok(())
    }

    /// Returns a copy with every invalid setting clamped.
    ///
    /// - A non‑positive or non‑finite maximum or multiplier falls back to its
    ///   default.
    /// - A non‑positive or non‑finite explicit minimum is dropped.
    /// - A minimum above the maximum is swapped with it, like a reversed range.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut config = self;
        while let Err(err) = config.validate() {
            log::warn!("clamping configuration: {err}");
            match err {
                ConfigError::InvalidMaxScale(_) => {
                    config.max_scale_factor = DEFAULT_MAX_SCALE_FACTOR;
                }
                ConfigError::InvalidMinScale(_) => config.min_scale_factor = None,
                ConfigError::MinAboveMax { min, max } => {
                    config.min_scale_factor = Some(max);
                    config.max_scale_factor = min;
                }
                ConfigError::InvalidInitialScale(_) => {
                    config.initial_scale_multiplier = DEFAULT_INITIAL_SCALE_MULTIPLIER;
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use transformative_bounds::RevertToggles;
    use transformative_geometry::ScaleCenter;

    use super::{ConfigError, TransformConfig};

    #[test]
    fn defaults_are_valid() {
        let config = TransformConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_scale_factor, 2.0);
        assert_eq!(config.min_scale_factor, None);
        assert_eq!(config.revert_duration, Duration::from_millis(300));
        assert_eq!(config.scale_center, ScaleCenter::ContentCenter);
        assert!(!config.revert.any());
    }

    #[test]
    fn builder_sets_fields() {
        let config = TransformConfig::default()
            .with_max_scale_factor(4.0)
            .with_min_scale_factor(Some(0.25))
            .with_revert_duration(Duration::from_millis(120))
            .with_scale_center(ScaleCenter::FingerMidpoint)
            .with_revert(RevertToggles::all());
        assert_eq!(config.max_scale_factor, 4.0);
        assert_eq!(config.min_scale_factor, Some(0.25));
        assert_eq!(config.revert_duration, Duration::from_millis(120));
        assert_eq!(config.scale_center, ScaleCenter::FingerMidpoint);
        assert!(config.revert.scale);
    }

    #[test]
    fn validate_reports_min_above_max() {
        let config = TransformConfig::default()
            .with_max_scale_factor(1.0)
            .with_min_scale_factor(Some(3.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::MinAboveMax { min: 3.0, max: 1.0 })
        );
    }

    #[test]
    fn normalized_swaps_reversed_range() {
        let config = TransformConfig::default()
            .with_max_scale_factor(1.0)
            .with_min_scale_factor(Some(3.0))
            .normalized();
        assert_eq!(config.max_scale_factor, 3.0);
        assert_eq!(config.min_scale_factor, Some(1.0));
    }

    #[test]
    fn normalized_replaces_nonsense_values() {
        let config = TransformConfig::default()
            .with_max_scale_factor(f64::NAN)
            .with_min_scale_factor(Some(-1.0))
            .with_initial_scale_multiplier(0.0)
            .normalized();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_scale_factor, 2.0);
        assert_eq!(config.min_scale_factor, None);
        assert_eq!(config.initial_scale_multiplier, 1.2);
    }
}
