// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::Orientation;

/// Default upper scale limit.
const DEFAULT_MAX_SCALE: f64 = 2.0;
/// Per‑orientation minimum used until the first [`ScaleLimits::fit`].
const DEFAULT_MIN_SCALE: f64 = 1.0;

/// Lower and upper bounds for the running scale factor.
///
/// The upper bound is a single value. The lower bound depends on the content
/// orientation: content that fits the viewport when horizontal generally
/// needs a different factor once rotated by 90°. Both per‑orientation
/// minimums are derived from the content and viewport sizes by
/// [`ScaleLimits::fit`], unless an explicit override is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    max: f64,
    min_override: Option<f64>,
    horizontal_min: f64,
    vertical_min: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SCALE, None)
    }
}

impl ScaleLimits {
    /// Creates limits with the given maximum and optional explicit minimum.
    ///
    /// The explicit minimum, when present, takes precedence over both
    /// per‑orientation minimums.
    #[must_use]
    pub fn new(max: f64, min_override: Option<f64>) -> Self {
        let min = min_override.unwrap_or(DEFAULT_MIN_SCALE);
        Self {
            max,
            min_override,
            horizontal_min: min,
            vertical_min: min,
        }
    }

    /// Upper scale limit.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the upper scale limit.
    pub fn set_max(&mut self, max: f64) {
        self.max = max;
    }

    /// Explicit minimum overriding the per‑orientation minimums, if any.
    #[must_use]
    pub fn min_override(&self) -> Option<f64> {
        self.min_override
    }

    /// Minimum scale for the given orientation.
    #[must_use]
    pub fn min_for(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.horizontal_min,
            Orientation::Vertical => self.vertical_min,
        }
    }

    /// Recomputes the per‑orientation minimums so the content just fits the
    /// viewport.
    ///
    /// Horizontally the content's width is compared against the viewport
    /// width; rotated by 90° it is compared against the viewport height. An
    /// explicit minimum overrides both. Degenerate sizes leave the limits
    /// unchanged.
    pub fn fit(&mut self, content: Size, viewport: Size) {
        if let Some(min) = self.min_override {
            self.horizontal_min = min;
            self.vertical_min = min;
            return;
        }
        if content.width <= 0.0 || content.height <= 0.0 {
            return;
        }
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        self.horizontal_min =
            (viewport.width / content.width).min(viewport.height / content.height);
        self.vertical_min = (viewport.height / content.width).min(viewport.width / content.height);
    }

    /// Returns the scale `scale` should be corrected to, or `None` if it is
    /// within limits.
    ///
    /// Falling below the orientation minimum takes precedence over exceeding
    /// the maximum. When a small content's minimum is above the maximum, the
    /// minimum also acts as the upper bound, so a corrected scale is never
    /// corrected again. Non‑positive or non‑finite scales are left alone.
    #[must_use]
    pub fn clamp_target(&self, scale: f64, orientation: Orientation) -> Option<f64> {
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        let min = self.min_for(orientation);
        if scale < min {
            Some(min)
        } else if scale > self.max.max(min) {
            Some(self.max.max(min))
        } else {
            None
        }
    }
}
