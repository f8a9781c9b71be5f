// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Pivot used for scale operations, both while pinching and when the scale
/// limits are enforced after a gesture.
///
/// Rotation always pivots about the content center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleCenter {
    /// Scale about the center of the mapped content rectangle.
    #[default]
    ContentCenter,
    /// Scale about the midpoint of the fingers recorded when the gesture
    /// session last latched it.
    FingerMidpoint,
}

impl ScaleCenter {
    /// Resolves the pivot point for the given content rect and finger midpoint.
    #[must_use]
    pub fn resolve(self, content_rect: Rect, finger_midpoint: Point) -> Point {
        match self {
            Self::ContentCenter => content_rect.center(),
            Self::FingerMidpoint => finger_midpoint,
        }
    }
}
