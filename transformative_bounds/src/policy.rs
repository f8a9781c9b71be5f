// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size, Vec2};
use transformative_geometry::{
    ScaleCenter, map_rect, rotate_about, rotation_degrees, scale_about, translate_by,
};

use crate::{Orientation, RevertToggles, ScaleLimits};

/// Corrections smaller than this (degrees or view units) are treated as zero,
/// so an in‑bounds transform is left untouched.
const SNAP_EPSILON: f64 = 1e-9;

/// Folds a rotation in degrees onto the nearest multiple of 90°.
///
/// The magnitude is bucketed with half‑open bounds: `(45, 135]` → 90,
/// `(135, 225]` → 180, `(225, 315]` → 270, anything else → 0. The sign of
/// the input is kept, so clockwise rotations fold clockwise and
/// counter‑clockwise rotations fold counter‑clockwise.
#[must_use]
pub fn fold_rotation(degrees: f64) -> f64 {
    let magnitude = degrees.abs();
    let folded = if magnitude > 45.0 && magnitude <= 135.0 {
        90.0
    } else if magnitude > 135.0 && magnitude <= 225.0 {
        180.0
    } else if magnitude > 225.0 && magnitude <= 315.0 {
        270.0
    } else {
        0.0
    };
    if degrees < 0.0 { -folded } else { folded }
}

/// Rotates `transform` about the content center so its rotation becomes the
/// folded multiple of 90°.
#[must_use]
pub fn snap_rotation(transform: Affine, content_bounds: Rect) -> Affine {
    let current = rotation_degrees(transform);
    let delta = fold_rotation(current) - current;
    if delta.abs() <= SNAP_EPSILON {
        return transform;
    }
    let pivot = map_rect(transform, content_bounds).center();
    rotate_about(transform, delta, pivot)
}

/// Scales `transform` about `pivot` so the running `scale_factor` lands back
/// inside `limits`.
///
/// Returns the corrected transform and the corrected running scale factor.
/// The applied factor is `target / scale_factor`.
#[must_use]
pub fn clamp_scale(
    transform: Affine,
    scale_factor: f64,
    limits: &ScaleLimits,
    pivot: Point,
) -> (Affine, f64) {
    let orientation = Orientation::from_rotation(rotation_degrees(transform));
    match limits.clamp_target(scale_factor, orientation) {
        Some(target) => {
            let factor = target / scale_factor;
            (scale_about(transform, factor, pivot), target)
        }
        None => (transform, scale_factor),
    }
}

/// Translation that keeps `content_rect` gap‑free or centered in a viewport
/// of size `viewport` anchored at the origin.
///
/// Each axis is handled independently. When the content is larger than the
/// viewport, a gap at the leading edge is closed first, otherwise a gap at
/// the trailing edge. When the content is not larger, it is centered.
#[must_use]
pub fn translation_correction(content_rect: Rect, viewport: Size) -> Vec2 {
    let axis = |min: f64, max: f64, extent: f64| -> f64 {
        let d = if max - min > extent {
            if min > 0.0 {
                -min
            } else if max < extent {
                extent - max
            } else {
                0.0
            }
        } else {
            extent / 2.0 - (min + max) / 2.0
        };
        if d.abs() <= SNAP_EPSILON { 0.0 } else { d }
    };
    Vec2::new(
        axis(content_rect.x0, content_rect.x1, viewport.width),
        axis(content_rect.y0, content_rect.y1, viewport.height),
    )
}

/// Translates `transform` by the [`translation_correction`] of its mapped content.
#[must_use]
pub fn clamp_translation(transform: Affine, content_bounds: Rect, viewport: Size) -> Affine {
    let delta = translation_correction(map_rect(transform, content_bounds), viewport);
    if delta == Vec2::ZERO {
        return transform;
    }
    translate_by(transform, delta)
}

/// Inputs to [`BoundsPolicy::correct`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsInput {
    /// Current transform.
    pub transform: Affine,
    /// Running cumulative scale factor tracked by the gesture recognizer.
    pub scale_factor: f64,
    /// Untransformed content rectangle.
    pub content_bounds: Rect,
    /// Viewport size; the viewport is anchored at the origin.
    pub viewport: Size,
    /// Finger midpoint used when scaling about [`ScaleCenter::FingerMidpoint`].
    pub finger_midpoint: Point,
}

/// Result of [`BoundsPolicy::correct`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
    /// Corrected transform.
    pub transform: Affine,
    /// Corrected running scale factor.
    pub scale_factor: f64,
}

/// Rotation, scale and translation constraints enforced after a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundsPolicy {
    /// Scale limits.
    pub limits: ScaleLimits,
    /// Which corrections run.
    pub toggles: RevertToggles,
    /// Pivot used by the scale correction.
    pub scale_center: ScaleCenter,
}

impl BoundsPolicy {
    /// Creates a policy.
    #[must_use]
    pub fn new(limits: ScaleLimits, toggles: RevertToggles, scale_center: ScaleCenter) -> Self {
        Self {
            limits,
            toggles,
            scale_center,
        }
    }

    /// Runs the enabled corrections in the fixed order rotation → scale →
    /// translation and returns the corrected transform and scale.
    ///
    /// Each step reads the content rect as left by the previous step.
    #[must_use]
    pub fn correct(&self, input: &BoundsInput) -> Correction {
        let bounds = input.content_bounds;
        let mut transform = input.transform;
        let mut scale_factor = input.scale_factor;

        if self.toggles.rotation {
            transform = snap_rotation(transform, bounds);
        }
        if self.toggles.scale {
            let pivot = self
                .scale_center
                .resolve(map_rect(transform, bounds), input.finger_midpoint);
            (transform, scale_factor) = clamp_scale(transform, scale_factor, &self.limits, pivot);
        }
        if self.toggles.translation {
            transform = clamp_translation(transform, bounds, input.viewport);
        }

        log::trace!(
            "bounds correction: scale {} -> {}, changed: {}",
            input.scale_factor,
            scale_factor,
            transform != input.transform
        );
        Correction {
            transform,
            scale_factor,
        }
    }
}
