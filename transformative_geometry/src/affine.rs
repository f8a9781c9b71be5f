// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition and raw-value helpers over [`kurbo::Affine`].

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Vec2};

/// Nine raw matrix values in row‑major order.
///
/// The layout is `[a, c, e, b, d, f, 0, 0, 1]`, i.e. the first row holds the
/// x scale, x skew and x translation, the second row the y skew, y scale and
/// y translation, and the last row is the projective row of an affine matrix.
pub type RawValues = [f64; 9];

/// Tolerance used when checking the projective row of raw values.
const PROJECTIVE_TOLERANCE: f64 = 1e-9;

/// Error returned by [`from_raw_values`] when the values cannot describe an
/// invertible affine transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawValuesError {
    /// The bottom row was not `0 0 1`.
    NotAffine {
        /// The offending bottom row.
        row: [f64; 3],
    },
    /// At least one value was NaN or infinite.
    NonFinite {
        /// Index of the first non-finite value.
        index: usize,
    },
    /// The linear part has a zero determinant.
    Singular,
}

impl fmt::Display for RawValuesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAffine { row } => write!(
                f,
                "projective row {:?} is not [0, 0, 1]; only affine matrices are supported",
                row
            ),
            Self::NonFinite { index } => write!(f, "raw matrix value {index} is not finite"),
            Self::Singular => f.write_str("matrix is singular and cannot be inverted"),
        }
    }
}

impl core::error::Error for RawValuesError {}

/// Rotates `transform` by `degrees` about `pivot`, applied after the existing transform.
#[must_use]
pub fn rotate_about(transform: Affine, degrees: f64, pivot: Point) -> Affine {
    transform.then_rotate_about(degrees.to_radians(), pivot)
}

/// Uniformly scales `transform` by `factor` about `pivot`, applied after the existing transform.
#[must_use]
pub fn scale_about(transform: Affine, factor: f64, pivot: Point) -> Affine {
    transform.then_scale_about(factor, pivot)
}

/// Translates `transform` by `delta`, applied after the existing transform.
#[must_use]
pub fn translate_by(transform: Affine, delta: Vec2) -> Affine {
    transform.then_translate(delta)
}

/// Maps `rect` through `transform` and returns the axis‑aligned bounding box
/// of the four mapped corners.
#[must_use]
pub fn map_rect(transform: Affine, rect: Rect) -> Rect {
    transform.transform_rect_bbox(rect)
}

/// Maps a vector through the linear part of `transform` (translation is ignored).
#[must_use]
pub fn map_vector(transform: Affine, v: Vec2) -> Vec2 {
    let [a, b, c, d, _, _] = transform.as_coeffs();
    Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
}

/// Current rotation of `transform` in degrees, in `(-180, 180]`.
///
/// Measured as the angle of the unit x‑axis after mapping it through the
/// transform.
#[must_use]
pub fn rotation_degrees(transform: Affine) -> f64 {
    map_vector(transform, Vec2::new(1.0, 0.0)).atan2().to_degrees()
}

/// Length of the mapped unit x‑axis.
///
/// For transforms composed only from rotations, uniform scales and
/// translations this is the uniform scale factor.
#[must_use]
pub fn scale_factor(transform: Affine) -> f64 {
    map_vector(transform, Vec2::new(1.0, 0.0)).hypot()
}

/// Returns the nine row‑major raw values of `transform`.
#[must_use]
pub fn to_raw_values(transform: Affine) -> RawValues {
    let [a, b, c, d, e, f] = transform.as_coeffs();
    [a, c, e, b, d, f, 0.0, 0.0, 1.0]
}

/// Builds a transform from nine row‑major raw values.
///
/// The values must be finite, the projective row must be `0 0 1` and the
/// linear part must be invertible.
pub fn from_raw_values(values: &RawValues) -> Result<Affine, RawValuesError> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(RawValuesError::NonFinite { index });
    }
    let row = [values[6], values[7], values[8]];
    if row[0].abs() > PROJECTIVE_TOLERANCE
        || row[1].abs() > PROJECTIVE_TOLERANCE
        || (row[2] - 1.0).abs() > PROJECTIVE_TOLERANCE
    {
        return Err(RawValuesError::NotAffine { row });
    }
    let [a, c, e, b, d, f, ..] = *values;
    let transform = Affine::new([a, b, c, d, e, f]);
    if transform.determinant() == 0.0 {
        return Err(RawValuesError::Singular);
    }
    Ok(transform)
}
