// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transformative Geometry: affine and pointer geometry for touch transforms.
//!
//! This crate provides the small, pure building blocks shared by the rest of
//! the Transformative crates:
//! - Composition of rotate / scale / translate about a pivot onto an existing
//!   [`Affine`](kurbo::Affine), always applied *after* the current transform
//!   (in view space).
//! - Conversion to and from the nine row‑major raw matrix values used for
//!   snapshotting and interpolation.
//! - Pointer helpers: midpoint of N fingers, finger distance, and the signed
//!   angle between two inter‑finger vectors.
//! - [`ScaleCenter`], which picks the pivot for scale operations.
//!
//! Angles are expressed in **degrees** throughout. With y growing downward
//! (screen coordinates), positive angles rotate clockwise.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect, Vec2};
//! use transformative_geometry::{map_rect, rotate_about, rotation_degrees, translate_by};
//!
//! let content = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let t = translate_by(Affine::IDENTITY, Vec2::new(10.0, 20.0));
//! let t = rotate_about(t, 90.0, map_rect(t, content).center());
//!
//! assert!((rotation_degrees(t) - 90.0).abs() < 1e-9);
//! // Rotating about the content center keeps the center in place.
//! let center = map_rect(t, content).center();
//! assert!((center - Point::new(60.0, 45.0)).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod affine;
mod helpers;
mod modes;

pub use affine::{
    RawValues, RawValuesError, from_raw_values, map_rect, map_vector, rotate_about,
    rotation_degrees, scale_about, scale_factor, to_raw_values, translate_by,
};
pub use helpers::{DEGENERATE_EPSILON, distance, midpoint, signed_angle_degrees};
pub use modes::ScaleCenter;
