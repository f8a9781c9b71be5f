// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transformative Bounds: constraints applied after a touch gesture ends.
//!
//! Given the current transform, the untransformed content rectangle and the
//! viewport size, [`BoundsPolicy::correct`] computes the transform the content
//! should settle into:
//!
//! 1. **Rotation**: snap to the nearest multiple of 90° ([`fold_rotation`]).
//! 2. **Scale**: clamp the running scale factor into the [`ScaleLimits`] for
//!    the content's current [`Orientation`].
//! 3. **Translation**: on each axis, remove any gap between content and
//!    viewport edges when the content is larger than the viewport, or center
//!    it when it is smaller.
//!
//! The order is a hard contract. Rotation and scale both move the mapped
//! content rectangle, and translation is computed from that rectangle, so
//! reordering the steps gives different results. Each step can be switched
//! off through [`RevertToggles`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect, Size};
//! use transformative_bounds::{BoundsInput, BoundsPolicy, RevertToggles, ScaleLimits};
//! use transformative_geometry::{ScaleCenter, map_rect, rotate_about};
//!
//! let content = Rect::new(0.0, 0.0, 200.0, 100.0);
//! let viewport = Size::new(400.0, 400.0);
//! let policy = BoundsPolicy::new(
//!     ScaleLimits::default(),
//!     RevertToggles::all(),
//!     ScaleCenter::ContentCenter,
//! );
//!
//! // Slightly rotated and pushed off to the side.
//! let transform = rotate_about(Affine::translate((300.0, 0.0)), 20.0, Point::new(400.0, 50.0));
//! let corrected = policy.correct(&BoundsInput {
//!     transform,
//!     scale_factor: 1.0,
//!     content_bounds: content,
//!     viewport,
//!     finger_midpoint: Point::ZERO,
//! });
//!
//! // Rotation is undone and the (smaller than viewport) content is centered.
//! let rect = map_rect(corrected.transform, content);
//! assert!((rect.center() - Point::new(200.0, 200.0)).hypot() < 1e-9);
//! assert!((rect.width() - 200.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod limits;
mod modes;
mod policy;

pub use limits::ScaleLimits;
pub use modes::{Orientation, RevertToggles};
pub use policy::{
    BoundsInput, BoundsPolicy, Correction, clamp_scale, clamp_translation, fold_rotation,
    snap_rotation, translation_correction,
};
