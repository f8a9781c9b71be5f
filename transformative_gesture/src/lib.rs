// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transformative Gesture: a multi‑touch recognizer for drag, pinch and rotate.
//!
//! This crate turns an ordered stream of [`PointerEvent`]s into incremental
//! changes of an [`Affine`](kurbo::Affine) transform:
//!
//! - **One finger** drags: the transform is translated by the movement of the
//!   finger.
//! - **Two fingers** pinch and rotate: the transform is scaled by the ratio of
//!   finger distances and rotated by the change in angle of the inter‑finger
//!   vector.
//!
//! Which operations are allowed is decided per [`GestureSession`] through
//! [`Capabilities`], recomputed from scratch every time a finger lands and
//! cleared whenever one of several fingers lifts. This avoids a finger‑count
//! change being misread as movement mid‑gesture.
//!
//! The recognizer never owns the transform. Each call to
//! [`GestureRecognizer::handle`] takes the current transform by value and
//! returns the new one in the [`GestureStep`], so the host decides where the
//! transform lives and when it is published.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect};
//! use transformative_gesture::{GestureRecognizer, GestureStep, PointerEvent, PointerEventKind};
//!
//! let content = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let mut recognizer = GestureRecognizer::default();
//! let transform = Affine::IDENTITY;
//!
//! let down = PointerEvent::new(PointerEventKind::Down, [Point::new(10.0, 10.0)]);
//! assert_eq!(recognizer.handle(&down, transform, Some(content)), GestureStep::Began);
//!
//! let moved = PointerEvent::new(PointerEventKind::Move, [Point::new(25.0, 30.0)]);
//! let GestureStep::Moved { transform, changed } =
//!     recognizer.handle(&moved, transform, Some(content))
//! else {
//!     unreachable!();
//! };
//! assert!(changed);
//! assert_eq!(transform, Affine::translate((15.0, 20.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod recognizer;
mod session;

pub use event::{PointerEvent, PointerEventKind};
pub use recognizer::{GestureRecognizer, GestureStep};
pub use session::{Capabilities, GestureSession};
