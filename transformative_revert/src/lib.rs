// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transformative Revert: a host‑driven snap‑back animation.
//!
//! When a gesture ends out of bounds, the content should glide back rather
//! than jump. [`RevertAnimator`] interpolates each of the nine raw matrix
//! values of a [`RevertSpec`] from its `from` to its `to` transform over a
//! fixed duration, shaped by an [`Easing`] curve.
//!
//! The animator owns no timer. The host calls [`RevertAnimator::advance`]
//! once per frame with the elapsed time and applies the returned
//! [`RevertStep`]. This keeps the animation deterministic and testable with
//! synthetic time deltas.
//!
//! At most one run is active: [`RevertAnimator::start`] cancels any previous
//! run before beginning, and [`RevertAnimator::cancel`] drops the run
//! immediately so no further frames are produced.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Affine;
//! use transformative_revert::{Easing, RevertAnimator, RevertSpec, RevertStep};
//!
//! let from = Affine::translate((100.0, 0.0));
//! let to = Affine::IDENTITY;
//! let mut animator = RevertAnimator::new(Easing::Linear);
//! animator.start(RevertSpec::new(from, to, Duration::from_millis(300)));
//!
//! let RevertStep::Frame(mid) = animator.advance(Duration::from_millis(150)) else {
//!     unreachable!();
//! };
//! assert!((mid.translation().x - 50.0).abs() < 1e-9);
//!
//! assert_eq!(
//!     animator.advance(Duration::from_millis(150)),
//!     RevertStep::Finished(to)
//! );
//! assert!(!animator.is_running());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
mod easing;

pub use animator::{RevertAnimator, RevertSpec, RevertStep, interpolate_raw_values};
pub use easing::Easing;
