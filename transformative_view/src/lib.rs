// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transformative View: a headless controller that lets users drag, pinch and
//! rotate an image with their fingers, and snaps it back into the viewport when
//! they let go.
//!
//! [`TransformativeView`] ties the component crates together:
//!
//! - `transformative_gesture` turns pointer events into incremental transform
//!   changes.
//! - `transformative_bounds` computes where the content should rest once the
//!   gesture ends: rotation folded to a right angle, scale within limits and
//!   no gaps between the content and the viewport edges.
//! - `transformative_revert` animates from the released transform to the
//!   corrected one.
//!
//! The view does not render. Every time the transform changes it hands the new
//! [`Affine`](kurbo::Affine) and the mapped content rect to a
//! [`TransformSink`], which may simply be a closure.
//!
//! Time is driven by the host: call [`TransformativeView::tick`] once per frame
//! while [`TransformativeView::is_reverting`] returns `true`.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::{Affine, Point, Rect, Size};
//! use transformative_view::{
//!     PointerEvent, PointerEventKind, RevertToggles, TransformConfig, TransformativeView,
//! };
//!
//! let config = TransformConfig::default().with_revert(RevertToggles::all());
//! let mut view = TransformativeView::new(config, |_t: Affine, _r: Rect| {});
//!
//! view.set_content(Some(Size::new(100.0, 100.0)));
//! view.layout(Size::new(100.0, 100.0));
//! let home = view.transform();
//!
//! // Drag the image well past the top left corner, then let go.
//! let at = |x, y| [Point::new(x, y)];
//! view.on_pointer_event(&PointerEvent::new(PointerEventKind::Down, at(50.0, 50.0)));
//! view.on_pointer_event(&PointerEvent::new(PointerEventKind::Move, at(10.0, 10.0)));
//! view.on_pointer_event(&PointerEvent::new(PointerEventKind::Up, at(10.0, 10.0)));
//! assert!(view.is_reverting());
//!
//! while view.tick(Duration::from_millis(16)) {}
//!
//! // The content once again covers the whole viewport.
//! let rect = view.content_rect();
//! assert!(rect.x1 >= 100.0 - 1e-9 && rect.y1 >= 100.0 - 1e-9);
//! assert_ne!(view.transform(), home);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod sink;
mod view;

pub use config::{ConfigError, TransformConfig};
pub use sink::TransformSink;
pub use view::{TransformativeView, ViewDebugInfo};

pub use transformative_bounds::{RevertToggles, ScaleLimits};
pub use transformative_geometry::{RawValues, RawValuesError, ScaleCenter};
pub use transformative_gesture::{PointerEvent, PointerEventKind};
pub use transformative_revert::Easing;
