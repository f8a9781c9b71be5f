// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

/// Receives the transform every time it changes, for rendering.
///
/// Called after a gesture step that changed the transform, after every
/// revert frame, on the final revert commit and after layout.
///
/// Closures taking `(Affine, Rect)` implement this trait.
pub trait TransformSink {
    /// Publishes `transform` and the content rect it maps the content to.
    fn publish(&mut self, transform: Affine, content_rect: Rect);
}

impl<F> TransformSink for F
where
    F: FnMut(Affine, Rect),
{
    fn publish(&mut self, transform: Affine, content_rect: Rect) {
        self(transform, content_rect);
    }
}
