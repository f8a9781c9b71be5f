// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

use kurbo::{Affine, Point, Rect, Size};
use transformative_bounds::{BoundsInput, BoundsPolicy, Orientation, ScaleLimits};
use transformative_geometry::{
    RawValues, RawValuesError, from_raw_values, map_rect, rotation_degrees, scale_about,
    scale_factor, to_raw_values, translate_by,
};
use transformative_gesture::{GestureRecognizer, GestureStep, PointerEvent};
use transformative_revert::{RevertAnimator, RevertSpec, RevertStep};

use crate::{TransformConfig, TransformSink};

/// Headless controller for an image that can be dragged, pinched and rotated.
///
/// The view owns the current transform and wires the gesture recognizer,
/// the bounds policy and the revert animator together:
///
/// - Pointer events go to [`TransformativeView::on_pointer_event`]. Moves
///   update the transform and publish it to the [`TransformSink`].
/// - When the last finger lifts and any revert toggle is on, the bounds
///   policy computes the corrected transform and a revert run starts.
/// - The host calls [`TransformativeView::tick`] once per frame while
///   [`TransformativeView::is_reverting`] is `true`.
///
/// Everything runs on the caller's thread; no timers or callbacks are kept.
pub struct TransformativeView<S> {
    config: TransformConfig,
    sink: S,
    content: Option<Size>,
    viewport: Option<Size>,
    transform: Affine,
    content_rect: Rect,
    recognizer: GestureRecognizer,
    policy: BoundsPolicy,
    animator: RevertAnimator,
}

impl<S> fmt::Debug for TransformativeView<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformativeView")
            .field("config", &self.config)
            .field("content", &self.content)
            .field("viewport", &self.viewport)
            .field("transform", &self.transform)
            .field("content_rect", &self.content_rect)
            .field("recognizer", &self.recognizer)
            .field("policy", &self.policy)
            .field("animator", &self.animator)
            .finish_non_exhaustive()
    }
}

impl<S: TransformSink> TransformativeView<S> {
    /// Creates a view with no content and no viewport yet.
    ///
    /// `config` is [normalized](TransformConfig::normalized) first.
    pub fn new(config: TransformConfig, sink: S) -> Self {
        let config = config.normalized();
        Self {
            config,
            sink,
            content: None,
            viewport: None,
            transform: Affine::IDENTITY,
            content_rect: Rect::ZERO,
            recognizer: GestureRecognizer::new(config.scale_center),
            policy: BoundsPolicy::new(
                ScaleLimits::new(config.max_scale_factor, config.min_scale_factor),
                config.revert,
                config.scale_center,
            ),
            animator: RevertAnimator::new(config.easing),
        }
    }

    /// The normalized configuration.
    #[must_use]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// The transform sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the transform sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Content bounds mapped through the current transform.
    ///
    /// Empty while there is no content.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    /// Current transform as nine row‑major raw values.
    #[must_use]
    pub fn raw_values(&self) -> RawValues {
        to_raw_values(self.transform)
    }

    /// Running cumulative scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.recognizer.scale_factor()
    }

    /// Returns `true` while a revert run is active.
    #[must_use]
    pub fn is_reverting(&self) -> bool {
        self.animator.is_running()
    }

    /// Returns `true` if a move in the current gesture changed the transform.
    #[must_use]
    pub fn is_transforming(&self) -> bool {
        self.recognizer.is_transforming()
    }

    /// Replaces the maximum scale factor.
    ///
    /// Values that would make the configuration invalid are ignored.
    pub fn set_max_scale_factor(&mut self, max: f64) {
        let candidate = self.config.with_max_scale_factor(max);
        if let Err(err) = candidate.validate() {
            log::warn!("ignoring max scale factor: {err}");
            return;
        }
        self.config = candidate;
        self.policy.limits.set_max(max);
    }

    /// Sets the untransformed content size, or `None` when there is no content.
    ///
    /// If the viewport is known, the view is laid out again.
    pub fn set_content(&mut self, content: Option<Size>) {
        self.content = content;
        match self.viewport {
            Some(viewport) => self.layout(viewport),
            None => self.refresh_content_rect(),
        }
    }

    /// Establishes the viewport size and resets the transform.
    ///
    /// The per‑orientation minimum scales are recomputed, the content is
    /// scaled to the horizontal minimum times the configured initial
    /// multiplier about its center, then centered in the viewport.
    pub fn layout(&mut self, viewport: Size) {
        self.viewport = Some(viewport);
        self.animator.cancel();
        self.transform = Affine::IDENTITY;

        if let Some(bounds) = self.content_bounds() {
            self.policy.limits.fit(bounds.size(), viewport);
            let scale = self
                .policy
                .limits
                .min_for(Orientation::Horizontal)
                * self.config.initial_scale_multiplier;
            self.recognizer.set_scale_factor(scale);

            let transform = scale_about(Affine::IDENTITY, scale, bounds.center());
            let center = map_rect(transform, bounds).center();
            let viewport_center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
            self.transform = translate_by(transform, viewport_center - center);
            log::debug!("layout {viewport:?}: initial scale {scale}");
        } else {
            self.recognizer.set_scale_factor(1.0);
            log::debug!("layout {viewport:?} without content");
        }
        self.publish();
    }

    /// Feeds one pointer event.
    ///
    /// Returns `true` if the transform changed and was published.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let bounds = self.content_bounds();
        match self.recognizer.handle(event, self.transform, bounds) {
            GestureStep::Began => {
                // Subsequent moves compose onto the transform as of now.
                self.cancel_revert();
                false
            }
            GestureStep::Moved { transform, changed } => {
                if changed {
                    self.transform = transform;
                    self.publish();
                }
                changed
            }
            GestureStep::Ended { last_midpoint } => {
                self.start_revert(last_midpoint);
                false
            }
            GestureStep::Paused | GestureStep::Ignored => false,
        }
    }

    /// Advances a running revert by `dt`.
    ///
    /// Returns `true` if a frame was published.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.animator.advance(dt) {
            RevertStep::Idle => false,
            RevertStep::Frame(transform) | RevertStep::Finished(transform) => {
                self.transform = transform;
                self.publish();
                true
            }
        }
    }

    /// Stops any revert and drops the gesture session.
    ///
    /// Call when the hosting widget goes away.
    pub fn teardown(&mut self) {
        self.cancel_revert();
        self.recognizer.reset();
        log::debug!("view torn down");
    }

    /// Replaces the transform from raw values and publishes it.
    ///
    /// Any running revert is cancelled and the running scale factor is
    /// re‑read from the new transform.
    pub fn set_raw_values(&mut self, values: &RawValues) -> Result<(), RawValuesError> {
        let transform = from_raw_values(values)?;
        self.animator.cancel();
        self.transform = transform;
        self.recognizer.set_scale_factor(scale_factor(transform));
        self.publish();
        Ok(())
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewDebugInfo {
        ViewDebugInfo {
            viewport: self.viewport,
            content: self.content,
            transform: self.transform,
            content_rect: self.content_rect,
            rotation_degrees: rotation_degrees(self.transform),
            scale_factor: self.recognizer.scale_factor(),
            limits: self.policy.limits,
            reverting: self.animator.is_running(),
            transforming: self.recognizer.is_transforming(),
        }
    }

    fn start_revert(&mut self, last_midpoint: Option<Point>) {
        if !self.policy.toggles.any() {
            return;
        }
        let (Some(bounds), Some(viewport)) = (self.content_bounds(), self.viewport) else {
            return;
        };
        let correction = self.policy.correct(&BoundsInput {
            transform: self.transform,
            scale_factor: self.recognizer.scale_factor(),
            content_bounds: bounds,
            viewport,
            finger_midpoint: last_midpoint.unwrap_or_else(|| self.content_rect.center()),
        });
        self.recognizer.set_scale_factor(correction.scale_factor);
        self.animator.start(RevertSpec::new(
            self.transform,
            correction.transform,
            self.config.revert_duration,
        ));
    }

    // The running scale is committed to the revert target when the run
    // starts, so a run stopped early must re‑read it from the frozen frame.
    fn cancel_revert(&mut self) {
        if self.animator.cancel() {
            self.recognizer.set_scale_factor(scale_factor(self.transform));
        }
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.content
            .filter(|size| size.width > 0.0 && size.height > 0.0)
            .map(|size| Rect::from_origin_size(Point::ZERO, size))
    }

    fn refresh_content_rect(&mut self) {
        self.content_rect = match self.content_bounds() {
            Some(bounds) => map_rect(self.transform, bounds),
            None => Rect::ZERO,
        };
    }

    fn publish(&mut self) {
        self.refresh_content_rect();
        log::trace!("publish {:?}", self.content_rect);
        self.sink.publish(self.transform, self.content_rect);
    }
}

/// Debug snapshot of a [`TransformativeView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewDebugInfo {
    /// Viewport size, once laid out.
    pub viewport: Option<Size>,
    /// Untransformed content size, if any.
    pub content: Option<Size>,
    /// Current transform.
    pub transform: Affine,
    /// Content rect mapped through the current transform.
    pub content_rect: Rect,
    /// Current rotation in degrees.
    pub rotation_degrees: f64,
    /// Running cumulative scale factor.
    pub scale_factor: f64,
    /// Active scale limits.
    pub limits: ScaleLimits,
    /// Whether a revert run is active.
    pub reverting: bool,
    /// Whether the current gesture changed the transform.
    pub transforming: bool,
}
