// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};
use transformative_geometry::{ScaleCenter, map_rect, rotate_about, scale_about, translate_by};

use crate::{GestureSession, PointerEvent, PointerEventKind};

/// Outcome of feeding one pointer event to a [`GestureRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureStep {
    /// A finger landed and a fresh session began.
    ///
    /// Hosts should stop any running revert animation, so subsequent moves
    /// compose onto the transform as it is right now.
    Began,
    /// Fingers moved and the permitted operations were applied.
    Moved {
        /// The transform after applying drag, scale and rotation in that order.
        transform: Affine,
        /// Whether `transform` differs from the transform passed in.
        changed: bool,
    },
    /// One of several fingers lifted; operations pause until the next down.
    Paused,
    /// All fingers lifted or the interaction was cancelled.
    Ended {
        /// Finger midpoint last latched by the ended session, if there was one.
        last_midpoint: Option<Point>,
    },
    /// The event had no effect.
    Ignored,
}

/// Converts pointer events into incremental transform updates.
///
/// The recognizer keeps a running cumulative scale factor alongside the
/// session. The transform itself does not expose a single scalar scale once
/// rotation is involved, so the host seeds this value at layout time and
/// the bounds policy updates it after corrections.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    session: Option<GestureSession>,
    scale_center: ScaleCenter,
    scale_factor: f64,
    transforming: bool,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(ScaleCenter::default())
    }
}

impl GestureRecognizer {
    /// Creates an idle recognizer that pinches about `scale_center`.
    #[must_use]
    pub fn new(scale_center: ScaleCenter) -> Self {
        Self {
            session: None,
            scale_center,
            scale_factor: 1.0,
            transforming: false,
        }
    }

    /// The active session, if any finger is down.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Pivot mode used for pinch scaling.
    #[must_use]
    pub fn scale_center(&self) -> ScaleCenter {
        self.scale_center
    }

    /// Running cumulative scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Overrides the running cumulative scale factor.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Returns `true` if a move in the current session changed the transform.
    #[must_use]
    pub fn is_transforming(&self) -> bool {
        self.transforming
    }

    /// Drops any active session without producing a step.
    pub fn reset(&mut self) {
        self.session = None;
        self.transforming = false;
    }

    /// Feeds one pointer event.
    ///
    /// `transform` is the current transform and `content_bounds` the
    /// untransformed content rectangle. Without content, moves are ignored.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        transform: Affine,
        content_bounds: Option<Rect>,
    ) -> GestureStep {
        match event.kind {
            PointerEventKind::Down => {
                let session = GestureSession::begin(event);
                log::trace!(
                    "gesture down: {} finger(s), {:?}",
                    event.finger_count(),
                    session.capabilities()
                );
                self.session = Some(session);
                self.transforming = false;
                GestureStep::Began
            }
            PointerEventKind::Move => match content_bounds {
                Some(bounds) => self.apply_move(event, transform, bounds),
                None => GestureStep::Ignored,
            },
            PointerEventKind::PointerUp => match self.session.as_mut() {
                Some(session) => {
                    session.pause();
                    GestureStep::Paused
                }
                None => GestureStep::Ignored,
            },
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let ended = self.session.take();
                log::trace!("gesture ended ({:?})", event.kind);
                GestureStep::Ended {
                    last_midpoint: ended.map(|s| s.last_midpoint()),
                }
            }
        }
    }

    fn apply_move(&mut self, event: &PointerEvent, transform: Affine, bounds: Rect) -> GestureStep {
        let Some(session) = self.session.as_mut() else {
            return GestureStep::Ignored;
        };
        let capabilities = session.capabilities();
        if !capabilities.any() {
            return GestureStep::Ignored;
        }

        let mut next = transform;
        // Each operation pivots on the content rect as left by the previous one.
        let mut content_rect = map_rect(next, bounds);

        if capabilities.drag {
            if let Some(midpoint) = event.midpoint() {
                next = translate_by(next, session.drag_delta(midpoint));
                content_rect = map_rect(next, bounds);
            }
        }

        if capabilities.scale {
            if let Some(ratio) = event.pair().and_then(|pair| session.scale_ratio(pair)) {
                let pivot = self
                    .scale_center
                    .resolve(content_rect, session.last_midpoint());
                next = scale_about(next, ratio, pivot);
                self.scale_factor *= ratio;
                content_rect = map_rect(next, bounds);
            }
        }

        if capabilities.rotate {
            if let Some(degrees) = event.pair().and_then(|pair| session.rotation_delta(pair)) {
                next = rotate_about(next, degrees, content_rect.center());
            }
        }

        let changed = next != transform;
        self.transforming |= changed;
        GestureStep::Moved {
            transform: next,
            changed,
        }
    }
}
