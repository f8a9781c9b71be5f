// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-interaction gesture state: capability flags and last-seen finger geometry.
//!
//! ## Usage
//!
//! 1) Begin a session with [`GestureSession::begin`] whenever a finger lands.
//! 2) On each move, call [`GestureSession::drag_delta`],
//!    [`GestureSession::scale_ratio`] and [`GestureSession::rotation_delta`]
//!    for the operations permitted by [`GestureSession::capabilities`].
//!    Each call consumes the delta since the last call.
//! 3) When one of several fingers lifts, call [`GestureSession::pause`].
//! 4) Drop the session once all fingers are lifted.

use kurbo::{Point, Vec2};
use transformative_geometry::{DEGENERATE_EPSILON, distance, signed_angle_degrees};

use crate::PointerEvent;

/// Which operations a gesture session currently allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Translate by the movement of the finger midpoint.
    pub drag: bool,
    /// Scale by the ratio of the two‑finger distance.
    pub scale: bool,
    /// Rotate by the change in angle of the two‑finger vector.
    pub rotate: bool,
}

impl Capabilities {
    /// No operation allowed.
    pub const NONE: Self = Self {
        drag: false,
        scale: false,
        rotate: false,
    };

    /// Derives capabilities from the number of fingers down.
    ///
    /// Exactly one finger drags, exactly two fingers scale and rotate, and any
    /// other count grants nothing.
    #[must_use]
    pub fn for_finger_count(count: usize) -> Self {
        match count {
            1 => Self {
                drag: true,
                ..Self::NONE
            },
            2 => Self {
                scale: true,
                rotate: true,
                ..Self::NONE
            },
            _ => Self::NONE,
        }
    }

    /// Returns `true` if at least one operation is allowed.
    #[must_use]
    pub fn any(self) -> bool {
        self.drag || self.scale || self.rotate
    }
}

/// Transient state for one continuous touch interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    capabilities: Capabilities,
    last_midpoint: Point,
    last_pair: Option<(Point, Point)>,
    last_vector: Option<Vec2>,
}

impl GestureSession {
    /// Starts a session from a down event, deriving capabilities from scratch.
    ///
    /// The midpoint of all fingers is latched as the drag origin. With exactly
    /// two fingers, the finger pair and the inter‑finger vector are latched
    /// for scale and rotation.
    #[must_use]
    pub fn begin(event: &PointerEvent) -> Self {
        let capabilities = Capabilities::for_finger_count(event.finger_count());
        let two_fingers = capabilities.scale || capabilities.rotate;
        Self {
            capabilities,
            last_midpoint: event.midpoint().unwrap_or_default(),
            last_pair: event.pair().filter(|_| two_fingers),
            last_vector: event.finger_vector().filter(|_| two_fingers),
        }
    }

    /// Operations currently permitted.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Clears all capabilities until the next session begins.
    pub fn pause(&mut self) {
        self.capabilities = Capabilities::NONE;
    }

    /// The last latched finger midpoint.
    #[must_use]
    pub fn last_midpoint(&self) -> Point {
        self.last_midpoint
    }

    /// Returns the midpoint movement since the last call and latches `midpoint`.
    pub fn drag_delta(&mut self, midpoint: Point) -> Vec2 {
        let delta = midpoint - self.last_midpoint;
        self.last_midpoint = midpoint;
        delta
    }

    /// Returns the ratio of the current to the previous finger distance.
    ///
    /// Returns `None` for degenerate frames. If the previous pair had zero
    /// distance, the current pair is latched so the next frame has a usable
    /// baseline. If the current pair has zero distance, nothing is latched,
    /// since a zero ratio would collapse the transform.
    pub fn scale_ratio(&mut self, pair: (Point, Point)) -> Option<f64> {
        let current = distance(pair.0, pair.1);
        let Some(last) = self.last_pair else {
            self.last_pair = Some(pair);
            return None;
        };
        if current <= DEGENERATE_EPSILON {
            return None;
        }
        self.last_pair = Some(pair);
        let previous = distance(last.0, last.1);
        if previous <= DEGENERATE_EPSILON {
            return None;
        }
        Some(current / previous)
    }

    /// Returns the signed angle in degrees from the previous to the current
    /// inter‑finger vector.
    ///
    /// Degenerate vectors are skipped: the frame yields `None` and only a
    /// non‑degenerate current vector is latched.
    pub fn rotation_delta(&mut self, pair: (Point, Point)) -> Option<f64> {
        let current = pair.1 - pair.0;
        if current.hypot() <= DEGENERATE_EPSILON {
            return None;
        }
        let last = self.last_vector.replace(current)?;
        signed_angle_degrees(last, current)
    }
}
