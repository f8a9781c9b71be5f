// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event snapshots consumed by the recognizer.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use transformative_geometry::midpoint;

/// What happened to the set of active fingers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A finger touched down, either the first one or an additional one.
    Down,
    /// One or more active fingers moved.
    Move,
    /// The last finger lifted.
    Up,
    /// The host aborted the interaction; treated like [`PointerEventKind::Up`].
    Cancel,
    /// One of several fingers lifted while others remain down.
    PointerUp,
}

/// Snapshot of all active fingers for a single pointer event.
///
/// Positions are ordered by pointer identifier. Only the first two are
/// consulted for scale and rotation, but every position contributes to the
/// finger count and the midpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event kind.
    pub kind: PointerEventKind,
    /// Positions of the active fingers in view coordinates.
    pub positions: SmallVec<[Point; 4]>,
}

impl PointerEvent {
    /// Creates an event of `kind` with the given finger positions.
    pub fn new(kind: PointerEventKind, positions: impl IntoIterator<Item = Point>) -> Self {
        Self {
            kind,
            positions: positions.into_iter().collect(),
        }
    }

    /// Number of active fingers.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.positions.len()
    }

    /// Midpoint of all active fingers, if any.
    #[must_use]
    pub fn midpoint(&self) -> Option<Point> {
        midpoint(&self.positions)
    }

    /// The two lowest‑indexed finger positions, if at least two are present.
    #[must_use]
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.positions.as_slice() {
            [p0, p1, ..] => Some((*p0, *p1)),
            _ => None,
        }
    }

    /// Vector from the first to the second finger, if at least two are present.
    #[must_use]
    pub fn finger_vector(&self) -> Option<Vec2> {
        self.pair().map(|(p0, p1)| p1 - p0)
    }
}
