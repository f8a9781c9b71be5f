// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Affine;
use transformative_geometry::{RawValues, to_raw_values};

use crate::Easing;

/// Source and target of one revert run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevertSpec {
    /// Raw values of the transform when the gesture ended.
    pub from: RawValues,
    /// Raw values of the corrected transform.
    pub to: RawValues,
    /// How long the run lasts.
    pub duration: Duration,
}

impl RevertSpec {
    /// Snapshots `from` and `to` as raw values.
    #[must_use]
    pub fn new(from: Affine, to: Affine, duration: Duration) -> Self {
        Self {
            from: to_raw_values(from),
            to: to_raw_values(to),
            duration,
        }
    }

    /// Returns `true` if the run would not move anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Transform at animation progress `progress` (already eased).
    #[must_use]
    pub fn transform_at(&self, progress: f64) -> Affine {
        affine_from_raw(&interpolate_raw_values(&self.from, &self.to, progress))
    }

    /// The exact target transform.
    #[must_use]
    pub fn target(&self) -> Affine {
        affine_from_raw(&self.to)
    }
}

/// Interpolates each raw value as `from + (to - from) * progress`.
#[must_use]
pub fn interpolate_raw_values(from: &RawValues, to: &RawValues, progress: f64) -> RawValues {
    core::array::from_fn(|i| from[i] + (to[i] - from[i]) * progress)
}

// Both endpoints come from affine transforms, so the projective row stays
// `0 0 1` for every interpolated value and can be dropped.
fn affine_from_raw(values: &RawValues) -> Affine {
    let [a, c, e, b, d, f, ..] = *values;
    Affine::new([a, b, c, d, e, f])
}

/// What the host should do after [`RevertAnimator::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevertStep {
    /// No run is active.
    Idle,
    /// Publish this intermediate transform.
    Frame(Affine),
    /// The run completed; commit and publish this exact target transform.
    Finished(Affine),
}

impl RevertStep {
    /// Transform carried by the step, if any.
    #[must_use]
    pub fn transform(self) -> Option<Affine> {
        match self {
            Self::Idle => None,
            Self::Frame(t) | Self::Finished(t) => Some(t),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Run {
    spec: RevertSpec,
    elapsed: Duration,
}

/// Drives at most one [`RevertSpec`] at a time.
#[derive(Clone, Debug, Default)]
pub struct RevertAnimator {
    easing: Easing,
    run: Option<Run>,
}

impl RevertAnimator {
    /// Creates an idle animator using `easing`.
    #[must_use]
    pub fn new(easing: Easing) -> Self {
        Self { easing, run: None }
    }

    /// Easing curve applied to every run.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Returns `true` while a run is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// The active run's spec, if any.
    #[must_use]
    pub fn spec(&self) -> Option<&RevertSpec> {
        self.run.as_ref().map(|run| &run.spec)
    }

    /// Eased progress of the active run in `[0, 1]`, if any.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.run.as_ref().map(|run| self.eased(run))
    }

    /// Starts `spec`, cancelling any active run first.
    ///
    /// A `RevertSpec` whose source and target are equal is not started, since it
    /// would not change anything; `false` is returned in that case.
    pub fn start(&mut self, spec: RevertSpec) -> bool {
        self.cancel();
        if spec.is_noop() {
            log::debug!("revert skipped: already in bounds");
            return false;
        }
        log::debug!("revert started over {:?}", spec.duration);
        self.run = Some(Run {
            spec,
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Stops the active run, if any, discarding its state.
    ///
    /// Returns `true` if a run was cancelled. The transform is left wherever
    /// the last frame put it.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.run.take().is_some();
        if cancelled {
            log::debug!("revert cancelled");
        }
        cancelled
    }

    /// Advances the active run by `dt`.
    pub fn advance(&mut self, dt: Duration) -> RevertStep {
        let Some(run) = self.run.as_mut() else {
            return RevertStep::Idle;
        };
        run.elapsed = run.elapsed.saturating_add(dt);
        if run.elapsed >= run.spec.duration {
            let target = run.spec.target();
            self.run = None;
            log::debug!("revert finished");
            return RevertStep::Finished(target);
        }
        let run = *run;
        RevertStep::Frame(run.spec.transform_at(self.eased(&run)))
    }

    fn eased(&self, run: &Run) -> f64 {
        if run.spec.duration.is_zero() {
            return 1.0;
        }
        let t = run.elapsed.as_secs_f64() / run.spec.duration.as_secs_f64();
        self.easing.apply(t)
    }
}
