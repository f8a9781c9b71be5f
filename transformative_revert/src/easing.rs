// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Progress curve applied to the linear time fraction of a revert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Progress equals the time fraction.
    Linear,
    /// Starts and ends slowly, fastest in the middle (a half cosine wave).
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Maps a time fraction in `[0, 1]` to animation progress in `[0, 1]`.
    ///
    /// Inputs outside the range are clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn endpoints_are_exact_enough() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate] {
            assert!(easing.apply(0.0).abs() < 1e-12);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn accelerate_decelerate_is_symmetric_and_slow_at_the_ends() {
        let e = Easing::AccelerateDecelerate;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
        assert!(e.apply(0.1) < 0.1);
        assert!(e.apply(0.9) > 0.9);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
