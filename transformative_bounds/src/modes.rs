// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Orientation of the content relative to its untransformed layout.
///
/// This decides which per‑orientation minimum of [`crate::ScaleLimits`]
/// applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Rotation within 45° of 0° or 180°.
    #[default]
    Horizontal,
    /// Rotation in the `(45°, 135°]` band on either side, i.e. roughly ±90°.
    Vertical,
}

impl Orientation {
    /// Classifies a rotation given in degrees, in `[-180, 180]`.
    #[must_use]
    pub fn from_rotation(degrees: f64) -> Self {
        let degrees = degrees.abs();
        if degrees > 45.0 && degrees <= 135.0 {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// Independent switches for each correction step of [`crate::BoundsPolicy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RevertToggles {
    /// Snap rotation to the nearest multiple of 90°.
    pub rotation: bool,
    /// Clamp scale into the configured limits.
    pub scale: bool,
    /// Keep the content gap‑free or centered inside the viewport.
    pub translation: bool,
}

impl RevertToggles {
    /// All corrections disabled.
    pub const NONE: Self = Self {
        rotation: false,
        scale: false,
        translation: false,
    };

    /// All corrections enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            rotation: true,
            scale: true,
            translation: true,
        }
    }

    /// Returns `true` if any correction is enabled.
    #[must_use]
    pub fn any(self) -> bool {
        self.rotation || self.scale || self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::{Orientation, RevertToggles};

    #[test]
    fn orientation_bands() {
        assert_eq!(Orientation::from_rotation(0.0), Orientation::Horizontal);
        assert_eq!(Orientation::from_rotation(45.0), Orientation::Horizontal);
        assert_eq!(Orientation::from_rotation(45.5), Orientation::Vertical);
        assert_eq!(Orientation::from_rotation(-90.0), Orientation::Vertical);
        assert_eq!(Orientation::from_rotation(135.0), Orientation::Vertical);
        assert_eq!(Orientation::from_rotation(180.0), Orientation::Horizontal);
    }

    #[test]
    fn toggles_any() {
        assert!(!RevertToggles::NONE.any());
        assert!(RevertToggles::all().any());
        let only_scale = RevertToggles {
            scale: true,
            ..RevertToggles::NONE
        };
        assert!(only_scale.any());
        assert_eq!(RevertToggles::default(), RevertToggles::NONE);
    }
}
