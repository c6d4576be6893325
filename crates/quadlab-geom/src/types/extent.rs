// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use quadlab_math::Vec2;
use tracing::warn;

use crate::error::GeomError;

/// Width and height of a bounding rectangle.
///
/// Invariant: both components are finite and strictly positive. Requests that
/// would break this fall back to [`Extent::UNIT`] rather than producing an
/// inverted or degenerate box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    width: f32,
    height: f32,
}

impl Extent {
    /// One pixel by one pixel.
    pub const UNIT: Self = Self {
        width: 1.0,
        height: 1.0,
    };

    /// Builds an extent, clamping invalid requests to [`Extent::UNIT`].
    pub fn new(width: f32, height: f32) -> Self {
        Self::try_new(width, height).unwrap_or_else(|err| {
            warn!(%err, "falling back to unit extent");
            Self::UNIT
        })
    }

    /// Builds an extent, rejecting non-positive or non-finite sizes.
    pub fn try_new(width: f32, height: f32) -> Result<Self, GeomError> {
        if is_valid_length(width) && is_valid_length(height) {
            Ok(Self { width, height })
        } else {
            Err(GeomError::InvalidExtent { width, height })
        }
    }

    /// Full width.
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Full height.
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Half of the width and height, i.e. the distance from centre to edge.
    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::UNIT
    }
}

fn is_valid_length(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_sizes_fall_back_to_unit() {
        assert_eq!(Extent::new(0.0, 10.0), Extent::UNIT);
        assert_eq!(Extent::new(10.0, -3.0), Extent::UNIT);
        assert_eq!(Extent::new(f32::NAN, 2.0), Extent::UNIT);
        assert_eq!(Extent::new(f32::INFINITY, 2.0), Extent::UNIT);
    }

    #[test]
    fn strict_constructor_reports_the_request() {
        assert_eq!(
            Extent::try_new(-1.0, 4.0),
            Err(GeomError::InvalidExtent {
                width: -1.0,
                height: 4.0
            })
        );
        let ok = Extent::try_new(4.0, 2.0);
        assert_eq!(ok.map(|e| e.half().to_array()), Ok([2.0, 1.0]));
    }
}
