// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use quadlab_math::Vec2;

use crate::error::GeomError;
use crate::types::extent::Extent;

/// Axis-aligned bounding rectangle in screen coordinates.
///
/// Invariants:
/// - `left <= right` and `bottom <= top`.
/// - `top` is the edge with the larger `y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb2 {
    min: Vec2,
    max: Vec2,
}

impl Aabb2 {
    /// Builds the box centred at `center` with the given full `extent`.
    ///
    /// `left = x - w/2`, `right = x + w/2`, `bottom = y - h/2`, `top = y + h/2`.
    #[must_use]
    pub fn from_center_extent(center: Vec2, extent: Extent) -> Self {
        let half = extent.half();
        Self {
            min: center.sub(&half),
            max: center.add(&half),
        }
    }

    /// Builds a box from explicit edges.
    pub fn from_edges(left: f32, right: f32, bottom: f32, top: f32) -> Result<Self, GeomError> {
        let finite = [left, right, bottom, top].iter().all(|v| v.is_finite());
        if !finite || left > right || bottom > top {
            return Err(GeomError::InvalidEdges {
                left,
                right,
                bottom,
                top,
            });
        }
        Ok(Self {
            min: Vec2::new(left, bottom),
            max: Vec2::new(right, top),
        })
    }

    /// Left edge (smallest `x`).
    pub const fn left(&self) -> f32 {
        self.min.x()
    }

    /// Right edge (largest `x`).
    pub const fn right(&self) -> f32 {
        self.max.x()
    }

    /// Bottom edge (smallest `y`).
    pub const fn bottom(&self) -> f32 {
        self.min.y()
    }

    /// Top edge (largest `y`).
    pub const fn top(&self) -> f32 {
        self.max.y()
    }

    /// Geometric centre.
    pub fn center(&self) -> Vec2 {
        self.min.add(&self.max).scale(0.5)
    }

    /// `true` if the horizontal ranges share interior points.
    pub fn overlaps_x(&self, other: &Self) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// `true` if the vertical ranges share interior points.
    pub fn overlaps_y(&self, other: &Self) -> bool {
        self.bottom() < other.top() && self.top() > other.bottom()
    }

    /// Returns `true` if the boxes overlap on both axes.
    ///
    /// Strict: boxes whose edges only touch are not overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}
