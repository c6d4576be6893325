// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Point lights.

use quadlab_math::Vec3;

/// A point light. Only its position is tracked.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LightObject {
    /// World-space position.
    pub position: Vec3,
}

impl LightObject {
    /// Creates a light at `position`.
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }
}
