// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Small `f32` math helpers shared by the quadlab crates: 2D/3D vectors,
//! quaternions for object orientation, and degree/radian conversion.
//!
//! Screen-space conventions: `x` grows to the right and `y` grows upwards,
//! so a box's top edge has the larger `y`.

use std::f32::consts::TAU;

mod quat;
mod vec2;
mod vec3;

pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Degeneracy threshold used when normalising vectors and quaternions.
pub const EPSILON: f32 = 1e-6;

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
