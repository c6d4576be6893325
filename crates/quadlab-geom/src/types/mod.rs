// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the broad phase (extent, AABB).
//!
//! Conventions:
//! - Coordinates are `f32` screen pixels, `y` grows upwards.
//! - Overlap is strict: shared edges are contact, not overlap.

#[doc = "Axis-aligned bounding boxes (screen space)."]
pub mod aabb;
#[doc = "Strictly positive width/height pairs."]
pub mod extent;
