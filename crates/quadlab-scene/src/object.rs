// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Renderable game objects.

use std::fmt;

use quadlab_geom::{Aabb2, Collidable, Extent};
use quadlab_math::{deg_to_rad, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::behavior::{Behavior, InputState};
use crate::error::SceneError;
use crate::textures::{TextureCache, TextureId, TextureSource};

/// Stable identifier assigned by [`GameWorld`](crate::GameWorld).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coordinate axis for rotations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
    /// Axis out of the screen; the usual choice for 2D sprites.
    #[default]
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::UNIT_X,
            Self::Y => Vec3::UNIT_Y,
            Self::Z => Vec3::UNIT_Z,
        }
    }
}

/// An object the renderer draws, with its own position, rotation and size.
///
/// `position` is the centre of the object. The bounding box used by the
/// broad phase ignores rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    id: ObjectId,
    name: String,
    position: Vec2,
    orientation: Quat,
    extent: Extent,
    texture: Option<TextureId>,
    normal_map: Option<TextureId>,
    collision_candidate: bool,
    behavior: Behavior,
}

impl GameObject {
    /// Creates an object at the origin with unit size and no rotation.
    pub(crate) fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Vec2::ZERO,
            orientation: Quat::identity(),
            extent: Extent::UNIT,
            texture: None,
            normal_map: None,
            collision_candidate: false,
            behavior: Behavior::Static,
        }
    }

    /// Identifier assigned by the world.
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flags the object as a collision candidate for this frame.
    pub fn mark_as_collision_candidate(&mut self) {
        self.collision_candidate = true;
    }

    /// Whether the last broad-phase pass flagged this object.
    pub const fn is_collision_candidate(&self) -> bool {
        self.collision_candidate
    }

    /// Moves the object's centre.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Centre of the object.
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Horizontal centre.
    pub const fn center_x(&self) -> f32 {
        self.position.x()
    }

    /// Vertical centre.
    pub const fn center_y(&self) -> f32 {
        self.position.y()
    }

    /// Sets the size in pixels. Non-positive sizes fall back to 1×1.
    pub fn set_scale(&mut self, width: f32, height: f32) {
        self.extent = Extent::new(width, height);
    }

    /// Current size.
    pub const fn scale(&self) -> Extent {
        self.extent
    }

    /// Width in pixels.
    pub const fn width(&self) -> f32 {
        self.extent.width()
    }

    /// Height in pixels.
    pub const fn height(&self) -> f32 {
        self.extent.height()
    }

    /// Left edge.
    pub fn left(&self) -> f32 {
        self.bounds().left()
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.bounds().right()
    }

    /// Top edge (larger `y`).
    pub fn top(&self) -> f32 {
        self.bounds().top()
    }

    /// Bottom edge (smaller `y`).
    pub fn bottom(&self) -> f32 {
        self.bounds().bottom()
    }

    /// Rotates by `degrees` about `axis`, on top of the current rotation.
    pub fn add_rotation(&mut self, degrees: f32, axis: Axis) {
        let delta = Quat::from_axis_angle(axis.unit(), deg_to_rad(degrees));
        self.orientation = self.orientation.multiply(&delta);
    }

    /// Current orientation.
    pub const fn rotation(&self) -> Quat {
        self.orientation
    }

    /// Binds the texture named `name`, loading it on first use.
    pub fn set_texture(
        &mut self,
        cache: &mut TextureCache,
        source: &dyn TextureSource,
        name: &str,
    ) -> Result<TextureId, SceneError> {
        let id = cache.get_or_load(source, name)?;
        self.texture = Some(id);
        Ok(id)
    }

    /// Colour texture, if any.
    pub const fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// Binds the normal map named `name`, loading it on first use.
    pub fn set_normal_map(
        &mut self,
        cache: &mut TextureCache,
        source: &dyn TextureSource,
        name: &str,
    ) -> Result<TextureId, SceneError> {
        let id = cache.get_or_load(source, name)?;
        self.normal_map = Some(id);
        Ok(id)
    }

    /// Normal-map texture, if any.
    pub const fn normal_map(&self) -> Option<TextureId> {
        self.normal_map
    }

    /// Replaces the per-update behaviour.
    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    /// Current behaviour.
    pub const fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Runs the object's behaviour once.
    pub fn update(&mut self, input: &InputState) {
        let behavior = self.behavior;
        behavior.apply(self, input);
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.position = self.position.add(&delta);
    }
}

impl Collidable for GameObject {
    fn bounds(&self) -> Aabb2 {
        Aabb2::from_center_extent(self.position, self.extent)
    }

    fn is_collision_candidate(&self) -> bool {
        self.collision_candidate
    }

    fn set_collision_candidate(&mut self, candidate: bool) {
        self.collision_candidate = candidate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_position_and_scale() {
        let mut obj = GameObject::new(ObjectId(1), "crate");
        obj.set_position(100.0, 50.0);
        obj.set_scale(40.0, 20.0);
        assert_eq!(obj.left(), 80.0);
        assert_eq!(obj.right(), 120.0);
        assert_eq!(obj.top(), 60.0);
        assert_eq!(obj.bottom(), 40.0);
    }

    #[test]
    fn invalid_scale_falls_back_to_unit() {
        let mut obj = GameObject::new(ObjectId(1), "crate");
        obj.set_scale(0.0, 12.0);
        assert_eq!((obj.width(), obj.height()), (1.0, 1.0));
        obj.set_scale(-5.0, -5.0);
        assert_eq!(obj.scale(), Extent::UNIT);
    }

    #[test]
    fn rotation_accumulates() {
        let mut obj = GameObject::new(ObjectId(1), "spinner");
        obj.add_rotation(45.0, Axis::Z);
        obj.add_rotation(45.0, Axis::Z);
        let expected = Quat::from_axis_angle(Vec3::UNIT_Z, deg_to_rad(90.0)).to_array();
        for (a, b) in obj.rotation().to_array().into_iter().zip(expected) {
            assert!((a - b).abs() < 1e-5, "{a} vs {b}");
        }
        // Rotation does not change the bounding box.
        assert_eq!(obj.left(), -0.5);
    }

    #[test]
    fn candidate_flag_is_writable_both_ways() {
        let mut obj = GameObject::new(ObjectId(1), "crate");
        assert!(!obj.is_collision_candidate());
        obj.mark_as_collision_candidate();
        assert!(obj.is_collision_candidate());
        obj.set_collision_candidate(false);
        assert!(!obj.is_collision_candidate());
    }
}
