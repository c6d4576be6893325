// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The world: every game object and light in the scene.

use quadlab_math::{Vec2, Vec3};
use tracing::debug;

use crate::behavior::{Behavior, InputState};
use crate::description::SceneDescription;
use crate::error::SceneError;
use crate::light::LightObject;
use crate::object::{GameObject, ObjectId};
use crate::textures::{TextureCache, TextureSource};

/// Owns the scene's objects (in insertion order) and lights.
#[derive(Debug, Default)]
pub struct GameWorld {
    objects: Vec<GameObject>,
    lights: Vec<LightObject>,
    next_id: u64,
}

impl GameWorld {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a world from a parsed scene description, loading textures
    /// through `cache`.
    pub fn from_description(
        desc: &SceneDescription,
        cache: &mut TextureCache,
        source: &dyn TextureSource,
    ) -> Result<Self, SceneError> {
        let mut world = Self::new();
        for spec in &desc.objects {
            let obj = world.spawn(spec.name.clone());
            obj.set_position(spec.position[0], spec.position[1]);
            obj.set_scale(spec.size[0], spec.size[1]);
            obj.add_rotation(spec.rotation_degrees, spec.rotation_axis);
            if let Some(name) = &spec.texture {
                obj.set_texture(cache, source, name)?;
            }
            if let Some(name) = &spec.normal_map {
                obj.set_normal_map(cache, source, name)?;
            }
            obj.set_behavior(Behavior::from(&spec.behavior));
        }
        for pos in &desc.lights {
            world.add_light_object(LightObject::new(Vec3::from(*pos)));
        }
        debug!(
            objects = world.objects.len(),
            lights = world.lights.len(),
            textures = cache.len(),
            "world built"
        );
        Ok(world)
    }

    /// Adds a unit-sized object at the origin and returns it for setup.
    pub fn spawn(&mut self, name: impl Into<String>) -> &mut GameObject {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(GameObject::new(id, name));
        let last = self.objects.len() - 1;
        &mut self.objects[last]
    }

    /// Convenience wrapper around [`spawn`](Self::spawn) that also places and
    /// sizes the object.
    pub fn spawn_at(
        &mut self,
        name: impl Into<String>,
        center: Vec2,
        width: f32,
        height: f32,
    ) -> ObjectId {
        let obj = self.spawn(name);
        obj.set_position(center.x(), center.y());
        obj.set_scale(width, height);
        obj.id()
    }

    /// Removes the object with `id`; returns whether it existed.
    pub fn remove_game_object(&mut self, id: ObjectId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id() != id);
        self.objects.len() != before
    }

    /// Adds a light.
    pub fn add_light_object(&mut self, light: LightObject) {
        self.lights.push(light);
    }

    /// Removes the first light equal to `light`; returns whether one was found.
    pub fn remove_light_object(&mut self, light: &LightObject) -> bool {
        match self.lights.iter().position(|l| l == light) {
            Some(idx) => {
                self.lights.remove(idx);
                true
            }
            None => false,
        }
    }

    /// All objects, in insertion order.
    pub fn game_objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// All objects, mutably.
    pub fn game_objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.objects
    }

    /// Looks up an object by id.
    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Looks up an object by id, mutably.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Light positions flattened as `[x, y, z, x, y, z, …]` for a shader uniform.
    pub fn light_positions(&self) -> Vec<f32> {
        self.lights
            .iter()
            .flat_map(|l| l.position.to_array())
            .collect()
    }

    /// Number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Runs every object's behaviour once.
    pub fn update(&mut self, input: &InputState) {
        for obj in &mut self.objects {
            obj.update(input);
        }
    }
}
