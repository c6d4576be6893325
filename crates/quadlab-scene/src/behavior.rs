// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-update object behaviour and the input snapshot it reads.

use std::collections::BTreeSet;

use quadlab_math::Vec2;

use crate::object::{Axis, GameObject};

/// Keys the scaffold reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

/// Keyboard and mouse state for one update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    keys: BTreeSet<Key>,
    cursor: Vec2,
}

impl InputState {
    /// No keys held, cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as held.
    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    /// Marks `key` as released.
    pub fn release(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    /// Whether `key` is held.
    pub fn is_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;
    }

    /// Cursor position in screen pixels.
    pub const fn cursor(&self) -> Vec2 {
        self.cursor
    }

    fn axis(&self, negative: Key, positive: Key) -> f32 {
        match (self.is_down(negative), self.is_down(positive)) {
            (false, true) => 1.0,
            (true, false) => -1.0,
            _ => 0.0,
        }
    }
}

/// What an object does on each update.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Behavior {
    /// Stays put.
    #[default]
    Static,
    /// Moves by a fixed offset every update.
    Drift {
        /// Offset per update, in pixels.
        velocity: Vec2,
    },
    /// Rotates by a fixed angle every update.
    Spin {
        /// Angle per update.
        degrees: f32,
        /// Rotation axis.
        axis: Axis,
    },
    /// Follows the arrow keys.
    Controlled {
        /// Pixels per update along each held direction.
        speed: f32,
    },
}

impl Behavior {
    /// Applies one update step to `object`.
    pub fn apply(&self, object: &mut GameObject, input: &InputState) {
        match *self {
            Self::Static => {}
            Self::Drift { velocity } => object.translate(velocity),
            Self::Spin { degrees, axis } => object.add_rotation(degrees, axis),
            Self::Controlled { speed } => {
                let dir = Vec2::new(
                    input.axis(Key::Left, Key::Right),
                    input.axis(Key::Down, Key::Up),
                );
                object.translate(dir.scale(speed));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectId;

    fn object(behavior: Behavior) -> GameObject {
        let mut obj = GameObject::new(ObjectId(0), "probe");
        obj.set_behavior(behavior);
        obj
    }

    #[test]
    fn drift_moves_every_update() {
        let mut obj = object(Behavior::Drift {
            velocity: Vec2::new(2.0, -1.0),
        });
        let input = InputState::new();
        obj.update(&input);
        obj.update(&input);
        assert_eq!(obj.position().to_array(), [4.0, -2.0]);
    }

    #[test]
    fn controlled_follows_held_keys() {
        let mut obj = object(Behavior::Controlled { speed: 3.0 });
        let mut input = InputState::new();
        input.press(Key::Right);
        input.press(Key::Up);
        obj.update(&input);
        assert_eq!(obj.position().to_array(), [3.0, 3.0]);

        // Opposite keys cancel out.
        input.press(Key::Left);
        input.release(Key::Up);
        obj.update(&input);
        assert_eq!(obj.position().to_array(), [3.0, 3.0]);
    }

    #[test]
    fn static_and_spin_keep_position() {
        let input = InputState::new();
        let mut still = object(Behavior::Static);
        still.update(&input);
        assert_eq!(still.position(), Vec2::ZERO);

        let mut spinner = object(Behavior::Spin {
            degrees: 90.0,
            axis: Axis::Z,
        });
        spinner.update(&input);
        assert_eq!(spinner.position(), Vec2::ZERO);
        assert_ne!(spinner.rotation(), quadlab_math::Quat::identity());
    }
}
