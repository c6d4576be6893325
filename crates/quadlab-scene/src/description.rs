// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON scene description files.
//!
//! ```json
//! {
//!   "objects": [
//!     { "name": "player", "position": [0, 0], "size": [32, 32],
//!       "texture": "player.png",
//!       "behavior": { "kind": "controlled", "speed": 4 } }
//!   ],
//!   "lights": [[0, 0, 100]]
//! }
//! ```

use quadlab_math::Vec2;
use serde::{Deserialize, Serialize};

use crate::behavior::Behavior;
use crate::error::SceneError;
use crate::object::Axis;

/// A whole scene: objects plus light positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    /// Objects in spawn order.
    #[serde(default)]
    pub objects: Vec<ObjectSpec>,
    /// Light positions `[x, y, z]`.
    #[serde(default)]
    pub lights: Vec<[f32; 3]>,
}

impl SceneDescription {
    /// Parses a JSON scene description.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a JSON scene description from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SceneError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

fn unit_size() -> [f32; 2] {
    [1.0, 1.0]
}

/// One object in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectSpec {
    /// Display name.
    pub name: String,
    /// Centre in pixels.
    #[serde(default)]
    pub position: [f32; 2],
    /// Width and height in pixels; invalid sizes fall back to 1×1.
    #[serde(default = "unit_size")]
    pub size: [f32; 2],
    /// Initial rotation.
    #[serde(default)]
    pub rotation_degrees: f32,
    /// Axis for `rotation_degrees`.
    #[serde(default)]
    pub rotation_axis: Axis,
    /// Colour texture name.
    #[serde(default)]
    pub texture: Option<String>,
    /// Normal-map texture name.
    #[serde(default)]
    pub normal_map: Option<String>,
    /// Per-update behaviour.
    #[serde(default)]
    pub behavior: BehaviorSpec,
}

/// Serialized form of [`Behavior`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BehaviorSpec {
    /// See [`Behavior::Static`].
    #[default]
    Static,
    /// See [`Behavior::Drift`].
    Drift {
        /// Offset per update.
        velocity: [f32; 2],
    },
    /// See [`Behavior::Spin`].
    Spin {
        /// Angle per update.
        degrees: f32,
        /// Rotation axis.
        #[serde(default)]
        axis: Axis,
    },
    /// See [`Behavior::Controlled`].
    Controlled {
        /// Pixels per update.
        speed: f32,
    },
}

impl From<&BehaviorSpec> for Behavior {
    fn from(spec: &BehaviorSpec) -> Self {
        match *spec {
            BehaviorSpec::Static => Self::Static,
            BehaviorSpec::Drift { velocity } => Self::Drift {
                velocity: Vec2::from(velocity),
            },
            BehaviorSpec::Spin { degrees, axis } => Self::Spin { degrees, axis },
            BehaviorSpec::Controlled { speed } => Self::Controlled { speed },
        }
    }
}
