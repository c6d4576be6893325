// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene scaffold around the quadlab broad phase.
//!
//! A [`GameWorld`] owns the frame's [`GameObject`]s and lights. Once per
//! frame a [`BroadPhasePass`] borrows every object into a snapshot, sorts the
//! snapshot by left edge, sweeps it to set each object's collision-candidate
//! flag, and drops the snapshot. Renderers read the flags back to highlight
//! candidates.
//!
//! Textures are owned by an explicit [`TextureCache`] keyed by content hash;
//! object behaviour is a tagged [`Behavior`] value rather than an override.

pub mod behavior;
pub mod config;
pub mod description;
pub mod error;
pub mod frame;
pub mod light;
pub mod object;
pub mod prefs;
pub mod textures;
pub mod world;

pub use behavior::{Behavior, InputState, Key};
pub use description::{BehaviorSpec, ObjectSpec, SceneDescription};
pub use error::SceneError;
pub use frame::{BroadPhasePass, FrameReport};
pub use light::LightObject;
pub use object::{Axis, GameObject, ObjectId};
pub use prefs::{BroadPhasePrefs, SessionPrefs};
pub use textures::{MemoryTextureSource, TextureCache, TextureHash, TextureId, TextureSource};
pub use world::GameWorld;
