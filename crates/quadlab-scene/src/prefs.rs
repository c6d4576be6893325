// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved session preferences (broad-phase tuning + frame count).

use quadlab_geom::SortStrategy;
use serde::{Deserialize, Serialize};

/// Config key under which [`SessionPrefs`] are stored.
pub const SESSION_PREFS_KEY: &str = "session";

/// Preferences for a simulation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPrefs {
    /// Broad-phase tuning.
    pub broad_phase: BroadPhasePrefs,
    /// Frames to simulate per run.
    pub frames: u32,
}

impl Default for SessionPrefs {
    fn default() -> Self {
        Self {
            broad_phase: BroadPhasePrefs::default(),
            frames: 1,
        }
    }
}

/// Broad-phase tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadPhasePrefs {
    /// Left-edge sort algorithm.
    pub sort: SortStrategy,
    /// Warn when one sweep inspects more pairs than this; `0` disables.
    pub comparison_budget: usize,
}

impl Default for BroadPhasePrefs {
    fn default() -> Self {
        Self {
            sort: SortStrategy::Unstable,
            comparison_budget: 10_000,
        }
    }
}
