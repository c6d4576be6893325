// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame broad-phase pass over a [`GameWorld`].
//!
//! Each frame: borrow every object into a snapshot, sort the snapshot by left
//! edge, sweep it (clearing and then setting candidate flags), drop the
//! snapshot. Nothing but the frame counter carries over to the next frame.

use quadlab_geom::{mark_collision_candidates, sort_by_left_with, SweepStats};
use tracing::{debug, debug_span, warn};

use crate::behavior::InputState;
use crate::object::{GameObject, ObjectId};
use crate::prefs::BroadPhasePrefs;
use crate::world::GameWorld;

/// Result of one broad-phase pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// Zero-based frame number.
    pub frame: u64,
    /// Flagged objects, ascending by id.
    pub candidates: Vec<ObjectId>,
    /// Sweep counters.
    pub stats: SweepStats,
}

/// Runs the broad phase once per frame.
#[derive(Debug, Clone, Default)]
pub struct BroadPhasePass {
    prefs: BroadPhasePrefs,
    frame: u64,
}

impl BroadPhasePass {
    /// Creates a pass starting at frame 0.
    pub fn new(prefs: BroadPhasePrefs) -> Self {
        Self { prefs, frame: 0 }
    }

    /// Number of frames run so far.
    pub const fn frames_run(&self) -> u64 {
        self.frame
    }

    /// Tuning in effect.
    pub const fn prefs(&self) -> &BroadPhasePrefs {
        &self.prefs
    }

    /// Sorts and sweeps the world's objects, updating their candidate flags.
    pub fn run(&mut self, world: &mut GameWorld) -> FrameReport {
        let frame = self.frame;
        self.frame += 1;
        let span = debug_span!("broad_phase", frame);
        let _guard = span.enter();

        let mut snapshot: Vec<&mut GameObject> = world.game_objects_mut().iter_mut().collect();
        sort_by_left_with(&mut snapshot, self.prefs.sort);
        let stats = mark_collision_candidates(&mut snapshot);
        let mut candidates: Vec<ObjectId> = snapshot
            .iter()
            .filter(|o| o.is_collision_candidate())
            .map(|o| o.id())
            .collect();
        let objects = snapshot.len();
        drop(snapshot);
        candidates.sort_unstable();

        debug!(
            objects,
            comparisons = stats.comparisons,
            overlaps = stats.overlaps,
            prunes = stats.prunes,
            candidates = candidates.len(),
            "sweep complete"
        );
        let budget = self.prefs.comparison_budget;
        if budget > 0 && stats.comparisons > budget {
            warn!(
                comparisons = stats.comparisons,
                budget, "broad phase over comparison budget; objects are crowded along x"
            );
        }

        FrameReport {
            frame,
            candidates,
            stats,
        }
    }

    /// Updates every object's behaviour, then runs the broad phase.
    pub fn step(&mut self, world: &mut GameWorld, input: &InputState) -> FrameReport {
        world.update(input);
        self.run(world)
    }
}
