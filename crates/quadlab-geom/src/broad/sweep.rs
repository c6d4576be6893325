// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::trace;

use crate::broad::collidable::Collidable;
use crate::broad::sort::is_sorted_by_left;

/// Counters from one sweep.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SweepStats {
    /// Partner boxes inspected, including the one that ended each scan.
    pub comparisons: usize,
    /// Overlapping pairs found.
    pub overlaps: usize,
    /// Scans that stopped early because the partner started at or beyond the
    /// active box's right edge.
    pub prunes: usize,
}

/// Observer notified of every `(active, partner)` index pair the sweep
/// inspects. Indices refer to positions in the swept slice.
pub trait SweepProbe {
    /// Called before the partner is tested against the active box.
    fn on_compare(&mut self, active: usize, partner: usize);
}

impl<F: FnMut(usize, usize)> SweepProbe for F {
    fn on_compare(&mut self, active: usize, partner: usize) {
        self(active, partner);
    }
}

/// A probe that ignores everything.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoProbe;

impl SweepProbe for NoProbe {
    fn on_compare(&mut self, _active: usize, _partner: usize) {}
}

/// Flags every box that overlaps at least one other box.
///
/// `items` must already be ascending by left edge (see
/// [`sort_by_left`](crate::sort_by_left)). Every flag is cleared first, so a
/// box that stopped overlapping since the previous frame ends up unflagged.
///
/// For each active box the scan walks forward and stops at the first partner
/// whose left edge is at or beyond the active box's right edge: the order
/// guarantees no later partner can overlap on X either. Partners that overlap
/// on X but not on Y do not stop the scan.
///
/// Unsorted input is a caller bug: debug builds assert, release builds just
/// prune wrongly.
pub fn mark_collision_candidates<T: Collidable>(items: &mut [T]) -> SweepStats {
    mark_collision_candidates_probed(items, &mut NoProbe)
}

/// [`mark_collision_candidates`] with a probe that sees every inspected pair.
pub fn mark_collision_candidates_probed<T, P>(items: &mut [T], probe: &mut P) -> SweepStats
where
    T: Collidable,
    P: SweepProbe + ?Sized,
{
    debug_assert!(
        is_sorted_by_left(items),
        "sweep input must be sorted by left edge"
    );

    for item in items.iter_mut() {
        item.set_collision_candidate(false);
    }

    let mut stats = SweepStats::default();
    for active in 0..items.len() {
        let a = items[active].bounds();
        for partner in active + 1..items.len() {
            let b = items[partner].bounds();
            probe.on_compare(active, partner);
            stats.comparisons += 1;

            if b.left() >= a.right() {
                stats.prunes += 1;
                break;
            }
            if a.overlaps(&b) {
                trace!(active, partner, "aabb overlap");
                items[active].set_collision_candidate(true);
                items[partner].set_collision_candidate(true);
                stats.overlaps += 1;
            }
        }
    }
    stats
}
