// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::collections::BTreeMap;

use crate::types::aabb::Aabb2;

/// Broad-phase interface for inserting proxies and querying overlapping pairs.
///
/// Implementations must return pairs deterministically: the pair `(a, b)` is
/// canonicalized such that `a < b`, and the full list is sorted ascending by
/// `(a, b)`.
pub trait BroadPhase {
    /// Inserts or updates the proxy with the given `id` and `aabb`.
    fn upsert(&mut self, id: usize, aabb: Aabb2);
    /// Removes a proxy if present; returns whether it was present.
    fn remove(&mut self, id: usize) -> bool;
    /// Returns a canonical, deterministically-ordered list of overlapping pairs.
    fn pairs(&self) -> Vec<(usize, usize)>;
}

/// Keyed sweep-and-prune pair index.
///
/// Each [`pairs`](BroadPhase::pairs) call sorts the proxies by left edge (id
/// breaks ties) and runs the same pruned sweep as
/// [`mark_collision_candidates`](crate::mark_collision_candidates), but
/// reports pairs instead of flags.
#[derive(Debug, Default, Clone)]
pub struct SweepAndPrune {
    items: BTreeMap<usize, Aabb2>,
}

impl SweepAndPrune {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of proxies.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when no proxies are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl BroadPhase for SweepAndPrune {
    fn upsert(&mut self, id: usize, aabb: Aabb2) {
        self.items.insert(id, aabb);
    }

    fn remove(&mut self, id: usize) -> bool {
        self.items.remove(&id).is_some()
    }

    fn pairs(&self) -> Vec<(usize, usize)> {
        let mut order: Vec<(usize, Aabb2)> = self.items.iter().map(|(id, bb)| (*id, *bb)).collect();
        order.sort_unstable_by(|(a_id, a), (b_id, b)| {
            a.left().total_cmp(&b.left()).then(a_id.cmp(b_id))
        });

        let mut out = Vec::new();
        for (i, (a_id, a)) in order.iter().enumerate() {
            for (b_id, b) in &order[i + 1..] {
                if b.left() >= a.right() {
                    break;
                }
                if a.overlaps(b) {
                    out.push(((*a_id).min(*b_id), (*a_id).max(*b_id)));
                }
            }
        }
        out.sort_unstable();
        out
    }
}
