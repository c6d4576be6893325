// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"2D broad-phase geometry for quadlab.

This crate provides:
- Strictly positive box sizes (`Extent`) and axis-aligned boxes (`Aabb2`).
- The `Collidable` seam the broad phase reads bounds from and writes the
  per-frame candidate flag to.
- `sort_by_left`: in-place ascending sort by left edge.
- `mark_collision_candidates`: a pruned left-to-right sweep that flags every
  box overlapping at least one other box.
- `SweepAndPrune`: a keyed pair index built on the same sweep.

Design notes:
- Overlap is strict on both axes: boxes that only touch along an edge do not
  collide.
- No state survives between sweeps; flags are cleared before every scan.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Sorting, sweeping, and pair indexing.
pub mod broad;
/// Error types for box construction.
pub mod error;
/// Foundational geometric types.
pub mod types;

pub use broad::collidable::{Candidate, Collidable};
pub use broad::sap::{BroadPhase, SweepAndPrune};
pub use broad::sort::{is_sorted_by_left, sort_by_left, sort_by_left_with, SortStrategy};
pub use broad::sweep::{
    mark_collision_candidates, mark_collision_candidates_probed, NoProbe, SweepProbe, SweepStats,
};
pub use error::GeomError;
pub use types::aabb::Aabb2;
pub use types::extent::Extent;
