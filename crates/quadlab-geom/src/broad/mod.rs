// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase: left-edge sort, sweep-and-prune candidate marking, and a
//! keyed pair index.
//!
//! Contract shared by everything here:
//! - Input order for the sweep is ascending by left edge; the sweep relies on
//!   it to stop scanning once a partner starts at or beyond the active box's
//!   right edge.
//! - Overlap is strict on both axes.
//! - Candidate flags are frame-scoped: every sweep clears them first.
//! - Pair output from [`sap::SweepAndPrune`] is canonical `(min_id, max_id)`
//!   and sorted lexicographically.

#[doc = "The `Collidable` seam and the plain `Candidate` box."]
pub mod collidable;
#[doc = "Keyed pair index built on the pruned sweep."]
pub mod sap;
#[doc = "In-place ascending sort by left edge."]
pub mod sort;
#[doc = "Pruned sweep that marks collision candidates."]
pub mod sweep;
