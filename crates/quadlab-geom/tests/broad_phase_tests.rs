// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Integration tests for the left-edge sort and the pruned sweep.

use quadlab_geom::{
    mark_collision_candidates, mark_collision_candidates_probed, sort_by_left, Aabb2, BroadPhase,
    Candidate, Collidable, Extent, SweepAndPrune,
};
use quadlab_math::Vec2;

fn candidate(id: usize, x: f32, y: f32, w: f32, h: f32) -> Candidate {
    Candidate::new(id, Vec2::new(x, y), Extent::new(w, h))
}

fn flags(items: &[Candidate]) -> Vec<(usize, bool)> {
    let mut out: Vec<(usize, bool)> = items
        .iter()
        .map(|c| (c.id(), c.is_collision_candidate()))
        .collect();
    out.sort_unstable();
    out
}

fn frame(items: &mut [Candidate]) {
    sort_by_left(items);
    let _ = mark_collision_candidates(items);
}

#[test]
fn spread_out_boxes_are_never_flagged() {
    // Left edges at 0, 10, 20, each 5 wide.
    let mut items = vec![
        candidate(0, 22.5, 0.0, 5.0, 5.0),
        candidate(1, 2.5, 0.0, 5.0, 5.0),
        candidate(2, 12.5, 0.0, 5.0, 5.0),
    ];
    frame(&mut items);
    assert_eq!(flags(&items), vec![(0, false), (1, false), (2, false)]);
    let lefts: Vec<f32> = items.iter().map(Collidable::left).collect();
    assert_eq!(lefts, vec![0.0, 10.0, 20.0]);
}

#[test]
fn two_overlapping_boxes_are_both_flagged() {
    let mut items = vec![
        candidate(1, 5.0, 0.0, 10.0, 10.0),
        candidate(0, 0.0, 0.0, 10.0, 10.0),
    ];
    frame(&mut items);
    assert_eq!(flags(&items), vec![(0, true), (1, true)]);
}

#[test]
fn scan_for_first_box_stops_at_second() {
    let mut items = vec![
        candidate(0, 0.0, 0.0, 4.0, 4.0),
        candidate(1, 10.0, 0.0, 4.0, 4.0),
        candidate(2, 20.0, 0.0, 4.0, 4.0),
    ];
    sort_by_left(&mut items);

    let mut inspected: Vec<(usize, usize)> = Vec::new();
    let mut record = |a: usize, b: usize| inspected.push((a, b));
    let stats = mark_collision_candidates_probed(&mut items, &mut record);

    assert_eq!(inspected, vec![(0, 1), (1, 2)]);
    assert!(!inspected.contains(&(0, 2)));
    assert_eq!(stats.comparisons, 2);
    assert_eq!(stats.prunes, 2);
    assert_eq!(stats.overlaps, 0);
    assert!(items.iter().all(|c| !c.is_collision_candidate()));
}

#[test]
fn empty_and_singleton_inputs_are_no_ops() {
    let mut empty: Vec<Candidate> = Vec::new();
    frame(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![candidate(7, 3.0, 3.0, 2.0, 2.0)];
    let before = one.clone();
    sort_by_left(&mut one);
    let stats = mark_collision_candidates(&mut one);
    assert_eq!(one, before);
    assert_eq!(stats.comparisons, 0);
}

#[test]
fn stale_flags_are_cleared_when_boxes_separate() {
    let mut items = vec![
        candidate(0, 0.0, 0.0, 10.0, 10.0),
        candidate(1, 5.0, 0.0, 10.0, 10.0),
    ];
    frame(&mut items);
    assert_eq!(flags(&items), vec![(0, true), (1, true)]);

    for c in &mut items {
        if c.id() == 1 {
            c.move_to(Vec2::new(100.0, 0.0));
        }
    }
    frame(&mut items);
    assert_eq!(flags(&items), vec![(0, false), (1, false)]);
}

#[test]
fn running_a_frame_twice_is_idempotent() {
    let mut items = vec![
        candidate(0, 0.0, 0.0, 10.0, 10.0),
        candidate(1, 4.0, 30.0, 10.0, 10.0),
        candidate(2, 8.0, 2.0, 10.0, 10.0),
        candidate(3, 50.0, 0.0, 1.0, 1.0),
    ];
    frame(&mut items);
    let first = flags(&items);
    frame(&mut items);
    assert_eq!(flags(&items), first);
    assert_eq!(first, vec![(0, true), (1, false), (2, true), (3, false)]);
}

#[test]
fn sweep_works_on_borrowed_snapshots() {
    let mut owned = vec![
        candidate(0, 20.0, 0.0, 4.0, 4.0),
        candidate(1, 0.0, 0.0, 4.0, 4.0),
        candidate(2, 1.0, 1.0, 4.0, 4.0),
    ];
    {
        let mut snapshot: Vec<&mut Candidate> = owned.iter_mut().collect();
        sort_by_left(&mut snapshot);
        let _ = mark_collision_candidates(&mut snapshot);
    }
    // Owner order is untouched; only flags changed.
    let ids: Vec<usize> = owned.iter().map(Candidate::id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(flags(&owned), vec![(0, false), (1, true), (2, true)]);
}

#[test]
fn pair_index_reports_canonical_sorted_pairs() {
    let bb = |x: f32| Aabb2::from_center_extent(Vec2::new(x, 0.0), Extent::new(2.0, 2.0));
    let mut bp = SweepAndPrune::new();
    bp.upsert(2, bb(100.0));
    bp.upsert(1, bb(1.0));
    bp.upsert(0, bb(0.0));
    assert_eq!(bp.pairs(), vec![(0, 1)]);

    bp.upsert(3, bb(0.5));
    assert_eq!(bp.pairs(), vec![(0, 1), (0, 3), (1, 3)]);

    // Touching edges (1.0 + 1 == 3.0 - 1) are contact, not overlap.
    bp.upsert(4, bb(3.0));
    assert_eq!(bp.pairs(), vec![(0, 1), (0, 3), (1, 3)]);

    assert!(bp.remove(0));
    assert!(!bp.remove(0));
    assert_eq!(bp.pairs(), vec![(1, 3)]);
    assert_eq!(bp.len(), 4);
}
