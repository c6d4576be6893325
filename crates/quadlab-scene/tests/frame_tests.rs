// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used)]
//! End-to-end scene tests: world → broad-phase pass → flags.

use quadlab_geom::SortStrategy;
use quadlab_math::Vec2;
use quadlab_scene::{
    Behavior, BroadPhasePass, BroadPhasePrefs, GameWorld, InputState, Key, MemoryTextureSource,
    SceneDescription, SceneError, TextureCache,
};

fn prefs(sort: SortStrategy) -> BroadPhasePrefs {
    BroadPhasePrefs {
        sort,
        ..BroadPhasePrefs::default()
    }
}

#[test]
fn overlapping_objects_are_flagged_and_order_is_preserved() {
    let mut world = GameWorld::new();
    let far = world.spawn_at("far", Vec2::new(500.0, 0.0), 10.0, 10.0);
    let b = world.spawn_at("b", Vec2::new(5.0, 0.0), 10.0, 10.0);
    let a = world.spawn_at("a", Vec2::new(0.0, 0.0), 10.0, 10.0);

    let mut pass = BroadPhasePass::new(prefs(SortStrategy::Exchange));
    let report = pass.run(&mut world);

    assert_eq!(report.frame, 0);
    assert_eq!(report.candidates, vec![b, a]);
    assert_eq!(report.stats.overlaps, 1);
    // The snapshot was sorted, not the world.
    let ids: Vec<_> = world.game_objects().iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec![far, b, a]);
    assert!(!world.get(far).is_some_and(|o| o.is_collision_candidate()));
}

#[test]
fn flags_follow_movement_between_frames() {
    let mut world = GameWorld::new();
    let player = world.spawn_at("player", Vec2::new(0.0, 0.0), 10.0, 10.0);
    let wall = world.spawn_at("wall", Vec2::new(30.0, 0.0), 10.0, 10.0);
    if let Some(obj) = world.get_mut(player) {
        obj.set_behavior(Behavior::Controlled { speed: 10.0 });
    }

    let mut pass = BroadPhasePass::new(BroadPhasePrefs::default());
    let mut input = InputState::new();
    input.press(Key::Right);

    // x = 10: player spans 5..15, wall spans 25..35.
    let r1 = pass.step(&mut world, &input);
    assert!(r1.candidates.is_empty());
    // x = 20: player spans 15..25, wall spans 25..35; touching only.
    let r2 = pass.step(&mut world, &input);
    assert!(r2.candidates.is_empty());
    // x = 30: full overlap.
    let r3 = pass.step(&mut world, &input);
    assert_eq!(r3.candidates, vec![player, wall]);

    // Walk back out; the flags must clear.
    input.release(Key::Right);
    input.press(Key::Left);
    let _ = pass.step(&mut world, &input);
    let r5 = pass.step(&mut world, &input);
    assert!(r5.candidates.is_empty());
    assert!(world.game_objects().iter().all(|o| !o.is_collision_candidate()));
    assert_eq!(pass.frames_run(), 5);
}

#[test]
fn both_sort_strategies_give_the_same_flags() {
    let desc = SceneDescription::from_json(
        r#"{ "objects": [
            { "name": "a", "position": [0, 0], "size": [10, 10] },
            { "name": "b", "position": [8, 20], "size": [10, 10] },
            { "name": "c", "position": [4, 4], "size": [4, 4] },
            { "name": "d", "position": [40, 0], "size": [10, 10] },
            { "name": "e", "position": [44, 8], "size": [10, 10] }
        ] }"#,
    )
    .expect("scene parses");
    let src = MemoryTextureSource::new();

    let mut reports = Vec::new();
    for sort in [SortStrategy::Unstable, SortStrategy::Exchange] {
        let mut cache = TextureCache::new();
        let mut world = GameWorld::from_description(&desc, &mut cache, &src).expect("world");
        let report = BroadPhasePass::new(prefs(sort)).run(&mut world);
        let names: Vec<String> = report
            .candidates
            .iter()
            .filter_map(|id| world.get(*id).map(|o| o.name().to_owned()))
            .collect();
        reports.push(names);
    }
    assert_eq!(reports[0], vec!["a", "c", "d", "e"]);
    assert_eq!(reports[0], reports[1]);
}

#[test]
fn empty_and_single_object_worlds_are_quiet() {
    let mut pass = BroadPhasePass::new(BroadPhasePrefs::default());
    let mut world = GameWorld::new();
    let report = pass.run(&mut world);
    assert!(report.candidates.is_empty());
    assert_eq!(report.stats.comparisons, 0);

    world.spawn_at("solo", Vec2::ZERO, 3.0, 3.0);
    let report = pass.run(&mut world);
    assert!(report.candidates.is_empty());
    assert_eq!(report.frame, 1);
}

#[test]
fn scene_textures_are_shared_by_content() {
    let desc = SceneDescription::from_json(
        r#"{ "objects": [
            { "name": "a", "texture": "crate.png", "normal_map": "crate_n.png" },
            { "name": "b", "texture": "crate.png" },
            { "name": "c", "texture": "crate_alias.png" }
        ], "lights": [[1, 2, 3]] }"#,
    )
    .expect("scene parses");
    let mut src = MemoryTextureSource::new();
    src.insert("crate.png", b"pixels".to_vec());
    src.insert("crate_alias.png", b"pixels".to_vec());
    src.insert("crate_n.png", b"normals".to_vec());

    let mut cache = TextureCache::new();
    let world = GameWorld::from_description(&desc, &mut cache, &src).expect("world");
    let textures: Vec<_> = world.game_objects().iter().map(|o| o.texture()).collect();
    assert_eq!(textures[0], textures[1]);
    assert_eq!(textures[0], textures[2]);
    assert!(world.game_objects()[0].normal_map().is_some());
    assert_eq!(cache.len(), 2);
    assert_eq!(world.light_positions(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn missing_texture_aborts_scene_build() {
    let desc = SceneDescription::from_json(
        r#"{ "objects": [ { "name": "a", "texture": "ghost.png" } ] }"#,
    )
    .expect("scene parses");
    let mut cache = TextureCache::new();
    let res = GameWorld::from_description(&desc, &mut cache, &MemoryTextureSource::new());
    assert!(matches!(res, Err(SceneError::TextureNotFound { .. })));
}
