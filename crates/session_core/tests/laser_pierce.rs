//! A laser bullet damages each enemy id at most once, keeps flying after a
//! hit, and awards kill score like any other bullet.

mod support;

use glam::vec2;
use session_core::systems::collision;
use session_core::{AudioEvent, EnemyKind, RectWalls};
use support::{arena_center, easy_session, open_arena};

#[test]
fn laser_hits_each_enemy_id_at_most_once() {
    let level = open_arena();
    let mut state = easy_session(arena_center());
    let a = state.spawn_enemy(EnemyKind::Standard, vec2(200.0, 200.0), 175.0);
    let b = state.spawn_enemy(EnemyKind::Standard, vec2(600.0, 200.0), 175.0);
    state.spawn_laser(vec2(200.0, 200.0), vec2(1.0, 0.0));

    // Overlapping A for several frames only costs A one hit point.
    collision::resolve(&mut state, &level);
    collision::resolve(&mut state, &level);
    collision::resolve(&mut state, &level);
    let hp_a = state.enemies.iter().find(|e| e.id == a).unwrap().hp.hp;
    assert_eq!(hp_a, 2, "laser must not re-damage a recorded id");
    assert_eq!(state.projectiles.len(), 1, "laser persists through hits");

    // Carry the laser over to B: a distinct id takes its own single hit.
    state.projectiles[0].pos = vec2(600.0, 200.0);
    collision::resolve(&mut state, &level);
    collision::resolve(&mut state, &level);
    let hp_b = state.enemies.iter().find(|e| e.id == b).unwrap().hp.hp;
    assert_eq!(hp_b, 2);
    assert_eq!(state.enemies.iter().find(|e| e.id == a).unwrap().hp.hp, 2);
    assert!(state.projectiles[0].is_laser());
}

#[test]
fn laser_kill_scores_once_and_pierces_on() {
    let level = open_arena();
    let mut state = easy_session(arena_center());
    state.spawn_enemy(EnemyKind::Fast, vec2(300.0, 300.0), 325.0);
    state.spawn_laser(vec2(300.0, 300.0), vec2(1.0, 0.0));
    collision::resolve(&mut state, &level);
    assert!(state.enemies.is_empty(), "1 hp enemy dies to the first laser touch");
    assert_eq!(state.score, 10);
    assert_eq!(state.events.iter().filter(|e| **e == AudioEvent::EnemyKill).count(), 1);
    assert_eq!(state.projectiles.len(), 1, "kill does not consume the laser");
    // Nothing left to hit; score stays put.
    collision::resolve(&mut state, &level);
    assert_eq!(state.score, 10);
}

#[test]
fn plain_bullets_are_single_use_and_three_kill_a_standard() {
    let level = RectWalls::open(2500.0, 1500.0);
    let mut state = easy_session(arena_center());
    let id = state.spawn_enemy(EnemyKind::Standard, vec2(400.0, 400.0), 175.0);

    for expected_hp in [2, 1] {
        state.spawn_player_bullet(vec2(400.0, 400.0), vec2(1.0, 0.0));
        collision::resolve(&mut state, &level);
        assert!(state.projectiles.is_empty(), "plain bullet is consumed by the hit");
        let e = state.enemies.iter().find(|e| e.id == id).unwrap();
        assert_eq!(e.hp.hp, expected_hp);
        assert_eq!(state.score, 0, "no score before the lethal hit");
    }

    state.spawn_player_bullet(vec2(400.0, 400.0), vec2(1.0, 0.0));
    collision::resolve(&mut state, &level);
    assert!(state.enemies.is_empty(), "third hit is lethal");
    assert_eq!(state.score, 10, "score granted exactly once");
    assert_eq!(state.events.iter().filter(|e| **e == AudioEvent::EnemyKill).count(), 1);
}
