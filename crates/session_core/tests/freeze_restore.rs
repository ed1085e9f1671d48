//! Freeze effect bookkeeping: one cached speed per enemy, no cascading
//! slowdowns, exact restore on expiry, and consistent treatment of enemies
//! spawned mid-freeze.

mod support;

use glam::vec2;
use session_core::systems::freeze::{self, FREEZE_DURATION_S, SPEED_PENALTY};
use session_core::EnemyKind;
use support::{arena_center, easy_session};

#[test]
fn slows_once_and_restores_exactly() {
    let mut state = easy_session(arena_center());
    let a = state.spawn_enemy(EnemyKind::Standard, vec2(100.0, 100.0), 175.0);
    let b = state.spawn_enemy(EnemyKind::Fast, vec2(200.0, 100.0), 325.0);
    assert!(state.freeze.arm());

    // Several frames inside the window: the penalty lands once per enemy.
    for _ in 0..10 {
        freeze::advance(&mut state, 0.1);
    }
    let speed = |state: &session_core::SessionState, id| {
        state.enemies.iter().find(|e| e.id == id).unwrap().speed
    };
    assert!((speed(&state, a) - (175.0 - SPEED_PENALTY)).abs() < f32::EPSILON);
    assert!((speed(&state, b) - (325.0 - SPEED_PENALTY)).abs() < f32::EPSILON);

    // Re-arming mid-window is a no-op and must not stack another penalty.
    assert!(!state.freeze.arm());
    freeze::advance(&mut state, 0.1);
    assert!((speed(&state, a) - (175.0 - SPEED_PENALTY)).abs() < f32::EPSILON);

    // Past the window: original speeds come back exactly.
    freeze::advance(&mut state, FREEZE_DURATION_S);
    assert!(!state.freeze.active);
    assert!((speed(&state, a) - 175.0).abs() < f32::EPSILON);
    assert!((speed(&state, b) - 325.0).abs() < f32::EPSILON);
    for e in &state.enemies {
        assert!(e.frozen_speed.is_none(), "cache cleared on restore");
    }
}

#[test]
fn mid_freeze_spawns_share_the_same_bookkeeping() {
    let mut state = easy_session(arena_center());
    assert!(state.freeze.arm());
    freeze::advance(&mut state, 0.5);

    // A wave enemy arriving now is slowed immediately, from its unmodified
    // kind speed, through the same cache the per-frame pass uses.
    let id = state.spawn_enemy(EnemyKind::Tanky, vec2(50.0, 50.0), 75.0);
    let e = state.enemies.iter().find(|e| e.id == id).unwrap();
    assert!((e.speed - (75.0 - SPEED_PENALTY)).abs() < f32::EPSILON);
    assert_eq!(e.frozen_speed, Some(75.0));

    // More frames in the window must not subtract again.
    freeze::advance(&mut state, 0.5);
    let e = state.enemies.iter().find(|e| e.id == id).unwrap();
    assert!((e.speed - (75.0 - SPEED_PENALTY)).abs() < f32::EPSILON);

    freeze::advance(&mut state, FREEZE_DURATION_S);
    let e = state.enemies.iter().find(|e| e.id == id).unwrap();
    assert!((e.speed - 75.0).abs() < f32::EPSILON);
}

#[test]
fn bosses_never_slow_down() {
    let mut state = easy_session(arena_center());
    let id = state.spawn_enemy(EnemyKind::EasyBoss, vec2(2000.0, 100.0), 215.0);
    assert!(state.freeze.arm());
    for _ in 0..20 {
        freeze::advance(&mut state, 0.1);
    }
    let boss = state.enemies.iter().find(|e| e.id == id).unwrap();
    assert!((boss.speed - 215.0).abs() < f32::EPSILON);
    assert!(boss.frozen_speed.is_none());
}
