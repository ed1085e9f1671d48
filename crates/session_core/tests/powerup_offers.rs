//! Powerup threshold progression and the selection pause.

mod support;

use glam::vec2;
use session_core::systems::powerup;
use session_core::{Boost, EnemyKind, InputFrame, SessionPhase};
use support::{arena_center, easy_session, open_arena};

const DT: f32 = 1.0 / 60.0;

#[test]
fn threshold_steps_by_100_and_offers_differ() {
    let mut state = easy_session(arena_center());
    assert_eq!(state.next_powerup_score, 100);

    for round in 1..=5u32 {
        state.score = round * 100;
        powerup::maybe_trigger(&mut state);
        let SessionPhase::ChoosingPowerup { offers } = state.phase else {
            panic!("offer should open at {}", round * 100);
        };
        assert_ne!(offers[0], offers[1], "offers must be distinct");
        state.choose_powerup(0);
        assert_eq!(state.next_powerup_score, (round + 1) * 100);
        assert_eq!(state.phase, SessionPhase::Running);
    }
}

#[test]
fn world_holds_still_while_the_offer_is_open() {
    let level = open_arena();
    let mut state = easy_session(arena_center());
    let id = state.spawn_enemy(EnemyKind::Standard, vec2(100.0, 100.0), 175.0);
    state.score = 100;
    state.step(&level, &InputFrame::default(), DT);
    assert!(matches!(state.phase, SessionPhase::ChoosingPowerup { .. }));
    assert!(state.enemies.iter().all(|e| e.paused), "enemies pause during the offer");

    // Stepping while the offer is open advances nothing.
    let pos_before = state.enemies.iter().find(|e| e.id == id).unwrap().pos;
    let score_before = state.score;
    for _ in 0..30 {
        state.step(&level, &InputFrame::default(), DT);
    }
    let pos_after = state.enemies.iter().find(|e| e.id == id).unwrap().pos;
    assert_eq!(pos_before, pos_after);
    assert_eq!(score_before, state.score);

    state.choose_powerup(1);
    assert!(state.enemies.iter().all(|e| !e.paused), "selection resumes the world");
}

#[test]
fn choice_outside_an_offer_is_ignored() {
    let mut state = easy_session(arena_center());
    let hp = state.player.max_hp;
    state.choose_powerup(0);
    assert_eq!(state.phase, SessionPhase::Running);
    assert_eq!(state.player.max_hp, hp);
    assert_eq!(state.next_powerup_score, 100);
}

#[test]
fn owned_one_shot_abilities_never_reappear() {
    let mut state = easy_session(arena_center());
    powerup::apply(&mut state, Boost::Shotgun);
    powerup::apply(&mut state, Boost::Laser);
    for round in 1..=30u32 {
        state.score = round * 100;
        powerup::maybe_trigger(&mut state);
        let SessionPhase::ChoosingPowerup { offers } = state.phase else {
            panic!("offer should open");
        };
        for b in offers {
            assert!(b != Boost::Shotgun && b != Boost::Laser);
        }
        state.choose_powerup(0);
    }
}

#[test]
fn shotgun_unlock_autofires_a_ring_every_five_seconds() {
    let level = open_arena();
    let mut state = easy_session(arena_center());
    state.next_powerup_score = 1_000_000;
    // Silence the wave spawner so bullet counts stay exact.
    state.tuning.enemy_spawn_ms = 10_000_000;
    powerup::apply(&mut state, Boost::Shotgun);
    let mut t = 0.0f32;
    while t < 5.0 + DT {
        state.step(&level, &InputFrame::default(), DT);
        t += DT;
    }
    assert_eq!(state.projectiles.len(), 8, "one ring of eight bullets");
    while t < 10.0 + DT {
        state.step(&level, &InputFrame::default(), DT);
        t += DT;
    }
    assert_eq!(state.projectiles.len(), 16, "second ring after another five seconds");
}

#[test]
fn laser_unlock_autofires_at_the_pointer() {
    let level = open_arena();
    let mut state = easy_session(arena_center());
    state.next_powerup_score = 1_000_000;
    state.tuning.enemy_spawn_ms = 10_000_000;
    powerup::apply(&mut state, Boost::Laser);
    let input = InputFrame {
        pointer: state.player.pos + vec2(500.0, 0.0),
        ..Default::default()
    };
    let mut t = 0.0f32;
    while t < 4.0 + DT {
        state.step(&level, &input, DT);
        t += DT;
    }
    assert_eq!(state.projectiles.len(), 1);
    let laser = &state.projectiles[0];
    assert!(laser.is_laser());
    assert!((laser.dir - vec2(1.0, 0.0)).length() < 1e-5, "aimed at the pointer");
}
