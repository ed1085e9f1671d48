//! Interval-driven spawning of enemies, items, and coins, plus the one-shot
//! boss trigger.

use glam::{Vec2, vec2};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::SessionState;
use crate::actor::EnemyKind;
use crate::geom::Aabb;
use crate::level::LevelGeometry;
use crate::pickup::{ItemKind, PickupKind};

/// How far outside the level bounds wave enemies appear, so they never pop
/// into view overlapping the play field edge.
const EDGE_MARGIN: f32 = 50.0;
/// Wall-free placement gives up after this many rejected samples and falls
/// back to the level center.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

pub const BOSS_TRIGGER_SCORE: u32 = 750;
pub const FAST_SPEED_BONUS: f32 = 150.0;
pub const TANKY_SPEED_MALUS: f32 = 100.0;
pub const EASY_BOSS_SPEED: f32 = 215.0;
pub const HARD_BOSS_SPEED: f32 = 150.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimers {
    pub enemy_s: f32,
    pub item_s: f32,
    pub coin_s: f32,
}

/// Advance the three independent interval accumulators and emit whatever
/// came due this frame.
pub fn run(state: &mut SessionState, level: &dyn LevelGeometry, dt: f32) {
    state.timers.enemy_s += dt;
    state.timers.item_s += dt;
    state.timers.coin_s += dt;

    let enemy_interval = state.tuning.enemy_interval_s();
    while state.timers.enemy_s >= enemy_interval {
        state.timers.enemy_s -= enemy_interval;
        spawn_wave_enemy(state, level);
    }
    let item_interval = state.tuning.item_interval_s();
    while state.timers.item_s >= item_interval {
        state.timers.item_s -= item_interval;
        spawn_item(state, level);
    }
    let coin_interval = state.tuning.coin_interval_s();
    while state.timers.coin_s >= coin_interval {
        state.timers.coin_s -= coin_interval;
        spawn_coin(state, level);
    }
}

/// Pick a point on a random edge of the level box, pushed outside by the
/// margin.
pub fn edge_spawn_position(rng: &mut ChaCha8Rng, width: f32, height: f32) -> Vec2 {
    match rng.random_range(0..4u8) {
        0 => vec2(rng.random_range(0.0..=width), -EDGE_MARGIN),
        1 => vec2(rng.random_range(0.0..=width), height + EDGE_MARGIN),
        2 => vec2(-EDGE_MARGIN, rng.random_range(0.0..=height)),
        _ => vec2(width + EDGE_MARGIN, rng.random_range(0.0..=height)),
    }
}

/// Reject-sample a wall-free point; after the attempt budget, fall back to
/// the level center.
pub fn random_floor_position(rng: &mut ChaCha8Rng, level: &dyn LevelGeometry) -> Vec2 {
    let (w, h) = (level.width(), level.height());
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let p = vec2(rng.random_range(0.0..w), rng.random_range(0.0..h));
        if !level.rect_intersects_wall(&Aabb::from_center(p, Vec2::ONE)) {
            return p;
        }
    }
    vec2(w * 0.5, h * 0.5)
}

fn spawn_wave_enemy(state: &mut SessionState, level: &dyn LevelGeometry) {
    let pos = edge_spawn_position(&mut state.rng, level.width(), level.height());
    let base = state.tuning.base_enemy_speed;
    let roll: f32 = state.rng.random();
    let (kind, speed) = if roll < 0.50 {
        (EnemyKind::Standard, base)
    } else if roll < 0.75 {
        (EnemyKind::Fast, base + FAST_SPEED_BONUS)
    } else {
        (EnemyKind::Tanky, base - TANKY_SPEED_MALUS)
    };
    state.spawn_enemy(kind, pos, speed);
}

fn spawn_item(state: &mut SessionState, level: &dyn LevelGeometry) {
    let pos = random_floor_position(&mut state.rng, level);
    let kind = if state.rng.random_range(1..=100u8) <= 10 {
        ItemKind::Freezer
    } else if state.rng.random::<bool>() {
        ItemKind::Heal
    } else {
        ItemKind::Speed
    };
    state.spawn_pickup(PickupKind::Item(kind), pos);
}

fn spawn_coin(state: &mut SessionState, level: &dyn LevelGeometry) {
    let pos = random_floor_position(&mut state.rng, level);
    state.spawn_pickup(PickupKind::Coin, pos);
}

/// One boss per session, once the score trigger is reached. Idempotent via
/// the boss-spawned flag.
pub fn maybe_spawn_boss(state: &mut SessionState, level: &dyn LevelGeometry) {
    if state.boss_spawned || state.score < BOSS_TRIGGER_SCORE {
        return;
    }
    let pos = edge_spawn_position(&mut state.rng, level.width(), level.height());
    let (kind, speed) = match state.difficulty {
        data_runtime::configs::difficulty::Difficulty::Easy => {
            (EnemyKind::EasyBoss, EASY_BOSS_SPEED)
        }
        data_runtime::configs::difficulty::Difficulty::Hard => {
            (EnemyKind::HardBoss, HARD_BOSS_SPEED)
        }
    };
    let id = state.spawn_enemy(kind, pos, speed);
    state.boss_spawned = true;
    log::info!("boss spawned: kind={kind:?} id={id:?} score={}", state.score);
    metrics::counter!("session.boss_spawns_total").increment(1);
}
