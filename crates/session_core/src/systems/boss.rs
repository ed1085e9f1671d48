//! Boss attack schedules. The easy boss aims single shots at the player;
//! the hard boss alternates a radial volley with summon spawns. Timers are
//! plain accumulators and hold still while the owner is paused.

use glam::{Vec2, vec2};
use rand::Rng;

use crate::SessionState;
use crate::actor::EnemyKind;
use crate::events::AudioEvent;
use crate::player::ring_directions;

pub const EASY_SHOOT_PERIOD_S: f32 = 0.8;
pub const HARD_SHOOT_PERIOD_S: f32 = 4.0;
pub const HARD_SUMMON_PERIOD_S: f32 = 2.0;
pub const HARD_VOLLEY_BULLETS: usize = 10;
pub const SUMMON_SPEED: f32 = 250.0;

/// Advance every boss's attack timers and emit due bullets/summons.
pub fn run(state: &mut SessionState, dt: f32) {
    let player_pos = state.player.pos;
    let mut bullets: Vec<(Vec2, Vec2)> = Vec::new();
    let mut summons: Vec<Vec2> = Vec::new();
    let mut volley_fired = false;

    for i in 0..state.enemies.len() {
        let (kind, pos, paused) = {
            let e = &state.enemies[i];
            (e.kind, e.pos, e.paused)
        };
        if paused {
            continue;
        }
        match kind {
            EnemyKind::EasyBoss => {
                let Some(t) = state.enemies[i].attack.as_mut() else {
                    continue;
                };
                t.shoot_s += dt;
                if t.shoot_s >= EASY_SHOOT_PERIOD_S {
                    t.shoot_s -= EASY_SHOOT_PERIOD_S;
                    let dir = (player_pos - pos).normalize_or_zero();
                    bullets.push((pos, dir));
                }
            }
            EnemyKind::HardBoss => {
                let mut summon_due = false;
                {
                    let Some(t) = state.enemies[i].attack.as_mut() else {
                        continue;
                    };
                    t.shoot_s += dt;
                    if t.shoot_s >= HARD_SHOOT_PERIOD_S {
                        t.shoot_s -= HARD_SHOOT_PERIOD_S;
                        for dir in ring_directions(HARD_VOLLEY_BULLETS) {
                            bullets.push((pos, dir));
                        }
                        volley_fired = true;
                    }
                    t.summon_s += dt;
                    if t.summon_s >= HARD_SUMMON_PERIOD_S {
                        t.summon_s -= HARD_SUMMON_PERIOD_S;
                        summon_due = true;
                    }
                }
                if summon_due {
                    let off = vec2(
                        state.rng.random_range(-30.0..=30.0),
                        state.rng.random_range(-20.0..=20.0),
                    );
                    summons.push(pos + off);
                }
            }
            _ => {}
        }
    }

    for (pos, dir) in bullets {
        state.spawn_boss_bullet(pos, dir);
    }
    if volley_fired {
        state.events.push(AudioEvent::HardBossShoot);
    }
    for pos in summons {
        state.spawn_enemy(EnemyKind::Summon, pos, SUMMON_SPEED);
    }
}
