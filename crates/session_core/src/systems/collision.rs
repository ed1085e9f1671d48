//! Collision resolution. Five passes in a fixed order each frame; the order
//! is part of the rules, not an implementation detail.

use crate::SessionState;
use crate::events::AudioEvent;
use crate::level::LevelGeometry;
use crate::pickup::{ItemKind, PickupKind};
use crate::projectile::ProjKind;
use crate::status::StatusKind;

pub const CONTACT_DAMAGE: i32 = 10;
pub const BOSS_BULLET_DAMAGE: i32 = 10;
pub const COIN_SCORE: u32 = 10;
pub const SPEED_ITEM_BOOST: f32 = 100.0;
pub const SPEED_ITEM_DURATION_S: f32 = 10.0;

pub fn resolve(state: &mut SessionState, level: &dyn LevelGeometry) {
    bullets_vs_walls(state, level);
    bullets_vs_enemies(state);
    boss_bullets_vs_player(state);
    enemies_vs_player(state);
    pickups_vs_player(state);
}

/// Player and laser bullets die on walls. Boss bullets are deliberately not
/// wall-checked and sail through.
fn bullets_vs_walls(state: &mut SessionState, level: &dyn LevelGeometry) {
    state.projectiles.retain(|p| !level.rect_intersects_wall(&p.bounds()));
}

/// Each live bullet damages every enemy it overlaps this frame. Lasers skip
/// ids they already hurt and keep flying; plain bullets are consumed by any
/// hit regardless of lethality.
fn bullets_vs_enemies(state: &mut SessionState) {
    let mut i = 0;
    while i < state.projectiles.len() {
        let bounds = state.projectiles[i].bounds();
        let mut consumed = false;
        for j in 0..state.enemies.len() {
            if !state.enemies[j].hp.alive() {
                continue;
            }
            if !bounds.intersects(&state.enemies[j].bounds()) {
                continue;
            }
            let eid = state.enemies[j].id;
            let already_hit = match &state.projectiles[i].kind {
                ProjKind::LaserBullet { damaged, .. } => damaged.contains(&eid),
                _ => false,
            };
            if !already_hit {
                let fatal = state.enemies[j].take_damage(1);
                if fatal {
                    let kind = state.enemies[j].kind;
                    state.score += kind.kill_score();
                    state.events.push(if kind.is_boss() {
                        AudioEvent::BossKill
                    } else {
                        AudioEvent::EnemyKill
                    });
                    metrics::counter!("session.kills_total").increment(1);
                }
            }
            match &mut state.projectiles[i].kind {
                ProjKind::LaserBullet { damaged, .. } => {
                    damaged.insert(eid);
                }
                _ => consumed = true,
            }
        }
        if consumed {
            state.projectiles.swap_remove(i);
            continue;
        }
        i += 1;
    }
    state.enemies.retain(|e| e.hp.alive());
}

fn boss_bullets_vs_player(state: &mut SessionState) {
    let pb = state.player.bounds();
    let mut i = 0;
    while i < state.boss_projectiles.len() {
        if state.boss_projectiles[i].bounds().intersects(&pb) {
            state.player.take_damage(BOSS_BULLET_DAMAGE);
            state.events.push(AudioEvent::EnemyCollision);
            state.boss_projectiles.swap_remove(i);
            continue;
        }
        i += 1;
    }
}

/// Melee contact: grunts trade themselves for damage; boss contact is
/// outright lethal and ignores the shield window.
fn enemies_vs_player(state: &mut SessionState) {
    let pb = state.player.bounds();
    let mut i = 0;
    while i < state.enemies.len() {
        if state.enemies[i].bounds().intersects(&pb) {
            if state.enemies[i].kind.is_boss() {
                state.player.health = 0;
                state.events.push(AudioEvent::EnemyCollision);
            } else {
                state.player.take_damage(CONTACT_DAMAGE);
                state.events.push(AudioEvent::EnemyCollision);
                state.enemies.swap_remove(i);
                continue;
            }
        }
        i += 1;
    }
}

fn pickups_vs_player(state: &mut SessionState) {
    let pb = state.player.bounds();
    let mut i = 0;
    while i < state.pickups.len() {
        if !state.pickups[i].bounds().intersects(&pb) {
            i += 1;
            continue;
        }
        let kind = state.pickups[i].kind;
        state.pickups.swap_remove(i);
        match kind {
            PickupKind::Item(ItemKind::Heal) => {
                state.player.heal_full();
                state.player.effects.add(StatusKind::Heal);
                state.events.push(AudioEvent::Heal);
            }
            PickupKind::Item(ItemKind::Speed) => {
                state.player.apply_speed_boost(SPEED_ITEM_DURATION_S, SPEED_ITEM_BOOST);
                state.player.effects.add(StatusKind::Speed);
                state.events.push(AudioEvent::Speed);
            }
            PickupKind::Item(ItemKind::Freezer) => {
                // Consumed either way; only arms when no freeze is running.
                if state.freeze.arm() {
                    state.player.effects.add(StatusKind::Freeze);
                    state.events.push(AudioEvent::Freezer);
                }
            }
            PickupKind::Coin => {
                state.score += COIN_SCORE;
                state.player.effects.add(StatusKind::Coin);
                state.events.push(AudioEvent::Coin);
            }
        }
    }
}
