//! Per-frame movement: player step with whole-step wall rollback, ability
//! auto-fire, and enemy pursuit of the player's intended position.

use crate::SessionState;
use crate::input::InputFrame;
use crate::level::LevelGeometry;
use crate::player::{self, PLAYER_SIZE};

/// Tick player timers, run ability auto-fire, then move with rollback.
pub fn player_update(
    state: &mut SessionState,
    level: &dyn LevelGeometry,
    input: &InputFrame,
    dt: f32,
) {
    let origin = state.player.pos;
    let mut fire_shotgun = false;
    let mut fire_laser = false;
    {
        let p = &mut state.player;
        p.tick_timers(dt);
        if p.has_shotgun {
            p.shotgun_s += dt;
            if p.shotgun_s >= player::SHOTGUN_PERIOD_S {
                p.shotgun_s -= player::SHOTGUN_PERIOD_S;
                fire_shotgun = true;
            }
        }
        if p.has_laser {
            p.laser_s += dt;
            if p.laser_s >= player::LASER_PERIOD_S {
                p.laser_s -= player::LASER_PERIOD_S;
                fire_laser = true;
            }
        }

        let delta = input.move_axis() * p.speed * dt;
        let prev = p.pos;
        p.intended_pos = p.pos + delta;
        p.pos = p.intended_pos;
        if level.rect_intersects_wall(&p.bounds()) {
            // Whole-step rollback; no per-axis sliding.
            p.pos = prev;
        }
    }
    if fire_shotgun {
        for dir in player::ring_directions(player::SHOTGUN_BULLETS) {
            state.spawn_player_bullet(origin, dir);
        }
    }
    if fire_laser {
        let dir = player::laser_aim(origin, input.pointer);
        let start = origin + dir * (PLAYER_SIZE.x * 0.5);
        state.spawn_laser(start, dir);
    }
}

/// Move every unpaused enemy toward the player's intended position. A target
/// on top of the enemy means no movement this frame, not an error.
pub fn enemy_seek(state: &mut SessionState, dt: f32) {
    let target = state.player.intended_pos;
    for e in &mut state.enemies {
        if e.paused {
            continue;
        }
        let to = target - e.pos;
        if to.length_squared() <= 1e-6 {
            continue;
        }
        e.pos += to.normalize() * e.speed * dt;
    }
}
