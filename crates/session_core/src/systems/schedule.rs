//! Fixed-order frame schedule. One call advances the session by `dt`.

use crate::SessionState;
use crate::input::InputFrame;
use crate::level::LevelGeometry;
use crate::systems::{boss, collision, freeze, movement, powerup, projectiles, spawn};

pub struct Schedule;

impl Schedule {
    /// Frame order: freeze bookkeeping, spawners, input-derived shots,
    /// movement and projectile integration, boss timers, collision passes,
    /// boss trigger, powerup threshold, win/lose.
    pub fn run(state: &mut SessionState, level: &dyn LevelGeometry, input: &InputFrame, dt: f32) {
        freeze::advance(state, dt);
        spawn::run(state, level, dt);
        if input.fire {
            state.player_shoot(input.pointer);
        }
        movement::player_update(state, level, input, dt);
        movement::enemy_seek(state, dt);
        boss::run(state, dt);
        projectiles::integrate(state, dt);
        collision::resolve(state, level);
        spawn::maybe_spawn_boss(state, level);
        powerup::maybe_trigger(state);
        state.evaluate_outcome();
    }
}
