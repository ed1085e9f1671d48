//! Session-wide freeze effect: slows every non-boss enemy by a fixed amount
//! for a fixed window, then restores each enemy's cached original speed.
//!
//! This module is the single source of truth for the penalty. Enemies
//! spawned while the effect runs are routed through the same
//! [`apply_slow`] helper, so spawn-time and per-frame speeds cannot drift.

use crate::SessionState;
use crate::actor::Enemy;

pub const SPEED_PENALTY: f32 = 75.0;
pub const FREEZE_DURATION_S: f32 = 7.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct FreezeState {
    pub active: bool,
    pub remaining_s: f32,
}

impl FreezeState {
    /// Arm the effect. A freezer picked up while one is already running is a
    /// no-op; returns whether this call armed it.
    pub fn arm(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.remaining_s = FREEZE_DURATION_S;
        true
    }
}

/// Slow one enemy, caching its original speed exactly once. Bosses are
/// immune; an enemy that already holds a cache is left alone.
pub fn apply_slow(enemy: &mut Enemy) {
    if enemy.kind.is_boss() || enemy.frozen_speed.is_some() {
        return;
    }
    enemy.frozen_speed = Some(enemy.speed);
    enemy.speed -= SPEED_PENALTY;
}

/// Advance the countdown; while running, slow any not-yet-cached enemy, and
/// on expiry restore every cached speed exactly.
pub fn advance(state: &mut SessionState, dt: f32) {
    if !state.freeze.active {
        return;
    }
    state.freeze.remaining_s -= dt;
    if state.freeze.remaining_s <= 0.0 {
        state.freeze.active = false;
        state.freeze.remaining_s = 0.0;
        for e in &mut state.enemies {
            if let Some(orig) = e.frozen_speed.take() {
                e.speed = orig;
            }
        }
        return;
    }
    for e in &mut state.enemies {
        apply_slow(e);
    }
}
