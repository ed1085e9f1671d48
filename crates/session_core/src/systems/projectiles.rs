//! Projectile integration and lifetime bookkeeping.

use crate::SessionState;
use crate::projectile::ProjKind;

/// Advance all bullets along their flight lines; lasers also burn lifetime
/// and expire when it runs out.
pub fn integrate(state: &mut SessionState, dt: f32) {
    for p in state.projectiles.iter_mut().chain(state.boss_projectiles.iter_mut()) {
        p.pos += p.dir * p.speed * dt;
        if let ProjKind::LaserBullet { life_s, .. } = &mut p.kind {
            *life_s -= dt;
        }
    }
    state.projectiles.retain(|p| match &p.kind {
        ProjKind::LaserBullet { life_s, .. } => *life_s > 0.0,
        _ => true,
    });
}
