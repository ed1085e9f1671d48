//! Per-frame presentation snapshot. The renderer consumes plain data; the
//! sim keeps ownership of everything live.

use crate::{SessionPhase, SessionState};
use crate::actor::EnemyKind;
use crate::pickup::PickupKind;
use crate::projectile::ProjKind;
use crate::status::StatusKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjRepKind {
    Player,
    Laser,
    Boss,
}

#[derive(Debug, Clone, Copy)]
pub struct EffectRep {
    pub kind: StatusKind,
    pub phase_s: f32,
    pub remaining_s: f32,
    pub color: [u8; 3],
}

#[derive(Debug, Clone)]
pub struct PlayerRep {
    pub pos: [f32; 2],
    pub hp: i32,
    pub max: i32,
    pub shield_active: bool,
    pub effects: Vec<EffectRep>,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyRep {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: [f32; 2],
    pub hp: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectileRep {
    pub id: u32,
    pub kind: ProjRepKind,
    pub pos: [f32; 2],
    pub dir: [f32; 2],
}

#[derive(Debug, Clone, Copy)]
pub struct PickupRep {
    pub kind: PickupKind,
    pub pos: [f32; 2],
}

#[derive(Debug, Clone, Copy)]
pub struct BossBarRep {
    pub kind: EnemyKind,
    pub pos: [f32; 2],
    pub ratio: f32,
}

#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub score: u32,
    pub freeze_overlay: bool,
    pub paused: bool,
    pub player: PlayerRep,
    pub enemies: Vec<EnemyRep>,
    pub projectiles: Vec<ProjectileRep>,
    pub pickups: Vec<PickupRep>,
    pub boss: Option<BossBarRep>,
}

impl SessionState {
    /// Build the frame's render data.
    pub fn snapshot(&self) -> FrameSnapshot {
        let player = PlayerRep {
            pos: self.player.pos.into(),
            hp: self.player.health,
            max: self.player.max_hp,
            shield_active: self.player.shield_active(),
            effects: self
                .player
                .effects
                .iter()
                .map(|e| EffectRep {
                    kind: e.kind,
                    phase_s: e.phase_s(),
                    remaining_s: e.remaining_s,
                    color: e.kind.color(),
                })
                .collect(),
        };
        let enemies = self
            .enemies
            .iter()
            .map(|e| EnemyRep {
                id: e.id.0,
                kind: e.kind,
                pos: e.pos.into(),
                hp: e.hp.hp,
                max: e.hp.max,
            })
            .collect();
        let projectiles = self
            .projectiles
            .iter()
            .chain(self.boss_projectiles.iter())
            .map(|p| ProjectileRep {
                id: p.id,
                kind: match p.kind {
                    ProjKind::PlayerBullet => ProjRepKind::Player,
                    ProjKind::LaserBullet { .. } => ProjRepKind::Laser,
                    ProjKind::BossBullet => ProjRepKind::Boss,
                },
                pos: p.pos.into(),
                dir: p.dir.into(),
            })
            .collect();
        let pickups = self
            .pickups
            .iter()
            .map(|p| PickupRep { kind: p.kind, pos: p.pos.into() })
            .collect();
        let boss = self.boss_status().map(|b| BossBarRep {
            kind: b.kind,
            pos: b.pos.into(),
            ratio: b.ratio(),
        });
        FrameSnapshot {
            score: self.score,
            freeze_overlay: self.freeze.active,
            paused: !matches!(self.phase, SessionPhase::Running),
            player,
            enemies,
            projectiles,
            pickups,
            boss,
        }
    }
}
