//! Projectiles: player bullets, piercing laser bullets, boss bullets.

use std::collections::HashSet;

use glam::{Vec2, vec2};

use crate::actor::ActorId;
use crate::geom::Aabb;

pub const BOSS_BULLET_SPEED: f32 = 600.0;
pub const LASER_LIFETIME_S: f32 = 3.0;

#[derive(Debug, Clone)]
pub enum ProjKind {
    PlayerBullet,
    /// Pierces: keeps flying after a hit and damages each enemy id at most
    /// once over its bounded lifetime.
    LaserBullet {
        life_s: f32,
        damaged: HashSet<ActorId>,
    },
    BossBullet,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjKind,
    pub pos: Vec2,
    /// Normalized flight direction; zero means the shot had no aim and the
    /// bullet stays put.
    pub dir: Vec2,
    pub speed: f32,
}

impl Projectile {
    pub fn player(id: u32, pos: Vec2, dir: Vec2, speed: f32) -> Self {
        Self { id, kind: ProjKind::PlayerBullet, pos, dir, speed }
    }

    pub fn laser(id: u32, pos: Vec2, dir: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind: ProjKind::LaserBullet { life_s: LASER_LIFETIME_S, damaged: HashSet::new() },
            pos,
            dir,
            speed,
        }
    }

    pub fn boss(id: u32, pos: Vec2, dir: Vec2) -> Self {
        Self { id, kind: ProjKind::BossBullet, pos, dir, speed: BOSS_BULLET_SPEED }
    }

    pub fn size(&self) -> Vec2 {
        match self.kind {
            ProjKind::PlayerBullet => vec2(10.0, 10.0),
            ProjKind::LaserBullet { .. } => vec2(20.0, 20.0),
            ProjKind::BossBullet => vec2(14.0, 14.0),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size())
    }

    #[inline]
    pub fn is_laser(&self) -> bool {
        matches!(self.kind, ProjKind::LaserBullet { .. })
    }
}
