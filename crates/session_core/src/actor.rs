//! Enemy actor types: stable ids, kind tags, health, boss attack timers.

use glam::{Vec2, vec2};

use crate::geom::Aabb;

/// Stable entity id assigned at creation; never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Standard,
    Fast,
    Tanky,
    Summon,
    EasyBoss,
    HardBoss,
}

impl EnemyKind {
    #[inline]
    pub fn is_boss(self) -> bool {
        matches!(self, EnemyKind::EasyBoss | EnemyKind::HardBoss)
    }

    pub fn base_hp(self) -> i32 {
        match self {
            EnemyKind::Standard => 3,
            EnemyKind::Fast => 1,
            EnemyKind::Tanky => 6,
            EnemyKind::Summon => 1,
            EnemyKind::EasyBoss => 150,
            EnemyKind::HardBoss => 250,
        }
    }

    /// Collision footprint.
    pub fn size(self) -> Vec2 {
        match self {
            EnemyKind::Standard => vec2(60.0, 90.0),
            EnemyKind::Fast => vec2(50.0, 80.0),
            EnemyKind::Tanky => vec2(75.0, 105.0),
            EnemyKind::Summon => vec2(60.0, 50.0),
            EnemyKind::EasyBoss | EnemyKind::HardBoss => vec2(265.0, 200.0),
        }
    }

    /// Score awarded for a lethal hit.
    pub fn kill_score(self) -> u32 {
        match self {
            EnemyKind::Standard | EnemyKind::Fast | EnemyKind::Tanky => 10,
            EnemyKind::Summon => 5,
            EnemyKind::EasyBoss => 100,
            EnemyKind::HardBoss => 200,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}

impl Health {
    #[inline]
    pub fn new(max: i32) -> Self {
        Self { hp: max, max }
    }
    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0
    }
}

/// Attack schedule carried only by bosses.
#[derive(Debug, Clone, Copy, Default)]
pub struct BossTimers {
    pub shoot_s: f32,
    pub summon_s: f32,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: ActorId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub speed: f32,
    pub hp: Health,
    /// Set while a powerup offer is open; halts movement and attack timers.
    pub paused: bool,
    /// Pre-freeze speed, cached exactly once while the freeze effect runs.
    pub frozen_speed: Option<f32>,
    pub attack: Option<BossTimers>,
}

impl Enemy {
    pub fn new(id: ActorId, kind: EnemyKind, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            speed,
            hp: Health::new(kind.base_hp()),
            paused: false,
            frozen_speed: None,
            attack: kind.is_boss().then(BossTimers::default),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.kind.size())
    }

    /// Apply damage, clamping at zero. Returns true on the lethal hit.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.hp.alive() {
            return false;
        }
        self.hp.hp = (self.hp.hp - amount).max(0);
        !self.hp.alive()
    }
}
