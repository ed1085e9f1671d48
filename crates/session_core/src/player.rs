//! Player state: movement speeds, health, shooting stats, timed abilities.

use glam::{Vec2, vec2};

use crate::geom::Aabb;
use crate::status::StatusSet;

pub const PLAYER_SIZE: Vec2 = Vec2::splat(45.0);
pub const BASE_SPEED: f32 = 300.0;
pub const BASE_BULLET_SPEED: f32 = 350.0;
pub const BASE_MAX_HP: i32 = 50;
/// Angular spacing between fan-shot bullets (~5 degrees).
pub const SHOT_SPREAD_RAD: f32 = 0.0873;
pub const SHOTGUN_PERIOD_S: f32 = 5.0;
pub const SHOTGUN_BULLETS: usize = 8;
pub const LASER_PERIOD_S: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Where this frame's movement wanted to land, before wall rollback.
    /// Enemy AI aims here to avoid lagging behind a blocked player.
    pub intended_pos: Vec2,
    pub base_speed: f32,
    pub speed: f32,
    pub speed_boost_s: f32,
    pub bullet_speed: f32,
    pub bullet_count: u32,
    pub max_hp: i32,
    pub health: i32,
    pub shield_s: f32,
    pub has_shotgun: bool,
    pub shotgun_s: f32,
    pub has_laser: bool,
    pub laser_s: f32,
    pub effects: StatusSet,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            intended_pos: pos,
            base_speed: BASE_SPEED,
            speed: BASE_SPEED,
            speed_boost_s: 0.0,
            bullet_speed: BASE_BULLET_SPEED,
            bullet_count: 1,
            max_hp: BASE_MAX_HP,
            health: BASE_MAX_HP,
            shield_s: 0.0,
            has_shotgun: false,
            shotgun_s: 0.0,
            has_laser: false,
            laser_s: 0.0,
            effects: StatusSet::default(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, PLAYER_SIZE)
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.health > 0
    }

    #[inline]
    pub fn shield_active(&self) -> bool {
        self.shield_s > 0.0
    }

    /// Apply damage unless the shield window is open. Returns whether any
    /// damage landed. Health clamps at zero.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.shield_active() {
            return false;
        }
        self.health = (self.health - amount).max(0);
        true
    }

    pub fn heal_full(&mut self) {
        self.health = self.max_hp;
    }

    pub fn apply_speed_boost(&mut self, duration_s: f32, amount: f32) {
        self.speed = self.base_speed + amount;
        self.speed_boost_s = duration_s;
    }

    /// Advance per-player countdowns: speed boost expiry, shield window,
    /// status-effect decay. Ability auto-fire runs in the movement system.
    pub fn tick_timers(&mut self, dt: f32) {
        if self.speed_boost_s > 0.0 {
            self.speed_boost_s -= dt;
            if self.speed_boost_s <= 0.0 {
                self.speed_boost_s = 0.0;
                self.speed = self.base_speed;
            }
        }
        if self.shield_s > 0.0 {
            self.shield_s = (self.shield_s - dt).max(0.0);
        }
        self.effects.tick(dt);
    }

    /// Fan-shot directions toward `target`. One bullet flies straight at it;
    /// extra bullets spread symmetrically around that line. A target on top
    /// of the player yields no shot.
    pub fn shoot_directions(&self, target: Vec2) -> Option<Vec<Vec2>> {
        let to = target - self.pos;
        if to.length_squared() <= 1e-6 {
            return None;
        }
        let dir = to.normalize();
        let count = self.bullet_count.max(1);
        if count == 1 {
            return Some(vec![dir]);
        }
        let start = -SHOT_SPREAD_RAD * (count - 1) as f32 / 2.0;
        let dirs = (0..count)
            .map(|i| {
                let angle = start + i as f32 * SHOT_SPREAD_RAD;
                Vec2::from_angle(angle).rotate(dir)
            })
            .collect();
        Some(dirs)
    }
}

/// Evenly spaced ring of directions starting at +X, used by the shotgun
/// ability and the hard boss's radial volley.
pub fn ring_directions(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| Vec2::from_angle(i as f32 / count as f32 * std::f32::consts::TAU))
        .collect()
}

/// Laser aim with the documented fallback: a pointer sitting on the origin
/// fires straight up instead of skipping the shot.
pub fn laser_aim(origin: Vec2, pointer: Vec2) -> Vec2 {
    let dir = (pointer - origin).normalize_or_zero();
    if dir.length_squared() <= 1e-6 { vec2(0.0, -1.0) } else { dir }
}
