//! session_core: the authoritative survival-combat simulation.
//!
//! Owns all mutable gameplay state (player, enemies, projectiles, pickups,
//! score) and advances it one frame at a time through a fixed-order system
//! schedule. Rendering, audio playback, input sampling, and level parsing
//! live behind the seams in `level`, `input`, `events`, and `snapshot`.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use data_runtime::configs::difficulty::{Difficulty, DifficultyTuning};

pub mod actor;
pub mod events;
pub mod geom;
pub mod input;
pub mod level;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod runner;
pub mod snapshot;
pub mod status;
pub mod systems;
pub mod telemetry;

pub use actor::{ActorId, BossTimers, Enemy, EnemyKind, Health};
pub use events::AudioEvent;
pub use geom::Aabb;
pub use input::InputFrame;
pub use level::{LevelGeometry, RectWalls};
pub use pickup::{ItemKind, Pickup, PickupKind};
pub use player::Player;
pub use projectile::{ProjKind, Projectile};
pub use status::{StatusEffect, StatusKind, StatusSet};
pub use systems::freeze::FreezeState;
pub use systems::powerup::Boost;
pub use systems::schedule::Schedule;
pub use systems::spawn::SpawnTimers;

pub const WIN_SCORE: u32 = 1500;

/// Session phases. Only `Running` advances; the powerup offer and the pause
/// toggle are hard synchronization points, and `Won`/`Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    ChoosingPowerup { offers: [Boost; 2] },
    Paused,
    Won,
    Lost,
}

/// Read-only boss bar data for the presentation sink.
#[derive(Debug, Clone, Copy)]
pub struct BossStatus {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub hp: i32,
    pub max: i32,
}

impl BossStatus {
    #[inline]
    pub fn ratio(&self) -> f32 {
        self.hp.max(0) as f32 / self.max as f32
    }
}

#[derive(Debug)]
pub struct SessionState {
    pub difficulty: Difficulty,
    pub tuning: DifficultyTuning,
    pub rng: ChaCha8Rng,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Player-owned bullets, lasers included.
    pub projectiles: Vec<Projectile>,
    /// Boss bullets live apart: different collision rules.
    pub boss_projectiles: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    pub score: u32,
    pub next_powerup_score: u32,
    pub boss_spawned: bool,
    pub freeze: FreezeState,
    pub timers: SpawnTimers,
    pub phase: SessionPhase,
    /// Audio events queued this frame; the host drains and plays them.
    pub events: Vec<AudioEvent>,
    next_enemy_id: u32,
    next_proj_id: u32,
}

impl SessionState {
    pub fn new(difficulty: Difficulty, tuning: DifficultyTuning, spawn: Vec2, seed: u64) -> Self {
        Self {
            difficulty,
            tuning,
            rng: ChaCha8Rng::seed_from_u64(seed),
            player: Player::new(spawn),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            boss_projectiles: Vec::new(),
            pickups: Vec::new(),
            score: 0,
            next_powerup_score: systems::powerup::FIRST_THRESHOLD,
            boss_spawned: false,
            freeze: FreezeState::default(),
            timers: SpawnTimers::default(),
            phase: SessionPhase::Running,
            events: Vec::new(),
            next_enemy_id: 1,
            next_proj_id: 1,
        }
    }

    /// Advance one frame. Escape toggles the pause phase and consumes the
    /// frame; any non-running phase holds the world still.
    pub fn step(&mut self, level: &dyn LevelGeometry, input: &InputFrame, dt: f32) {
        if input.escape {
            self.toggle_pause();
            return;
        }
        if !matches!(self.phase, SessionPhase::Running) {
            return;
        }
        let t0 = std::time::Instant::now();
        Schedule::run(self, level, input, dt);
        metrics::histogram!("session.frame_ms").record(t0.elapsed().as_secs_f64() * 1000.0);
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            SessionPhase::Running => SessionPhase::Paused,
            SessionPhase::Paused => SessionPhase::Running,
            other => other,
        };
    }

    /// Resolve an open powerup offer by index. Anything else is a warning
    /// and a no-op.
    pub fn choose_powerup(&mut self, idx: usize) {
        let SessionPhase::ChoosingPowerup { offers } = self.phase else {
            log::warn!("powerup choice ignored: no offer open");
            return;
        };
        let Some(&boost) = offers.get(idx) else {
            log::warn!("powerup choice ignored: bad offer index {idx}");
            return;
        };
        systems::powerup::apply(self, boost);
        self.next_powerup_score += systems::powerup::THRESHOLD_STEP;
        for e in &mut self.enemies {
            e.paused = false;
        }
        self.phase = SessionPhase::Running;
    }

    /// Fire the player's fan shot at a world-space target. A target on the
    /// player is silently no shot.
    pub fn player_shoot(&mut self, target: Vec2) {
        let Some(dirs) = self.player.shoot_directions(target) else {
            return;
        };
        let origin = self.player.pos;
        for dir in dirs {
            self.spawn_player_bullet(origin, dir);
        }
    }

    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2, speed: f32) -> ActorId {
        let id = ActorId(self.next_enemy_id);
        self.next_enemy_id = self.next_enemy_id.wrapping_add(1);
        let mut e = Enemy::new(id, kind, pos, speed);
        if self.freeze.active {
            // New arrivals join an active freeze through the same helper the
            // per-frame pass uses.
            systems::freeze::apply_slow(&mut e);
        }
        self.enemies.push(e);
        metrics::counter!("session.enemy_spawns_total").increment(1);
        id
    }

    pub fn spawn_pickup(&mut self, kind: PickupKind, pos: Vec2) {
        self.pickups.push(Pickup::new(kind, pos));
    }

    fn alloc_proj_id(&mut self) -> u32 {
        let id = self.next_proj_id;
        self.next_proj_id = self.next_proj_id.wrapping_add(1);
        id
    }

    pub fn spawn_player_bullet(&mut self, pos: Vec2, dir: Vec2) {
        let id = self.alloc_proj_id();
        let speed = self.player.bullet_speed;
        self.projectiles.push(Projectile::player(id, pos, dir, speed));
    }

    pub fn spawn_laser(&mut self, pos: Vec2, dir: Vec2) {
        let id = self.alloc_proj_id();
        let speed = self.player.bullet_speed;
        self.projectiles.push(Projectile::laser(id, pos, dir, speed));
    }

    pub fn spawn_boss_bullet(&mut self, pos: Vec2, dir: Vec2) {
        let id = self.alloc_proj_id();
        self.boss_projectiles.push(Projectile::boss(id, pos, dir));
    }

    /// Boss bar data while a boss lives.
    pub fn boss_status(&self) -> Option<BossStatus> {
        let b = self.enemies.iter().find(|e| e.kind.is_boss())?;
        Some(BossStatus { kind: b.kind, pos: b.pos, hp: b.hp.hp, max: b.hp.max })
    }

    #[inline]
    pub fn boss_alive(&self) -> bool {
        self.enemies.iter().any(|e| e.kind.is_boss())
    }

    #[inline]
    pub fn in_progress(&self) -> bool {
        !matches!(self.phase, SessionPhase::Won | SessionPhase::Lost)
    }

    /// Hand the frame's queued audio events to the host.
    pub fn drain_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.events)
    }

    /// Win needs the score cap AND a dead (or never-spawned-yet) boss in the
    /// same frame; loss is simply an empty health bar.
    pub(crate) fn evaluate_outcome(&mut self) {
        if matches!(self.phase, SessionPhase::Won | SessionPhase::Lost) {
            return;
        }
        if self.score >= WIN_SCORE && !self.boss_alive() {
            log::info!("session won: score={}", self.score);
            self.phase = SessionPhase::Won;
            return;
        }
        if self.player.health <= 0 {
            log::info!("session lost: score={}", self.score);
            self.phase = SessionPhase::Lost;
        }
    }
}
