//! Boost offers and application. Crossing the score threshold opens a
//! two-card offer; the session stops advancing until one is chosen.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::SessionState;
use crate::SessionPhase;
use crate::player::Player;
use crate::status::StatusKind;

pub const FIRST_THRESHOLD: u32 = 100;
pub const THRESHOLD_STEP: u32 = 100;
pub const SHIELD_DURATION_S: f32 = 7.0;
pub const MAX_HP_BONUS: i32 = 5;
pub const SPEED_BONUS: f32 = 50.0;
pub const BULLET_SPEED_BONUS: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boost {
    Shield,
    Shotgun,
    Laser,
    MaxHp,
    Speed,
    BulletSpeed,
    BulletCount,
}

impl Boost {
    pub fn name(self) -> &'static str {
        match self {
            Boost::Shield => "shield",
            Boost::Shotgun => "shotgun",
            Boost::Laser => "laser",
            Boost::MaxHp => "max_hp",
            Boost::Speed => "speed",
            Boost::BulletSpeed => "bullet_speed",
            Boost::BulletCount => "bullet_count",
        }
    }

    pub fn parse(name: &str) -> Option<Boost> {
        match name.trim().to_ascii_lowercase().as_str() {
            "shield" => Some(Boost::Shield),
            "shotgun" => Some(Boost::Shotgun),
            "laser" => Some(Boost::Laser),
            "max_hp" => Some(Boost::MaxHp),
            "speed" => Some(Boost::Speed),
            "bullet_speed" => Some(Boost::BulletSpeed),
            "bullet_count" => Some(Boost::BulletCount),
            _ => None,
        }
    }
}

/// Offer weights; one-time abilities the player already owns drop to zero.
fn weights(player: &Player) -> [(Boost, f32); 7] {
    [
        (Boost::Shield, 0.15),
        (Boost::Shotgun, if player.has_shotgun { 0.0 } else { 0.10 }),
        (Boost::Laser, if player.has_laser { 0.0 } else { 0.10 }),
        (Boost::MaxHp, 0.45),
        (Boost::Speed, 0.45),
        (Boost::BulletSpeed, 0.35),
        (Boost::BulletCount, 0.05),
    ]
}

/// Weighted draw over the table.
pub fn roll_offer(rng: &mut ChaCha8Rng, player: &Player) -> Boost {
    let table = weights(player);
    let total: f32 = table.iter().map(|(_, w)| w).sum();
    let mut x = rng.random::<f32>() * total;
    for (boost, w) in table {
        if w <= 0.0 {
            continue;
        }
        if x < w {
            return boost;
        }
        x -= w;
    }
    // Numeric edge of the scan; the heaviest always-available entry.
    Boost::MaxHp
}

/// Two distinct offers; the second re-rolls until it differs.
pub fn roll_offers(rng: &mut ChaCha8Rng, player: &Player) -> [Boost; 2] {
    let first = roll_offer(rng, player);
    loop {
        let second = roll_offer(rng, player);
        if second != first {
            return [first, second];
        }
    }
}

/// Open an offer when the score threshold is crossed: pause every enemy and
/// switch the session into the non-advancing selection phase.
pub fn maybe_trigger(state: &mut SessionState) {
    if !matches!(state.phase, SessionPhase::Running) {
        return;
    }
    if state.score < state.next_powerup_score {
        return;
    }
    let offers = roll_offers(&mut state.rng, &state.player);
    for e in &mut state.enemies {
        e.paused = true;
    }
    state.phase = SessionPhase::ChoosingPowerup { offers };
}

pub fn apply(state: &mut SessionState, boost: Boost) {
    let p = &mut state.player;
    match boost {
        Boost::MaxHp => {
            p.max_hp += MAX_HP_BONUS;
            p.health += MAX_HP_BONUS;
        }
        Boost::Speed => {
            p.base_speed += SPEED_BONUS;
            p.speed = p.base_speed;
        }
        Boost::BulletSpeed => p.bullet_speed += BULLET_SPEED_BONUS,
        Boost::BulletCount => p.bullet_count += 1,
        Boost::Shield => {
            p.shield_s = SHIELD_DURATION_S;
            p.effects.arm(StatusKind::Shield);
        }
        Boost::Shotgun => {
            if !p.has_shotgun {
                p.has_shotgun = true;
                p.shotgun_s = 0.0;
            }
        }
        Boost::Laser => {
            if !p.has_laser {
                p.has_laser = true;
                p.laser_s = 0.0;
            }
        }
    }
}
