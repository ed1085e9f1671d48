//! Discrete audio events. The sim queues them per frame; the host drains the
//! queue and plays whatever it likes. Fire-and-forget.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioEvent {
    Coin,
    Heal,
    Speed,
    Freezer,
    EnemyCollision,
    EnemyKill,
    BossKill,
    HardBossShoot,
    /// Reserved in the vocabulary; current rules report hits on the player
    /// as `EnemyCollision`.
    PlayerHit,
}

impl AudioEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            AudioEvent::Coin => "coin",
            AudioEvent::Heal => "heal",
            AudioEvent::Speed => "speed",
            AudioEvent::Freezer => "freezer",
            AudioEvent::EnemyCollision => "enemy_collision",
            AudioEvent::EnemyKill => "enemy_kill",
            AudioEvent::BossKill => "boss_kill",
            AudioEvent::HardBossShoot => "hardboss_shoot",
            AudioEvent::PlayerHit => "player_hit",
        }
    }
}
