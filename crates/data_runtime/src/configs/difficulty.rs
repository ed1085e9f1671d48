//! Per-difficulty spawn intervals and base enemy speed, loaded from
//! data/config/difficulty.toml with built-in defaults and clamping.

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct DifficultyTuning {
    pub enemy_spawn_ms: u32,
    pub item_spawn_ms: u32,
    pub coin_spawn_ms: u32,
    pub base_enemy_speed: f32,
}

impl DifficultyTuning {
    pub fn defaults(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => Self {
                enemy_spawn_ms: 890,
                item_spawn_ms: 12_000,
                coin_spawn_ms: 7_000,
                base_enemy_speed: 175.0,
            },
            Difficulty::Hard => Self {
                enemy_spawn_ms: 790,
                item_spawn_ms: 15_000,
                coin_spawn_ms: 7_000,
                base_enemy_speed: 225.0,
            },
        }
    }

    #[inline]
    pub fn enemy_interval_s(&self) -> f32 {
        self.enemy_spawn_ms as f32 / 1000.0
    }
    #[inline]
    pub fn item_interval_s(&self) -> f32 {
        self.item_spawn_ms as f32 / 1000.0
    }
    #[inline]
    pub fn coin_interval_s(&self) -> f32 {
        self.coin_spawn_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct DifficultyFile {
    pub easy: DifficultyTuning,
    pub hard: DifficultyTuning,
}

impl Default for DifficultyFile {
    fn default() -> Self {
        Self {
            easy: DifficultyTuning::defaults(Difficulty::Easy),
            hard: DifficultyTuning::defaults(Difficulty::Hard),
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

fn clamp(mut t: DifficultyTuning) -> DifficultyTuning {
    if t.enemy_spawn_ms < 50 {
        t.enemy_spawn_ms = 50;
    }
    if t.item_spawn_ms < 1_000 {
        t.item_spawn_ms = 1_000;
    }
    if t.coin_spawn_ms < 1_000 {
        t.coin_spawn_ms = 1_000;
    }
    if t.base_enemy_speed < 100.0 {
        t.base_enemy_speed = 100.0;
    }
    t
}

/// Load tuning for one difficulty from the default location, falling back to
/// built-in defaults when no file is present.
pub fn load_default(d: Difficulty) -> Result<DifficultyTuning> {
    let path = data_root().join("config/difficulty.toml");
    if !path.is_file() {
        return Ok(DifficultyTuning::defaults(d));
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: DifficultyFile = toml::from_str(&txt).context("parse TOML")?;
    Ok(clamp(match d {
        Difficulty::Easy => parsed.easy,
        Difficulty::Hard => parsed.hard,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_tables_match_design() {
        let easy = DifficultyTuning::defaults(Difficulty::Easy);
        assert_eq!(easy.enemy_spawn_ms, 890);
        assert_eq!(easy.item_spawn_ms, 12_000);
        assert!((easy.base_enemy_speed - 175.0).abs() < f32::EPSILON);
        let hard = DifficultyTuning::defaults(Difficulty::Hard);
        assert_eq!(hard.enemy_spawn_ms, 790);
        assert_eq!(hard.item_spawn_ms, 15_000);
        assert!((hard.base_enemy_speed - 225.0).abs() < f32::EPSILON);
        assert_eq!(easy.coin_spawn_ms, hard.coin_spawn_ms);
    }

    #[test]
    fn clamp_floors_silly_values() {
        let t = clamp(DifficultyTuning {
            enemy_spawn_ms: 0,
            item_spawn_ms: 1,
            coin_spawn_ms: 1,
            base_enemy_speed: -20.0,
        });
        assert_eq!(t.enemy_spawn_ms, 50);
        assert_eq!(t.item_spawn_ms, 1_000);
        assert!(t.base_enemy_speed >= 100.0);
    }

    #[test]
    fn default_or_file_loads() {
        // Succeeds even if the file is missing (repo ships a sample file).
        let t = load_default(Difficulty::Easy).expect("load");
        assert!(t.enemy_spawn_ms >= 50);
    }
}
