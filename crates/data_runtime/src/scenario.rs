//! Headless scenario schema consumed by the runner and the harness binary.

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Scenario {
    /// Difficulty name ("easy" or "hard"); unknown names fall back to easy.
    pub difficulty: String,
    pub seed: Option<u64>,
    /// Wall-clock cap for the run, in simulated seconds.
    pub max_seconds: Option<f32>,
    /// Arena width/height; open rectangle with a centered spawn.
    pub arena: Option<[f32; 2]>,
    /// Boosts granted before the first frame (by name). Unknown names are
    /// skipped with a diagnostic.
    #[serde(default)]
    pub grant_boosts: Vec<String>,
    /// How often the scripted bot clicks at the nearest enemy.
    pub bot_fire_period_s: Option<f32>,
}
