//! Data loaders resolving relative paths under `data/`.

use crate::scenario::Scenario;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn data_root() -> PathBuf {
    // Prefer top-level workspace `data/` so tests and tools can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Read a raw JSON file under `data/` and return its string.
pub fn read_json(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}

/// Load and deserialize a scenario JSON (from data/scenarios/*).
pub fn load_scenario(rel: impl AsRef<Path>) -> Result<Scenario> {
    let txt = read_json(rel)?;
    let scn: Scenario = serde_json::from_str(&txt).context("parse scenario json")?;
    Ok(scn)
}
