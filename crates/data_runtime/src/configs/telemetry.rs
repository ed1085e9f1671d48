//! Telemetry toggles for headless runs, loaded from data/config/telemetry.toml.

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct TelemetryCfg {
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Load the telemetry config from the default location, falling back to defaults.
pub fn load_default() -> Result<TelemetryCfg> {
    let path = data_root().join("config/telemetry.toml");
    if !path.is_file() {
        return Ok(TelemetryCfg::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: TelemetryCfg = toml::from_str(&txt).context("parse TOML")?;
    Ok(parsed)
}
