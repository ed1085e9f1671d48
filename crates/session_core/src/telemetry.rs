//! Telemetry bootstrap for headless runs (tracing subscriber).

use anyhow::Result;

pub struct TelemetryGuard;

pub fn init_telemetry(
    cfg: &data_runtime::configs::telemetry::TelemetryCfg,
) -> Result<TelemetryGuard> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};
    let level = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = if cfg.json_logs.unwrap_or(false) {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };
    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
    tracing::info!(
        target: "telemetry",
        log_level = ?cfg.log_level,
        json_logs = ?cfg.json_logs,
        "telemetry initialized"
    );
    Ok(TelemetryGuard)
}
