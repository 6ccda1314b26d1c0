//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod output;
pub mod scan;

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use shelf_core::models::config::ShelfConfig;

/// Config file in effect: `--config`, then `SHELF_CONFIG`, then
/// `<config dir>/shelf/config.json`.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }
    if let Some(path) = std::env::var_os("SHELF_CONFIG") {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelf")
        .join("config.json")
}

/// Load configuration from the file in effect.
///
/// An explicit `--config` file must exist; a missing default file means defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<ShelfConfig> {
    let path = config_path(explicit);

    if explicit.is_some() || path.exists() {
        debug!("Using config file {}", path.display());
        Ok(ShelfConfig::from_file(&path)?)
    } else {
        Ok(ShelfConfig::default())
    }
}

/// Parse a `--at` moment: `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD` (midnight).
pub fn parse_moment(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(moment) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(moment);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, got '{}'", value))
}
