//! Dashboard configuration stored under `.motodash/config.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Dashboard configuration (TOML).
///
/// Missing fields default to the stock cluster behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashConfig {
    /// Interval between repeated actions while a control is held.
    pub tick_interval_ms: u64,

    /// How long `accelerate`/`brake` hold the control when no duration is given.
    pub default_hold_ms: u64,

    /// Saved state file name, relative to `.motodash/`.
    pub state_file: String,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            default_hold_ms: 1000,
            state_file: "motorcycle_state.json".to_string(),
        }
    }
}

impl DashConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(anyhow!("tick_interval_ms must be > 0"));
        }
        if self.default_hold_ms == 0 {
            return Err(anyhow!("default_hold_ms must be > 0"));
        }
        if self.state_file.trim().is_empty() {
            return Err(anyhow!("state_file must be non-empty"));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn default_hold(&self) -> Duration {
        Duration::from_millis(self.default_hold_ms)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DashConfig::default()`.
pub fn load_config(path: &Path) -> Result<DashConfig> {
    if !path.exists() {
        let cfg = DashConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DashConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DashConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    super::write_atomic(path, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, DashConfig::default());
        assert_eq!(cfg.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        let cfg = DashConfig {
            tick_interval_ms: 25,
            default_hold_ms: 400,
            state_file: "garage.json".to_string(),
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "tick_interval_ms = 10\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.tick_interval_ms, 10);
        assert_eq!(cfg.state_file, "motorcycle_state.json");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "tick_interval_ms = 0\n").expect("write");
        let err = load_config(&path).expect_err("invalid config");
        assert!(err.to_string().contains("tick_interval_ms"));
    }
}
