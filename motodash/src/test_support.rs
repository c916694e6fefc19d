//! Test-only helpers for building dashboards and scratch project roots.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::registry::Model;
use crate::core::state::MotorcycleState;
use crate::core::variant::Variant;
use crate::io::config::{DashConfig, write_config};
use crate::io::init::{DashPaths, InitOptions, init_dashboard};
use crate::session::Ticker;

/// Variant of `model` restored to explicit readings.
pub fn variant_at(model: Model, speed: u32, rpm: u32, gear: u8) -> Variant {
    Variant::new(model).restore(MotorcycleState::new(speed, rpm, gear))
}

/// Ticker that records waits instead of sleeping.
#[derive(Debug, Default)]
pub struct CountingTicker {
    pub waits: u32,
    pub waited: Duration,
}

impl Ticker for CountingTicker {
    fn wait(&mut self, interval: Duration) {
        self.waits += 1;
        self.waited += interval;
    }
}

/// Temporary project root with an initialized `.motodash/`.
pub struct TestRoot {
    dir: TempDir,
    paths: DashPaths,
}

impl TestRoot {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let paths = init_dashboard(dir.path(), &InitOptions { force: false })?;
        Ok(Self { dir, paths })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> &DashPaths {
        &self.paths
    }

    /// Overwrite the config, e.g. to shorten the tick interval.
    pub fn write_config(&self, config: &DashConfig) -> Result<()> {
        write_config(&self.paths.config_path, config)
    }

    /// Saved-state path for the default config.
    pub fn state_path(&self) -> PathBuf {
        self.paths.state_path(&DashConfig::default())
    }
}
