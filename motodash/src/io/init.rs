//! Initialization helpers for `.motodash/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use super::config::{DashConfig, write_config};
use super::state_store::STATE_SCHEMA;

/// Canonical paths within `.motodash/` for a project root.
#[derive(Debug, Clone)]
pub struct DashPaths {
    pub root: PathBuf,
    pub dash_dir: PathBuf,
    pub config_path: PathBuf,
    pub schema_path: PathBuf,
}

impl DashPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let dash_dir = root.join(".motodash");
        Self {
            root: root.clone(),
            dash_dir: dash_dir.clone(),
            config_path: dash_dir.join("config.toml"),
            schema_path: dash_dir.join("state.schema.json"),
        }
    }

    /// Location of the saved state for `config`.
    pub fn state_path(&self, config: &DashConfig) -> PathBuf {
        self.dash_dir.join(&config.state_file)
    }
}

/// Options for `init_dashboard`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing files.
    pub force: bool,
}

/// Create `.motodash/` with a default `config.toml` and the state schema in `root`.
///
/// Fails if `.motodash/` already exists unless `options.force` is set.
pub fn init_dashboard(root: &Path, options: &InitOptions) -> Result<DashPaths> {
    let paths = DashPaths::new(root);
    if paths.dash_dir.exists() && !options.force {
        return Err(anyhow!(
            "motodash init: .motodash already exists (use --force to overwrite)"
        ));
    }
    if paths.dash_dir.exists() && !paths.dash_dir.is_dir() {
        return Err(anyhow!("motodash init: .motodash exists but is not a directory"));
    }

    fs::create_dir_all(&paths.dash_dir)
        .with_context(|| format!("create directory {}", paths.dash_dir.display()))?;
    write_config(&paths.config_path, &DashConfig::default())?;
    fs::write(&paths.schema_path, STATE_SCHEMA)
        .with_context(|| format!("write {}", paths.schema_path.display()))?;
    debug!(dir = %paths.dash_dir.display(), "initialized dashboard directory");

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::load_config;

    #[test]
    fn init_writes_default_config_and_schema() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_dashboard(temp.path(), &InitOptions { force: false }).expect("init");

        assert_eq!(paths.root.as_path(), temp.path());
        assert!(paths.dash_dir.is_dir());
        let cfg = load_config(&paths.config_path).expect("config");
        assert_eq!(cfg, DashConfig::default());
        let schema = fs::read_to_string(&paths.schema_path).expect("schema");
        assert_eq!(schema, STATE_SCHEMA);
    }

    #[test]
    fn init_refuses_existing_dir_without_force() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_dashboard(temp.path(), &InitOptions { force: false }).expect("first init");

        let err = init_dashboard(temp.path(), &InitOptions { force: false })
            .expect_err("second init should fail");
        assert!(err.to_string().contains("already exists"));

        init_dashboard(temp.path(), &InitOptions { force: true }).expect("forced init");
    }

    #[test]
    fn state_path_is_inside_dash_dir() {
        let paths = DashPaths::new("/tmp/project");
        let path = paths.state_path(&DashConfig::default());
        assert_eq!(path, PathBuf::from("/tmp/project/.motodash/motorcycle_state.json"));
    }
}
