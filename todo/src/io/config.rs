//! Todo configuration stored under `.todo/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Todo configuration (TOML).
///
/// Edited by hand; missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoConfig {
    /// Collection file. Relative paths resolve against `.todo/`.
    pub data_file: PathBuf,

    /// Refuse to start when the collection file exists but cannot be loaded,
    /// instead of starting with an empty list.
    pub strict_load: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("todos.json"),
            strict_load: false,
        }
    }
}

impl TodoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(anyhow!("data_file must be a non-empty path"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TodoConfig::default()`.
pub fn load_config(path: &Path) -> Result<TodoConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(TodoConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TodoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &TodoConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
