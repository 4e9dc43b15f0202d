//! Canonical `.todo/` locations and the `todo init` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::config::{TodoConfig, write_config};
use super::file_store::FileStorage;
use super::storage::StorageBackend;

/// All canonical paths within `.todo/` for a project root.
#[derive(Debug, Clone)]
pub struct TodoPaths {
    pub root: PathBuf,
    pub todo_dir: PathBuf,
    pub config_path: PathBuf,
}

impl TodoPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let todo_dir = root.join(".todo");
        Self {
            root: root.clone(),
            config_path: todo_dir.join("config.toml"),
            todo_dir,
        }
    }

    /// Collection file named by `config`; relative paths live in `.todo/`.
    pub fn data_path(&self, config: &TodoConfig) -> PathBuf {
        self.todo_dir.join(&config.data_file)
    }
}

/// Options for `init_todo`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite the existing config and collection.
    pub force: bool,
}

/// Create `.todo/` scaffolding in `root`: default config and an empty
/// collection file.
///
/// Fails if `.todo/` already exists unless `options.force` is set.
pub fn init_todo(root: &Path, options: &InitOptions) -> Result<TodoPaths> {
    let paths = TodoPaths::new(root);
    if paths.todo_dir.exists() && !paths.todo_dir.is_dir() {
        return Err(anyhow!("todo init: .todo exists but is not a directory"));
    }
    if paths.todo_dir.exists() && !options.force {
        return Err(anyhow!(
            "todo init: .todo already exists (use --force to overwrite)"
        ));
    }

    fs::create_dir_all(&paths.todo_dir)
        .with_context(|| format!("create directory {}", paths.todo_dir.display()))?;
    let config = TodoConfig::default();
    write_config(&paths.config_path, &config)?;
    let mut storage = FileStorage::new(paths.data_path(&config));
    storage.save(&[])?;
    info!(
        dir = %paths.todo_dir.display(),
        data = %storage.path().display(),
        "initialized todo directory"
    );

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::load_config;

    #[test]
    fn init_creates_expected_layout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_todo(temp.path(), &InitOptions { force: false }).expect("init");

        assert!(paths.todo_dir.is_dir());
        assert!(paths.config_path.is_file());
        let config = load_config(&paths.config_path).expect("load config");
        assert_eq!(config, TodoConfig::default());
        let data = fs::read_to_string(paths.data_path(&config)).expect("read data");
        assert_eq!(data, "[]\n");
    }

    #[test]
    fn init_without_force_refuses_existing_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_todo(temp.path(), &InitOptions { force: false }).expect("init");
        let err = init_todo(temp.path(), &InitOptions { force: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn init_with_force_resets_collection() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_todo(temp.path(), &InitOptions { force: false }).expect("init");
        let data_path = paths.data_path(&TodoConfig::default());
        fs::write(&data_path, "garbage").expect("write");

        init_todo(temp.path(), &InitOptions { force: true }).expect("re-init");
        assert_eq!(fs::read_to_string(&data_path).expect("read"), "[]\n");
    }

    #[test]
    fn absolute_data_file_is_used_as_is() {
        let paths = TodoPaths::new("/project");
        let config = TodoConfig {
            data_file: PathBuf::from("/elsewhere/list.json"),
            strict_load: false,
        };
        assert_eq!(paths.data_path(&config), PathBuf::from("/elsewhere/list.json"));
    }
}
