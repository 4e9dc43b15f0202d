//! Durable JSON file backend with schema + invariant validation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::invariants::validate_invariants;
use crate::io::storage::StorageBackend;
use crate::item::TodoItem;

const TODOS_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/todos/v1.schema.json"
));

/// Collection stored as a pretty-printed JSON array at a single path.
///
/// A missing file is a first run and loads as an empty collection. A file
/// that exists but cannot be read, parsed, or validated is an error.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<Vec<TodoItem>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no todo file yet; starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read todos {}", self.path.display()));
            }
        };
        let value: Value = serde_json::from_str(&contents)
            .with_context(|| format!("parse todos {}", self.path.display()))?;
        validate_schema(&value)?;
        let items: Vec<TodoItem> = serde_json::from_value(value)
            .with_context(|| format!("deserialize todos {}", self.path.display()))?;
        let errors = validate_invariants(&items);
        if !errors.is_empty() {
            return Err(anyhow!("todo invariants failed: {}", errors.join("; ")));
        }
        debug!(path = %self.path.display(), count = items.len(), "todos loaded");
        Ok(items)
    }
}

impl StorageBackend for FileStorage {
    fn save(&mut self, items: &[TodoItem]) -> Result<()> {
        debug!(path = %self.path.display(), count = items.len(), "writing todos");
        let mut buf = serde_json::to_string_pretty(items).context("serialize todos")?;
        buf.push('\n');
        write_atomic(&self.path, &buf)
    }

    fn load(&self) -> Result<Vec<TodoItem>> {
        self.read_items().inspect_err(|err| {
            warn!(
                path = %self.path.display(),
                error = %format!("{err:#}"),
                "todo file unreadable"
            );
        })
    }
}

fn validate_schema(value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(TODOS_SCHEMA).context("parse embedded todo schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(value) {
        let messages = compiled
            .iter_errors(value)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "todo schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

/// Write `contents` to a sibling temp file, then rename over `path`, so a
/// failed write never leaves a truncated collection behind.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp todos {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            warn!(path = %tmp_path.display(), error = %cleanup, "could not remove temp todos");
        }
        return Err(err).with_context(|| format!("replace todos {}", path.display()));
    }
    Ok(())
}
