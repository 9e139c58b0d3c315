use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::tasks::TaskList;

/// File format of the task store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    /// `[[tasks]]` array of tables
    Toml,
    /// Top-level array of task records
    Json,
}

impl StoreFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StoreFormat::Json,
            _ => StoreFormat::Toml,
        }
    }
}

/// TOML needs a table at the top level
#[derive(Deserialize)]
struct TomlDocument {
    #[serde(default)]
    tasks: TaskList,
}

pub struct Storage {
    file_path: PathBuf,
    format: StoreFormat,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let format = StoreFormat::from_path(&file_path);
        Self { file_path, format }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }

    /// Load the whole collection
    ///
    /// A missing or empty file is an empty collection.
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no task store yet, starting empty");
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("could not read {}", self.file_path.display()))?;
        if content.trim().is_empty() {
            return Ok(TaskList::new());
        }

        let tasks = match self.format {
            StoreFormat::Toml => toml::from_str::<TomlDocument>(&content)
                .with_context(|| format!("could not parse {}", self.file_path.display()))?
                .tasks,
            StoreFormat::Json => serde_json::from_str::<TaskList>(&content)
                .with_context(|| format!("could not parse {}", self.file_path.display()))?,
        };
        debug!(path = %self.file_path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Write the whole collection, replacing the file atomically
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let content = match self.format {
            StoreFormat::Toml => toml::to_string_pretty(&TomlDocumentRef { tasks })?,
            StoreFormat::Json => serde_json::to_string_pretty(tasks)?,
        };
        atomic_write(&self.file_path, content.as_bytes())
            .with_context(|| format!("could not write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

#[derive(Serialize)]
struct TomlDocumentRef<'a> {
    tasks: &'a TaskList,
}

/// Write `content` to `path` through a temp file in the same directory
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
