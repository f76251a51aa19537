use super::error::{Result, TaskError};
use crate::libs::task::Task;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default name of the task file inside the data directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Suffix of the sibling file holding the largest id ever assigned.
pub const LAST_ID_SUFFIX: &str = ".last_id";

/// Handle to the JSON file holding the task collection.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole collection. A missing or blank file is an empty list.
    ///
    /// A file where an id is zero or appears twice is rejected, since every
    /// operation addresses tasks by id.
    pub fn load(&self) -> Result<Vec<Task>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(TaskError::Load {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|source| TaskError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        let mut seen = HashSet::new();
        if let Some(task) = tasks.iter().find(|task| task.id == 0 || !seen.insert(task.id)) {
            return Err(TaskError::InvalidId {
                path: self.path.clone(),
                id: task.id,
            });
        }

        Ok(tasks)
    }

    /// Replaces the file with `tasks`.
    ///
    /// The JSON is written to a sibling `.tmp` file first and renamed over
    /// the target, so a failed write never leaves a truncated task file.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks).map_err(io::Error::from).map_err(|e| self.save_error(e))?;
        self.replace(&self.path, json)
    }

    /// Largest id ever assigned, as recorded next to the task file.
    /// Missing or unreadable records count as 0.
    pub fn load_last_id(&self) -> u32 {
        let path = self.last_id_path();
        match fs::read_to_string(&path) {
            Ok(content) => content.trim().parse().unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring unreadable id record");
                0
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable id record");
                0
            }
        }
    }

    pub fn save_last_id(&self, last_id: u32) -> Result<()> {
        self.replace(&self.last_id_path(), last_id.to_string())
    }

    pub fn last_id_path(&self) -> PathBuf {
        self.sibling(LAST_ID_SUFFIX)
    }

    fn replace(&self, target: &Path, contents: String) -> Result<()> {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.save_error(e))?;
        }

        let tmp_path = with_suffix(target, ".tmp");
        fs::write(&tmp_path, contents).map_err(|e| self.save_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.save_error(e));
        }

        Ok(())
    }

    fn save_error(&self, source: io::Error) -> TaskError {
        TaskError::Save {
            path: self.path.clone(),
            source,
        }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        with_suffix(&self.path, suffix)
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(TASKS_FILE_NAME));
    name.push(suffix);
    path.with_file_name(name)
}
