use super::error::{Result, TaskError};
use super::file::TaskFile;
use crate::libs::stats::TaskStats;
use crate::libs::task::{Category, Priority, Task, TaskFilter};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Owner of the task collection.
///
/// Every mutating operation runs to completion, including writing the file,
/// before it returns. When the write fails the in-memory change is kept and
/// the error is handed back to the caller. Operations on an unknown id are
/// no-ops and report `None` rather than an error.
///
/// The largest id ever assigned is kept next to the task file, so an id
/// freed by deleting the newest task is not handed out again by a later run.
#[derive(Debug)]
pub struct TaskStore {
    file: TaskFile,
    tasks: Vec<Task>,
    last_id: u32,
    load_warning: Option<TaskError>,
}

impl TaskStore {
    /// Opens the store backed by `path` and loads its contents.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = TaskStore {
            file: TaskFile::new(path),
            tasks: Vec::new(),
            last_id: 0,
            load_warning: None,
        };
        store.load();
        store
    }

    /// Replaces the in-memory collection with the file contents.
    ///
    /// An unreadable or malformed file leaves the store empty and the cause
    /// available through [`TaskStore::load_warning`].
    pub fn load(&mut self) {
        match self.file.load() {
            Ok(tasks) => {
                debug!(path = %self.file.path().display(), count = tasks.len(), "loaded tasks");
                self.tasks = tasks;
                self.load_warning = None;
            }
            Err(e) => {
                warn!(path = %self.file.path().display(), error = %e, "starting with an empty task list");
                self.tasks = Vec::new();
                self.load_warning = Some(e);
            }
        }
        self.last_id = self.max_id().max(self.file.load_last_id());
    }

    /// Writes the whole collection and the id high-water mark.
    pub fn save(&self) -> Result<()> {
        self.file
            .save(&self.tasks)
            .and_then(|()| self.file.save_last_id(self.last_id))
            .inspect_err(|e| {
                error!(error = %e, "failed to persist tasks");
            })
    }

    pub fn load_warning(&self) -> Option<&TaskError> {
        self.load_warning.as_ref()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(&mut self, description: &str, priority: Priority, category: Category) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let id = self.next_id();
        let task = Task::new(id, description, priority, category);
        self.tasks.push(task.clone());
        self.last_id = id;
        debug!(id, %priority, %category, "added task");

        self.save()?;
        Ok(task)
    }

    /// Marks the task completed. Returns `None` when the id is unknown or
    /// the task was already completed; neither case touches the file.
    pub fn complete(&mut self, id: u32) -> Result<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(id, "complete: no such task");
            return Ok(None);
        };
        if !task.complete() {
            debug!(id, "complete: already completed");
            return Ok(None);
        }
        let task = task.clone();
        debug!(id, "completed task");

        self.save()?;
        Ok(Some(task))
    }

    pub fn delete(&mut self, id: u32) -> Result<Option<Task>> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!(id, "delete: no such task");
            return Ok(None);
        };
        let task = self.tasks.remove(index);
        debug!(id, "deleted task");

        self.save()?;
        Ok(Some(task))
    }

    pub fn update_priority(&mut self, id: u32, priority: Priority) -> Result<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(id, "update_priority: no such task");
            return Ok(None);
        };
        task.priority = priority;
        let task = task.clone();
        debug!(id, %priority, "updated priority");

        self.save()?;
        Ok(Some(task))
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_pending);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Ok(0);
        }
        debug!(removed, "cleared completed tasks");

        self.save()?;
        Ok(removed)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Tasks matching `filter`, pending before completed, then by priority
    /// rank. The sort is stable so ties keep insertion order.
    pub fn filtered_sorted(&self, filter: &TaskFilter) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|task| filter.matches(task)).collect();
        tasks.sort_by_key(|task| (task.completed, task.priority.rank()));
        tasks
    }

    fn max_id(&self) -> u32 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0)
    }

    // Ids are never handed out twice, even after the newest task is deleted.
    fn next_id(&self) -> u32 {
        self.max_id().max(self.last_id) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleting_newest_task_does_not_reuse_its_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(dir.path().join("tasks.json"));

        store.add("First", Priority::Medium, Category::Personal).unwrap();
        let second = store.add("Second", Priority::Medium, Category::Personal).unwrap();
        store.delete(second.id).unwrap();

        let third = store.add("Third", Priority::Medium, Category::Personal).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_description_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(dir.path().join("tasks.json"));

        let task = store.add("  Buy milk \n", Priority::Low, Category::Shopping).unwrap();
        assert_eq!(task.description, "Buy milk");
    }
}
