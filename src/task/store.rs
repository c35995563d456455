//! Task store - JSON file persistence
//!
//! The store owns the authoritative in-memory task list. The backing file
//! is read once at open and rewritten in full after every mutation.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::error::{Error, Result};
use super::model::{NewTask, StatusFilter, Task, TaskPatch};

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store at `path`. A missing file starts an empty collection
    /// and is created on the spot; a corrupt file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            let tasks = load_tasks(&path)?;
            Ok(Self { path, tasks })
        } else {
            let store = Self {
                path,
                tasks: Vec::new(),
            };
            store.persist()?;
            Ok(store)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching an optional keyword and a status filter, in
    /// insertion order. The keyword is a case-insensitive substring match
    /// against title and description; blank keywords match everything.
    pub fn search(&self, keyword: Option<&str>, status: StatusFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| status.accepts(task))
            .filter(|task| match keyword {
                Some(keyword) if !keyword.trim().is_empty() => {
                    task.matches_keyword(keyword.trim())
                }
                _ => true,
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Validate, append, persist. Returns the stored task.
    pub fn add(&mut self, input: NewTask) -> Result<Task> {
        let task = Task::create(input)?;
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Apply a partial update to one task and persist.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<Task> {
        let idx = self.index_of(id)?;
        self.tasks[idx].apply(patch)?;
        self.persist()?;
        Ok(self.tasks[idx].clone())
    }

    /// Completion-only update.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> Result<Task> {
        let idx = self.index_of(id)?;
        self.tasks[idx].set_completed(completed);
        self.persist()?;
        Ok(self.tasks[idx].clone())
    }

    /// Flip completion. Returns the updated task.
    pub fn toggle_completed(&mut self, id: &str) -> Result<Task> {
        let completed = !self.get(id)?.completed;
        self.set_completed(id, completed)
    }

    /// Remove a task and persist. Returns the removed task.
    pub fn remove(&mut self, id: &str) -> Result<Task> {
        let idx = self.index_of(id)?;
        let task = self.tasks.remove(idx);
        self.persist()?;
        Ok(task)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::WriteFailed {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }

        // Keep the previous snapshot around as a backup.
        if self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(&self.tasks).map_err(Error::Encode)?;
        fs::write(&self.path, content).map_err(|e| Error::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = fs::read_to_string(path).map_err(|e| Error::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content).map_err(|e| Error::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}
