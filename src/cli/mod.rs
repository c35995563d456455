//! CLI command implementations

pub mod add;
pub mod done;
pub mod list;
pub mod remove;
pub mod serve;
pub mod show;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::task::{self, Task, TaskStore};

#[derive(Parser)]
#[command(
    name = "taskwell",
    version,
    about = "Single-user task tracker with a file-backed store"
)]
pub struct Cli {
    /// Path to the task file (defaults to ~/.taskwell/tasks.json)
    #[arg(long, env = "TASKWELL_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, env = "TASKWELL_DEBUG", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server (the default when no command is given)
    Serve(serve::ServeArgs),

    /// Add a new task
    Add(add::AddArgs),

    /// List tasks
    List(list::ListArgs),

    /// Show task details
    Show(show::ShowArgs),

    /// Mark a task as done
    Done(done::DoneArgs),

    /// Delete a task
    Remove(remove::RemoveArgs),
}

/// Open the store at the configured or default path.
pub fn open_store(data_file: &Option<PathBuf>) -> Result<TaskStore> {
    let path = match data_file {
        Some(path) => path.clone(),
        None => task::default_data_path()?,
    };
    Ok(TaskStore::open(path)?)
}

/// Resolve a user-supplied identifier to a task.
pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    // Try exact ID match
    if let Some(task) = tasks.iter().find(|t| t.id == identifier) {
        return Ok(task);
    }

    // Try ID prefix match
    if let Some(task) = tasks.iter().find(|t| t.id.starts_with(identifier)) {
        return Ok(task);
    }

    // Try exact title match
    if let Some(task) = tasks.iter().find(|t| t.title == identifier) {
        return Ok(task);
    }

    bail!("Task not found: {}", identifier)
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else if max <= 3 {
        s[..max].to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}
