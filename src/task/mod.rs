//! Task tracking - record model and file-backed store
//!
//! This module is the core of taskwell:
//! - [`Task`] is the record shape with validation and derived state
//! - [`TaskStore`] owns the task list and its JSON file persistence
//!
//! Both front ends (HTTP and CLI) drive the same store operations.

pub mod error;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use model::{NewTask, StatusFilter, Task, TaskPatch};
pub use store::TaskStore;

use std::path::PathBuf;

/// Application data directory (`~/.taskwell`).
pub fn app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".taskwell"))
}

/// Default location of the task file.
pub fn default_data_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("tasks.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_data_path_under_home() {
        let temp = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", temp.path());

        let path = default_data_path().unwrap();
        assert!(path.starts_with(temp.path()));
        assert!(path.ends_with(".taskwell/tasks.json"));
    }
}
