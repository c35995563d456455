//! `taskwell done` command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct DoneArgs {
    /// Task ID (or unique ID prefix, or exact title)
    id: String,

    /// Mark the task active again instead
    #[arg(long)]
    undo: bool,
}

pub fn run(data_file: &Option<PathBuf>, args: DoneArgs) -> Result<()> {
    let mut store = super::open_store(data_file)?;
    let id = super::resolve_task(&args.id, store.tasks())?.id.clone();

    let task = store.set_completed(&id, !args.undo)?;
    if task.completed {
        println!("Completed '{}'", task.title);
    } else {
        println!("Reopened '{}'", task.title);
    }
    Ok(())
}
