//! `taskwell remove` command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task ID (or unique ID prefix, or exact title)
    id: String,
}

pub fn run(data_file: &Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let mut store = super::open_store(data_file)?;
    let id = super::resolve_task(&args.id, store.tasks())?.id.clone();

    let task = store.remove(&id)?;
    println!("Deleted '{}'", task.title);
    Ok(())
}
