//! `taskwell add` command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::task::NewTask;

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Free-form details
    #[arg(short = 'd', long, default_value = "")]
    description: String,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<String>,
}

pub fn run(data_file: &Option<PathBuf>, args: AddArgs) -> Result<()> {
    let mut store = super::open_store(data_file)?;

    let task = store.add(NewTask {
        title: args.title,
        description: args.description,
        due_date: args.due,
    })?;

    match &task.due_date {
        Some(due) => println!("Added '{}' (id {}, due {})", task.title, task.id, due),
        None => println!("Added '{}' (id {})", task.title, task.id),
    }
    Ok(())
}
