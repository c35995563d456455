//! `taskwell show` command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID (or unique ID prefix, or exact title)
    id: String,
}

pub fn run(data_file: &Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let store = super::open_store(data_file)?;
    let task = super::resolve_task(&args.id, store.tasks())?;

    println!("ID:          {}", task.id);
    println!("Title:       {}", task.title);
    if !task.description.is_empty() {
        println!("Description: {}", task.description);
    }
    match &task.due_date {
        Some(due) if task.is_overdue() => println!("Due:         {} (overdue)", due),
        Some(due) => println!("Due:         {}", due),
        None => println!("Due:         -"),
    }
    println!(
        "Status:      {}",
        if task.completed { "completed" } else { "active" }
    );
    println!("Created:     {}", task.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Updated:     {}", task.updated_at.format("%Y-%m-%d %H:%M:%S"));
    Ok(())
}
