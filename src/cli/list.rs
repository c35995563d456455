//! `taskwell list` command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use crate::task::{StatusFilter, Task};

const TABLE_COL_TITLE: usize = 32;
const TABLE_COL_DUE: usize = 12;
const TABLE_COL_STATUS: usize = 10;

#[derive(Args)]
pub struct ListArgs {
    /// Keyword filter against title and description
    #[arg(short = 'q', long)]
    query: Option<String>,

    /// Filter by status (all, active, completed)
    #[arg(short, long, default_value = "all")]
    status: String,

    /// Show overdue tasks only
    #[arg(long)]
    overdue: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    due_date: Option<chrono::NaiveDate>,
    completed: bool,
    is_overdue: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

fn print_table_header() {
    println!(
        "{:<width_title$} {:<width_due$} {:<width_status$} ID",
        "TITLE",
        "DUE",
        "STATUS",
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE,
        width_status = TABLE_COL_STATUS
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_TITLE + TABLE_COL_DUE + TABLE_COL_STATUS + 16 + 3)
    );
}

fn print_table_row(task: &Task) {
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let due = task
        .due_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = if task.completed {
        "completed"
    } else if task.is_overdue() {
        "overdue"
    } else {
        "active"
    };
    println!(
        "{:<width_title$} {:<width_due$} {:<width_status$} {}",
        title,
        due,
        status,
        task.id,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE,
        width_status = TABLE_COL_STATUS
    );
}

pub fn run(data_file: &Option<PathBuf>, args: ListArgs) -> Result<()> {
    let Some(status) = StatusFilter::parse(&args.status) else {
        bail!("Unknown status filter: {} (expected all, active, or completed)", args.status);
    };

    let store = super::open_store(data_file)?;
    let tasks: Vec<&Task> = store
        .search(args.query.as_deref(), status)
        .into_iter()
        .filter(|t| !args.overdue || t.is_overdue())
        .collect();

    if args.json {
        let items: Vec<TaskJson> = tasks
            .iter()
            .map(|task| TaskJson {
                id: task.id.clone(),
                title: task.title.clone(),
                description: task.description.clone(),
                due_date: task.due_date,
                completed: task.completed,
                is_overdue: task.is_overdue(),
                created_at: task.created_at,
                updated_at: task.updated_at,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No matching tasks.");
        return Ok(());
    }

    print_table_header();
    for task in &tasks {
        print_table_row(task);
    }
    Ok(())
}
