//! Taskwell - single-user task tracker with a file-backed store

use anyhow::Result;
use clap::Parser;
use taskwell::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "taskwell=debug"
    } else {
        "taskwell=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&cli.data_file, args),
        Some(Commands::List(args)) => cli::list::run(&cli.data_file, args),
        Some(Commands::Show(args)) => cli::show::run(&cli.data_file, args),
        Some(Commands::Done(args)) => cli::done::run(&cli.data_file, args),
        Some(Commands::Remove(args)) => cli::remove::run(&cli.data_file, args),
        Some(Commands::Serve(args)) => cli::serve::run(&cli.data_file, args).await,
        None => cli::serve::run(&cli.data_file, cli::serve::ServeArgs::from_env()).await,
    }
}
