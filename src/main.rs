//! Smart Tasks - Main Entry Point
//!
//! Command-line front end over the `smart_tasks` library. The actual
//! implementation is in the library; this file only parses arguments,
//! calls into the task store and prints the result.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use smart_tasks::{Priority, TaskManager, formatting, local_date_today, validation};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Smart Tasks - a task list with an urgency-ranked smart view
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the task file (.json for JSON, TOML otherwise)
    #[arg(long, short, global = true, default_value = "tasks.toml")]
    file: PathBuf,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task
    Add(AddArgs),
    /// List all tasks in the order they were added
    List,
    /// Show pending tasks ranked by urgency
    Smart {
        /// Rank as of this date (YYYY-MM-DD) instead of today
        #[arg(long, value_parser = parse_date_arg)]
        today: Option<NaiveDate>,
    },
    /// Mark a task completed
    Complete { id: u32 },
    /// Delete a task
    Delete { id: u32 },
    /// Change a task's description, priority or due date
    Edit(EditArgs),
    /// Remove all completed tasks
    ClearCompleted,
    /// Show completion statistics
    Stats,
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Task description
    description: String,

    /// Priority: high, medium or low
    #[arg(long, short, default_value = "medium", value_parser = parse_priority_arg)]
    priority: Priority,

    /// Due date (YYYY-MM-DD)
    #[arg(long, short)]
    due: Option<String>,
}

#[derive(Args, Debug)]
struct EditArgs {
    id: u32,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New priority: high, medium or low
    #[arg(long, short, value_parser = parse_priority_arg)]
    priority: Option<Priority>,

    /// New due date (YYYY-MM-DD); pass an empty string to clear it
    #[arg(long, short)]
    due: Option<String>,
}

fn parse_priority_arg(value: &str) -> Result<Priority, String> {
    validation::parse_priority(value).map_err(|e| e.to_string())
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    match validation::parse_due_date(value) {
        Ok(Some(date)) => Ok(date),
        Ok(None) => Err("date cannot be empty".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("smart_tasks=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Cli) -> Result<()> {
    let mut manager = TaskManager::new(&args.file)?;

    match args.command {
        Command::Add(add) => {
            let due = add.due.as_deref().unwrap_or("");
            let task = manager.add(&add.description, add.priority, due)?;
            println!("Task created with ID: {}", task.id);
        }
        Command::List => {
            let tasks = manager.list_all();
            if tasks.is_empty() {
                println!("{}", formatting::format_task_list(tasks));
            } else {
                print!("{}", formatting::format_task_list(tasks));
                println!("{}", formatting::format_stats(&manager.stats()));
            }
        }
        Command::Smart { today } => {
            let today = today.unwrap_or_else(local_date_today);
            println!("{}", formatting::format_smart_view(&manager.smart_view(today)));
        }
        Command::Complete { id } => {
            let task = manager.complete(id)?;
            println!("Task {} completed: {}", task.id, task.description);
        }
        Command::Delete { id } => {
            let task = manager.delete(id)?;
            println!("Task {} deleted: {}", task.id, task.description);
        }
        Command::Edit(edit) => {
            let task = manager.edit(
                edit.id,
                edit.description.as_deref(),
                edit.priority,
                edit.due.as_deref(),
            )?;
            println!("Task {} updated successfully", task.id);
        }
        Command::ClearCompleted => {
            let removed = manager.clear_completed()?;
            println!("Removed {} completed tasks", removed);
        }
        Command::Stats => {
            println!("{}", formatting::format_stats(&manager.stats()));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Cli::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Cli::parse();
    init_tracing(args.verbose);
    run(args)
}
