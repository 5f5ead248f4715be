mod store;
mod task;

use clap::{CommandFactory, Parser, Subcommand};
use anyhow::Result;
use std::env;

use crate::task::{Priority, Task};

#[derive(Parser)]
#[command(name = "taskfocus")]
#[command(about = "Taskfocus - Personal Task Tracker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        title: String,
        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },
    /// List pending tasks
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
    },
    /// Mark a task as done
    Done { id: u64 },
    /// Delete a task
    Rm { id: u64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.debug { env::set_var("RUST_LOG", "debug"); } else { env::set_var("RUST_LOG", "info"); }
    env_logger::init();
    let work_dir = env::current_dir()?;
    let store = store::Store::new(work_dir);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    run(command, &store)
}

fn run(command: Commands, store: &store::Store) -> Result<()> {
    match command {
        Commands::Add { title, priority } => {
            if title.trim().is_empty() {
                anyhow::bail!("Task title cannot be empty");
            }
            store.add(&title, priority)?;
        }
        Commands::List { all } => {
            let tasks = store.list(all)?;
            if tasks.is_empty() {
                println!("No tasks found.");
            }
            for task in &tasks {
                println!("{}", render_task(task));
            }
        }
        Commands::Done { id } => {
            if !store.complete(id)? {
                println!("❌ Task not found.");
            }
        }
        Commands::Rm { id } => {
            if !store.remove(id)? {
                println!("❌ Task not found.");
            }
        }
    }
    Ok(())
}

fn render_task(task: &Task) -> String {
    let marker = if task.done { "✔" } else { "•" };
    format!(
        "{:03} {} [{}] {} ({})",
        task.id,
        marker,
        task.priority.as_str().to_uppercase(),
        task.title,
        task.created_at
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_task(id: u64, done: bool) -> Task {
        Task {
            id,
            title: "Buy milk".to_string(),
            priority: Priority::Low,
            done,
            created_at: "2026-08-22T14:30:05".to_string(),
        }
    }

    fn test_store() -> (TempDir, store::Store) {
        let dir = TempDir::new().unwrap();
        let store = store::Store::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_render_pending_task() {
        let line = render_task(&sample_task(1, false));
        assert_eq!(line, "001 • [LOW] Buy milk (2026-08-22T14:30:05)");
    }

    #[test]
    fn test_render_done_task() {
        let mut task = sample_task(42, true);
        task.priority = Priority::High;
        let line = render_task(&task);
        assert_eq!(line, "042 ✔ [HIGH] Buy milk (2026-08-22T14:30:05)");
    }

    #[test]
    fn test_render_keeps_wide_ids() {
        let line = render_task(&sample_task(1000, false));
        assert!(line.starts_with("1000 "));
    }

    #[test]
    fn test_cli_defaults_priority_to_medium() {
        let cli = Cli::try_parse_from(["taskfocus", "add", "Buy milk"]).unwrap();
        match cli.command {
            Some(Commands::Add { priority, .. }) => assert_eq!(priority, Priority::Medium),
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_priority() {
        assert!(Cli::try_parse_from(["taskfocus", "add", "x", "-p", "urgent"]).is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["taskfocus", "done", "abc"]).is_err());
    }

    #[test]
    fn test_cli_without_command_parses_to_none() {
        let cli = Cli::try_parse_from(["taskfocus"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_rejects_blank_title() {
        let (_dir, store) = test_store();
        let err = run(
            Commands::Add {
                title: "   ".to_string(),
                priority: Priority::Medium,
            },
            &store,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert!(!store.path.exists());
    }

    #[test]
    fn test_run_add_persists_valid_title() {
        let (_dir, store) = test_store();
        run(
            Commands::Add {
                title: "Buy milk".to_string(),
                priority: Priority::High,
            },
            &store,
        )
        .unwrap();
        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[0].priority, Priority::High);
    }
}
