//! # todo - Personal To-Do List CLI
//!
//! A minimal file-backed task tracker. Tasks carry a priority
//! (high/medium/low) and a created-at timestamp; ids are always the dense
//! range 1..=N and get renumbered after deletes.
//!
//! ```bash
//! # Interactive menu
//! todo
//!
//! # Or drive it from the command line
//! todo add "Buy milk" --priority high
//! todo list
//! todo complete 1
//! todo delete 1
//! todo clear
//! ```
//!
//! Data lives in a single JSON file, `~/.todo/todos.json` by default or
//! wherever `--db` points. The whole file is rewritten on every change.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod menu;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use menu::run_menu;
use store::TaskStore;

fn main() {
    let cli = Cli::parse();

    // Completions need no store.
    if let Some(Commands::Completions { shell }) = &cli.command {
        cmd_completions(*shell);
        return;
    }

    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let todo_dir = PathBuf::from(home).join(".todo");
        if let Err(e) = std::fs::create_dir_all(&todo_dir) {
            eprintln!("Failed to create todo directory {}: {}", todo_dir.display(), e);
            std::process::exit(1);
        }
        todo_dir.join("todos.json")
    });

    let mut store = TaskStore::open(db_path);

    match cli.command {
        None | Some(Commands::Menu) => run_menu(&mut store),
        Some(Commands::Add { description, priority }) => cmd_add(&mut store, description, priority),
        Some(Commands::List { all }) => cmd_list(&store, all),
        Some(Commands::Complete { id }) => cmd_complete(&mut store, id),
        Some(Commands::Delete { id }) => cmd_delete(&mut store, id),
        Some(Commands::Clear) => cmd_clear(&mut store),
        Some(Commands::Completions { .. }) => unreachable!("completions handled above"),
    }
}
