//! Command implementations for the CLI interface.
//!
//! Each subcommand maps onto one `TaskStore` operation; everything here is
//! reporting glue. Store errors print on stderr and exit non-zero except
//! for NotFound, which is reported and leaves the store untouched.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::store::{StoreError, TaskStore};
use crate::task::{format_priority, Priority, Task};

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// What needs doing.
        description: String,
        /// Priority: high | medium | low.
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },

    /// List tasks.
    List {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
    },

    /// Mark a task as completed.
    Complete {
        /// Task id.
        id: u64,
    },

    /// Delete a task. Remaining tasks are renumbered.
    Delete {
        /// Task id.
        id: u64,
    },

    /// Remove all completed tasks.
    Clear,

    /// Run the interactive numbered menu.
    Menu,

    /// Generate shell completion scripts.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn fail_on_save(e: StoreError) -> ! {
    eprintln!("Failed to save store: {e}");
    std::process::exit(1);
}

/// Add a new task to the store.
pub fn cmd_add(store: &mut TaskStore, description: String, priority: Priority) {
    match store.add(description, priority) {
        Ok(id) => println!("Added task {id}"),
        Err(e) => fail_on_save(e),
    }
}

/// Print tasks in a formatted table.
pub fn print_table<'a>(tasks: impl Iterator<Item = &'a Task>) {
    println!(
        "{:<5} {:<4} {:<8} {:<20} {}",
        "ID", "Done", "Pri", "Created", "Description"
    );
    let mut any = false;
    for t in tasks {
        any = true;
        let status = if t.completed { "[x]" } else { "[ ]" };
        println!(
            "{:<5} {:<4} {:<8} {:<20} {}",
            t.id,
            status,
            format_priority(t.priority),
            t.created_at,
            t.description
        );
    }
    if !any {
        println!("No tasks.");
    }
}

/// List tasks, hiding completed ones unless `all` is set.
pub fn cmd_list(store: &TaskStore, all: bool) {
    print_table(store.visible(all));
}

/// Mark a task completed.
pub fn cmd_complete(store: &mut TaskStore, id: u64) {
    match store.complete(id) {
        Ok(description) => println!("Completed: {description}"),
        Err(StoreError::NotFound { id }) => println!("Task with ID {id} not found."),
        Err(e) => fail_on_save(e),
    }
}

/// Delete a task.
pub fn cmd_delete(store: &mut TaskStore, id: u64) {
    match store.delete(id) {
        Ok(description) => println!("Deleted: {description}"),
        Err(StoreError::NotFound { id }) => println!("Task with ID {id} not found."),
        Err(e) => fail_on_save(e),
    }
}

/// Remove all completed tasks.
pub fn cmd_clear(store: &mut TaskStore) {
    match store.clear_completed() {
        Ok(0) => println!("No completed tasks to remove."),
        Ok(n) => println!("Removed {n} completed task(s)."),
        Err(e) => fail_on_save(e),
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
