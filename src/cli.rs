use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed to-do list CLI.
/// Storage defaults to ~/.todo/todos.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "todo", version, about = "Personal to-do list CLI")]
pub struct Cli {
    /// Path to the JSON store file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Omitting the subcommand opens the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}
