//! Interactive numbered menu over the task store.
//!
//! Line-based prompts on stdin/stdout. Input validation (menu choice,
//! numeric ids, priority names) lives here, not in the store.

use std::io::{self, Write};

use crate::cmd::{cmd_add, cmd_clear, cmd_complete, cmd_delete, print_table};
use crate::store::TaskStore;
use crate::task::Priority;

fn display_menu() {
    println!("\nTo-Do List Application");
    println!("1. Add Task");
    println!("2. View Tasks");
    println!("3. Complete Task");
    println!("4. Delete Task");
    println!("5. Clear Completed Tasks");
    println!("6. Exit");
}

/// Print `text` and read one trimmed line. Returns None on EOF or a
/// broken pipe, which ends the menu loop.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Re-prompt until the user gives a valid priority.
fn prompt_priority() -> Option<Priority> {
    loop {
        let line = prompt("Enter priority (high/medium/low): ")?;
        match Priority::parse(&line) {
            Some(p) => return Some(p),
            None => println!("Invalid priority. Please enter high, medium, or low."),
        }
    }
}

/// Run the menu loop until Exit or EOF.
pub fn run_menu(store: &mut TaskStore) {
    loop {
        display_menu();
        let Some(choice) = prompt("Enter your choice (1-6): ") else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let Some(description) = prompt("Enter task: ") else {
                    break;
                };
                let Some(priority) = prompt_priority() else {
                    break;
                };
                cmd_add(store, description, priority);
            }
            "2" => {
                let Some(answer) = prompt("Show completed tasks? (y/n): ") else {
                    break;
                };
                let show_completed = answer.eq_ignore_ascii_case("y");
                println!("\nTo-Do List:");
                print_table(store.visible(show_completed));
            }
            "3" => {
                let Some(line) = prompt("Enter task ID to complete: ") else {
                    break;
                };
                match line.parse::<u64>() {
                    Ok(id) => cmd_complete(store, id),
                    Err(_) => println!("Please enter a valid number."),
                }
            }
            "4" => {
                let Some(line) = prompt("Enter task ID to delete: ") else {
                    break;
                };
                match line.parse::<u64>() {
                    Ok(id) => cmd_delete(store, id),
                    Err(_) => println!("Please enter a valid number."),
                }
            }
            "5" => cmd_clear(store),
            "6" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 6."),
        }
    }
}
