//! Command handlers
//!
//! Each command receives its own configuration struct, built from the parsed
//! command line, and a [`TicketRepository`] to work against. Handlers write
//! user-facing output to the writer they are given and return errors to the
//! caller; [`execute`] turns those errors into messages and exit codes.
//!
//! # Exit Codes
//!
//! - `list` and `delete` exit with 1 on failure
//! - `add` reports a failure but still exits with 0

pub mod add;
pub mod delete;
pub mod list;

pub use add::{add, AddConfig};
pub use delete::{delete, DeleteConfig};
pub use list::{list, ListConfig};

use crate::core::TicketRepository;
use std::io::Write;
use tracing::debug;

/// A fully configured command, ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddConfig),
    List(ListConfig),
    Delete(DeleteConfig),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::List(_) => "list",
            Command::Delete(_) => "delete",
        }
    }
}

/// Run a command and map its outcome to a process exit code
///
/// Regular output goes to `output`, error messages to `errors`.
///
/// # Returns
///
/// The exit code the process should terminate with.
pub fn execute<R: TicketRepository>(
    repo: &R,
    command: Command,
    output: &mut dyn Write,
    errors: &mut dyn Write,
) -> i32 {
    let name = command.name();
    debug!(command = name, "running command");

    let (result, context, exit_code) = match command {
        Command::Add(config) => (add(repo, config, output).map(|_| ()), "Error saving ticket", 0),
        Command::List(config) => (list(repo, &config, output), "Error reading tickets", 1),
        Command::Delete(config) => (delete(repo, &config, output), "Error deleting ticket", 1),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!(command = name, error = %e, "command failed");
            // Nothing sensible is left to do if stderr is gone
            let _ = writeln!(errors, "{}: {}", context, e);
            exit_code
        }
    }
}
