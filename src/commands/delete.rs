//! `delete` command: remove tickets by ID

use crate::core::TicketRepository;
use crate::types::Result;
use std::io::Write;

/// Configuration for the `delete` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfig {
    /// ID of the ticket(s) to remove
    pub id: String,
}

/// Remove every ticket with the configured ID from `repo`
///
/// Prints a confirmation on success.
pub fn delete<R: TicketRepository>(
    repo: &R,
    config: &DeleteConfig,
    output: &mut dyn Write,
) -> Result<()> {
    repo.delete(&config.id)?;
    writeln!(output, "Ticket deleted successfully")?;
    Ok(())
}
