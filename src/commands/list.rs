//! `list` command: print stored tickets as a table

use crate::core::TicketRepository;
use crate::io::csv_format::write_ticket_table;
use crate::types::{Result, Ticket};
use std::io::Write;

/// Configuration for the `list` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConfig {
    /// Only show tickets whose date equals this value exactly
    pub date: Option<String>,
}

impl ListConfig {
    /// Apply the configured filter, keeping the original order
    pub fn filter(&self, tickets: Vec<Ticket>) -> Vec<Ticket> {
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => {
                tickets.into_iter().filter(|t| t.date == date).collect()
            }
            _ => tickets,
        }
    }
}

/// Print the tickets in `repo` that match `config`
///
/// Prints `No tickets found` when nothing matches.
pub fn list<R: TicketRepository>(
    repo: &R,
    config: &ListConfig,
    output: &mut dyn Write,
) -> Result<()> {
    let tickets = config.filter(repo.read_all()?);

    if tickets.is_empty() {
        writeln!(output, "No tickets found")?;
        return Ok(());
    }

    write_ticket_table(&tickets, output)?;
    Ok(())
}
