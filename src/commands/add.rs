//! `add` command: create a ticket and append it to the store

use crate::core::TicketRepository;
use crate::types::{Result, Ticket, TicketId};
use chrono::{DateTime, Local, TimeZone};
use std::io::Write;

/// Priority applied when none is given
pub const DEFAULT_PRIORITY: &str = "medium";

/// Status applied when none is given
pub const DEFAULT_STATUS: &str = "new";

/// Format of the default ticket date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for the `add` command
///
/// Optional values left as `None` (or empty) receive their defaults when the
/// ticket is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddConfig {
    pub title: String,
    pub customer: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

fn or_default(value: Option<String>, default: impl FnOnce() -> String) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(default)
}

/// Generate a ticket ID from a timestamp
///
/// Nanoseconds since the Unix epoch, in decimal. Timestamps outside the range
/// representable in nanoseconds fall back to microsecond precision.
pub fn generate_id<Tz: TimeZone>(now: &DateTime<Tz>) -> TicketId {
    match now.timestamp_nanos_opt() {
        Some(nanos) => nanos.to_string(),
        None => now.timestamp_micros().to_string(),
    }
}

impl AddConfig {
    /// Build the ticket this configuration describes, as of `now`
    ///
    /// The ID is derived from `now`; a missing date becomes the date of `now`,
    /// a missing priority `medium` and a missing status `new`.
    pub fn into_ticket<Tz>(self, now: &DateTime<Tz>) -> Ticket
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Ticket {
            id: generate_id(now),
            date: or_default(self.date, || now.format(DATE_FORMAT).to_string()),
            title: self.title,
            customer: self.customer.unwrap_or_default(),
            priority: or_default(self.priority, || DEFAULT_PRIORITY.to_string()),
            status: or_default(self.status, || DEFAULT_STATUS.to_string()),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Create a ticket from `config` and append it to `repo`
///
/// Prints the generated ID on success.
///
/// # Returns
///
/// The ID of the stored ticket.
pub fn add<R: TicketRepository>(
    repo: &R,
    config: AddConfig,
    output: &mut dyn Write,
) -> Result<TicketId> {
    let ticket = config.into_ticket(&Local::now());
    repo.append(&ticket)?;

    writeln!(output, "Ticket saved with ID: {}", ticket.id)?;
    Ok(ticket.id)
}
