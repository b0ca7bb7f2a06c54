//! Ticket-related types for the ticket tracker
//!
//! This module defines the single persisted entity, its column layout in the
//! ticket file, and the positional mapping between CSV rows and tickets.

use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Ticket identifier
///
/// Generated from a nanosecond timestamp by the command layer. Uniqueness is
/// not enforced by the store.
pub type TicketId = String;

/// Number of columns in every ticket row (and in the header row)
pub const COLUMN_COUNT: usize = 7;

/// Column names in persisted order
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "ID",
    "Date",
    "Title",
    "Customer",
    "Priority",
    "Status",
    "Description",
];

/// A single support-ticket record
///
/// Field order matches the column order of the ticket file; `Serialize`
/// relies on it when rows are written without headers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ticket {
    /// Timestamp-derived identifier
    pub id: TicketId,

    /// Calendar date, conventionally `YYYY-MM-DD`
    pub date: String,

    /// Short summary, required by the command layer
    pub title: String,

    /// Customer or reporter, empty when not given
    pub customer: String,

    /// Conventionally `low`, `medium` or `high`; not validated
    pub priority: String,

    /// Conventionally `new`, `open` or `closed`; not validated
    pub status: String,

    /// Longer free-form description, empty when not given
    pub description: String,
}

impl Ticket {
    /// Map a raw CSV row positionally into a ticket
    ///
    /// Rows with fewer than [`COLUMN_COUNT`] fields are malformed and yield
    /// `None`. Any fields past the seventh are ignored.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Ticket))` - Well-formed row
    /// * `Some(Err(csv::Error))` - Row could not be deserialized
    /// * `None` - Row is too short and should be dropped
    pub fn from_record(record: &StringRecord) -> Option<Result<Self, csv::Error>> {
        if record.len() < COLUMN_COUNT {
            return None;
        }

        let mut columns: StringRecord = record.iter().take(COLUMN_COUNT).collect();
        columns.set_position(record.position().cloned());

        Some(columns.deserialize(None))
    }

    /// Whether this ticket carries the given identifier
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }
}
