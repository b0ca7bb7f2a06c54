//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `ticket`: The ticket record and its column layout
//! - `error`: Error types for the ticket tracker

pub mod error;
pub mod ticket;

pub use error::{Result, TicketError};
pub use ticket::{Ticket, TicketId, COLUMNS, COLUMN_COUNT};
