//! Error types for the ticket tracker
//!
//! This module defines all error types that can occur while reading or writing
//! the ticket file. Errors are designed to be descriptive and user-friendly for
//! CLI output, since the command layer prints them verbatim.
//!
//! # Error Categories
//!
//! - **Environment Errors**: working directory resolution, create/open/permission failures
//! - **Not-Found Errors**: ticket file never initialised, ticket ID absent
//! - **CSV Parsing Errors**: structural decoding failures of the ticket file
//!
//! Malformed rows (too few columns) are not errors; the store drops them.

use thiserror::Error;

/// Main error type for the ticket tracker
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TicketError {
    /// The current working directory could not be determined
    #[error("Cannot determine working directory: {message}")]
    WorkingDirectory {
        /// Description of the underlying I/O error
        message: String,
    },

    /// The ticket file does not exist yet
    ///
    /// Distinct from an empty collection: a header-only file reads as empty.
    #[error("no ticket file found at {path} (no tickets yet)")]
    StoreNotFound {
        /// The path that was not found
        path: String,
    },

    /// No ticket carries the requested ID
    #[error("ticket with ID {id} not found")]
    TicketNotFound {
        /// The ID that was requested
        id: String,
    },

    /// I/O error occurred while reading or writing the ticket file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The ticket file could not be decoded as CSV
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketError>;

// Conversion from io::Error to TicketError
impl From<std::io::Error> for TicketError {
    fn from(error: std::io::Error) -> Self {
        TicketError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to TicketError
impl From<csv::Error> for TicketError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return TicketError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        TicketError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl TicketError {
    /// Create a WorkingDirectory error
    pub fn working_directory(error: &std::io::Error) -> Self {
        TicketError::WorkingDirectory {
            message: error.to_string(),
        }
    }

    /// Create a StoreNotFound error
    pub fn store_not_found(path: &std::path::Path) -> Self {
        TicketError::StoreNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a TicketNotFound error
    pub fn ticket_not_found(id: &str) -> Self {
        TicketError::TicketNotFound { id: id.to_string() }
    }

    /// Create a ParseError for a quoted field left open at end of file
    pub fn unterminated_quote(line: u64) -> Self {
        TicketError::ParseError {
            line: Some(line),
            message: "unterminated quoted field".to_string(),
        }
    }
}
