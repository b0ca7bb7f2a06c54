//! I/O module
//!
//! Handles the CSV encoding of the ticket file and the plain-text table output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (header, row encoding, reader/writer setup, table output)

pub mod csv_format;

pub use csv_format::{
    ticket_reader, ticket_writer, write_header, write_ticket, write_ticket_table, write_tickets,
};
