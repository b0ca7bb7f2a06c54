//! Ticket CLI Library
//! # Overview
//!
//! This library provides a small support-ticket tracker that keeps its records
//! in a single CSV file, `tickets.csv`, in the working directory.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Ticket, TicketError)
//! - [`cli`] - CLI arguments parsing
//! - [`commands`] - Per-command configuration and handlers (add, list, delete)
//! - [`core`] - Ticket persistence:
//!   - [`core::traits`] - Repository abstraction
//!   - [`core::ticket_store`] - CSV file-backed store
//! - [`io`] - CSV encoding and table output
//! - [`logging`] - tracing subscriber setup
//!
//! # File Format
//!
//! The first row is always the header
//! `ID,Date,Title,Customer,Priority,Status,Description`; each following row is
//! one ticket in that column order. Rows with fewer than seven columns are
//! skipped when reading.
//!
//! # Operations
//!
//! - **Append**: creates the file with its header if needed, then adds one row
//! - **ReadAll**: returns every ticket in file order; fails if the file is missing
//! - **Delete**: removes every row with the given ID by rewriting the file

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::core::{TicketRepository, TicketStore};
pub use types::{Result, Ticket, TicketError, TicketId};
