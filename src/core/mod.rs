//! Core storage module
//!
//! This module contains the ticket persistence components:
//! - `traits` - Repository abstraction used by the command handlers
//! - `ticket_store` - CSV file-backed implementation

pub mod ticket_store;
pub mod traits;

pub use ticket_store::{TicketStore, FILE_NAME};
pub use traits::TicketRepository;
