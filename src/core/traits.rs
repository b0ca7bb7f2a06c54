//! Core traits for ticket persistence
//!
//! This module defines the repository abstraction the command handlers are
//! written against, so handlers do not depend on where tickets live.

use crate::types::{Result, Ticket};

/// Trait for persisting and querying tickets
///
/// Every call is a complete, blocking unit of work: implementations acquire
/// and release their resources within the call.
pub trait TicketRepository {
    /// Append a ticket, initialising the collection first if needed
    ///
    /// No field validation and no ID uniqueness check are performed.
    fn append(&self, ticket: &Ticket) -> Result<()>;

    /// Read every ticket in insertion order
    ///
    /// Fails with a not-found error when the collection was never
    /// initialised; an initialised but empty collection yields an empty Vec.
    fn read_all(&self) -> Result<Vec<Ticket>>;

    /// Remove every ticket whose ID equals `id`
    ///
    /// Returns the number of removed tickets. Fails with a not-found error,
    /// leaving the collection untouched, when nothing matches.
    fn delete(&self, id: &str) -> Result<usize>;
}
