//! CSV format handling for the ticket file and table output
//!
//! This module centralizes all format concerns, providing:
//! - Reader/writer construction with the settings the ticket file needs
//! - Header and ticket row serialization
//! - Fixed-width table rendering for the `list` command
//!
//! Functions operate on generic readers and writers, so they can be tested
//! against in-memory buffers.

use crate::types::{Ticket, COLUMNS};
use csv::{Reader, ReaderBuilder, Writer, WriterBuilder};
use std::io::{Read, Write};

/// Build a CSV reader for the ticket file
///
/// The header row is returned as an ordinary record (the store skips row 0
/// itself) and rows may have any number of fields, so short rows can be
/// dropped rather than aborting the read. Fields are not trimmed.
pub fn ticket_reader<R: Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

/// Build a CSV writer for the ticket file
///
/// Headers are written explicitly with [`write_header`], never inferred from
/// the `Ticket` field names.
pub fn ticket_writer<W: Write>(output: W) -> Writer<W> {
    WriterBuilder::new().has_headers(false).from_writer(output)
}

/// Write the fixed seven-column header row
pub fn write_header<W: Write>(writer: &mut Writer<W>) -> Result<(), csv::Error> {
    writer.write_record(COLUMNS)
}

/// Write one ticket as a CSV row in column order
///
/// Fields containing the delimiter, a quote, or a newline are quoted, with
/// embedded quotes doubled.
pub fn write_ticket<W: Write>(writer: &mut Writer<W>, ticket: &Ticket) -> Result<(), csv::Error> {
    writer.serialize(ticket)
}

/// Write a header followed by every ticket, then flush
///
/// Used for full-file rewrites.
pub fn write_tickets<W: Write>(writer: &mut Writer<W>, tickets: &[Ticket]) -> Result<(), csv::Error> {
    write_header(writer)?;
    for ticket in tickets {
        write_ticket(writer, ticket)?;
    }
    writer.flush()?;
    Ok(())
}

/// Find a quoted field that is still open at end of input
///
/// The `csv` reader accepts such input and folds everything after the opening
/// quote into a single field, so it has to be checked up front. A quote only
/// opens a field when it is the first byte of that field; `""` inside a quoted
/// field is an escaped quote.
///
/// # Returns
///
/// * `Some(line)` - 1-based line on which the unterminated field starts
/// * `None` - Every quoted field is closed
pub fn find_unterminated_quote(data: &[u8]) -> Option<u64> {
    let mut line = 1u64;
    let mut opened_at = None;
    let mut field_start = true;
    let mut bytes = data.iter().peekable();

    while let Some(&byte) = bytes.next() {
        if byte == b'\n' {
            line += 1;
        }

        if opened_at.is_some() {
            if byte == b'"' {
                if bytes.peek() == Some(&&b'"') {
                    bytes.next();
                } else {
                    opened_at = None;
                    field_start = false;
                }
            }
            continue;
        }

        match byte {
            b'"' if field_start => opened_at = Some(line),
            b',' | b'\n' | b'\r' => field_start = true,
            _ => field_start = false,
        }
    }

    opened_at
}

fn table_row(id: &str, date: &str, title: &str, customer: &str, priority: &str) -> String {
    format!("{:<20} {:<10} {:<30} {:<10} {:<8}", id, date, title, customer, priority)
}

/// Render tickets as a fixed-width table
///
/// Columns: ID (20), Date (10), Title (30), Customer (10), Priority (8),
/// left-aligned. Values longer than their column are not truncated.
///
/// # Arguments
///
/// * `tickets` - Tickets to render, in display order
/// * `output` - Destination for the table text
pub fn write_ticket_table(tickets: &[Ticket], output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        output,
        "{}",
        table_row("ID", "Date", "Title", "Customer", "Priority")
    )?;

    for ticket in tickets {
        writeln!(
            output,
            "{}",
            table_row(
                &ticket.id,
                &ticket.date,
                &ticket.title,
                &ticket.customer,
                &ticket.priority,
            )
        )?;
    }

    Ok(())
}
