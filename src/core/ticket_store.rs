//! File-backed ticket storage
//!
//! This module provides the TicketStore component that keeps every ticket in a
//! single CSV file, `tickets.csv`. The first row of the file is always the
//! fixed seven-column header; each following row is one ticket.
//!
//! # Malformed Rows
//!
//! Rows with fewer than seven columns are dropped on read. The read still
//! succeeds; the number of dropped rows is logged as a warning.
//!
//! # Rewrites
//!
//! Delete rewrites the whole file. The new content is written to a temporary
//! file in the same directory and renamed over the ticket file, so an
//! interrupted delete leaves either the old or the new file in place. When the
//! ticket file is a symlink, the file it points at is replaced.
//!
//! # Concurrency
//!
//! A single process is assumed. Nothing is locked; concurrent writers from
//! several processes may lose updates.

use crate::core::traits::TicketRepository;
use crate::io::csv_format::{
    find_unterminated_quote, ticket_reader, ticket_writer, write_header, write_ticket,
    write_tickets,
};
use crate::types::{Result, Ticket, TicketError};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Name of the ticket file inside its directory
pub const FILE_NAME: &str = "tickets.csv";

/// Ticket store backed by one CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketStore {
    /// Full path of the ticket file
    path: PathBuf,
}

impl TicketStore {
    /// Create a store for `tickets.csv` in the process's working directory
    ///
    /// # Returns
    ///
    /// * `Ok(TicketStore)` - Store pointing at `<cwd>/tickets.csv`
    /// * `Err(TicketError::WorkingDirectory)` - If the working directory cannot be determined
    pub fn in_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| TicketError::working_directory(&e))?;
        Ok(Self::in_dir(cwd))
    }

    /// Create a store for `tickets.csv` inside `dir`
    ///
    /// The directory is not touched until the first operation.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        TicketStore {
            path: dir.as_ref().join(FILE_NAME),
        }
    }

    /// Path of the ticket file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the ticket file exists
    pub fn exists(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Create the ticket file with its header row if it does not exist yet
    ///
    /// An existing file is left as is, whatever its content.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.exists()? {
            return Ok(());
        }

        debug!(path = %self.path.display(), "creating ticket file");
        let file = File::create(&self.path)?;
        let mut writer = ticket_writer(file);
        write_header(&mut writer)?;
        writer.flush()?;

        Ok(())
    }

    fn rewrite(&self, tickets: &[Ticket]) -> Result<()> {
        // Replace the file a symlink points at, not the link itself
        let target = fs::canonicalize(&self.path)?;
        let dir = target.parent().unwrap_or_else(|| Path::new("."));

        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = ticket_writer(temp.as_file_mut());
            write_tickets(&mut writer, tickets)?;
        }
        temp.as_file().sync_all()?;

        // Keep the ticket file's mode rather than the temp file's 0600
        fs::set_permissions(temp.path(), fs::metadata(&target)?.permissions())?;

        temp.persist(&target).map_err(|e| TicketError::from(e.error))?;
        debug!(path = %target.display(), count = tickets.len(), "rewrote ticket file");

        Ok(())
    }
}

impl TicketRepository for TicketStore {
    fn append(&self, ticket: &Ticket) -> Result<()> {
        self.ensure_initialized()?;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = ticket_writer(file);
        write_ticket(&mut writer, ticket)?;
        writer.flush()?;

        debug!(path = %self.path.display(), id = %ticket.id, "appended ticket");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Ticket>> {
        if !self.exists()? {
            return Err(TicketError::store_not_found(&self.path));
        }

        let data = fs::read(&self.path)?;
        if let Some(line) = find_unterminated_quote(&data) {
            return Err(TicketError::unterminated_quote(line));
        }
        let mut reader = ticket_reader(data.as_slice());

        let mut tickets = Vec::new();
        let mut dropped = 0usize;

        // Row 0 is the header
        for result in reader.records().skip(1) {
            let record = result?;
            match Ticket::from_record(&record) {
                Some(ticket) => tickets.push(ticket?),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(
                path = %self.path.display(),
                dropped,
                "skipped malformed rows with fewer than 7 columns"
            );
        }
        debug!(path = %self.path.display(), count = tickets.len(), "read tickets");

        Ok(tickets)
    }

    fn delete(&self, id: &str) -> Result<usize> {
        let tickets = self.read_all()?;
        let total = tickets.len();

        let (removed, kept): (Vec<Ticket>, Vec<Ticket>) =
            tickets.into_iter().partition(|ticket| ticket.has_id(id));

        if removed.is_empty() {
            return Err(TicketError::ticket_not_found(id));
        }

        self.rewrite(&kept)?;
        debug!(id, removed = removed.len(), remaining = total - removed.len(), "deleted tickets");

        Ok(removed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    const HEADER: &str = "ID,Date,Title,Customer,Priority,Status,Description\n";

    fn ticket(id: &str, date: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            date: date.to_string(),
            title: format!("Ticket {}", id),
            customer: "ACME".to_string(),
            priority: "medium".to_string(),
            status: "new".to_string(),
            description: String::new(),
        }
    }

    fn store_with(content: &str) -> (TempDir, TicketStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = TicketStore::in_dir(dir.path());
        fs::write(store.path(), content).expect("Failed to write ticket file");
        (dir, store)
    }

    #[test]
    fn test_in_dir_joins_file_name() {
        let store = TicketStore::in_dir("/var/data");
        assert_eq!(store.path(), Path::new("/var/data/tickets.csv"));
    }

    #[test]
    fn test_in_current_dir_uses_working_directory() {
        let store = TicketStore::in_current_dir().unwrap();
        let expected = std::env::current_dir().unwrap().join(FILE_NAME);
        assert_eq!(store.path(), expected.as_path());
    }

    #[test]
    fn test_ensure_initialized_writes_header() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());

        assert!(!store.exists().unwrap());
        store.ensure_initialized().unwrap();

        assert!(store.exists().unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), HEADER);
    }

    #[test]
    fn test_ensure_initialized_leaves_existing_file() {
        let content = format!("{}1,2025-01-01,T,C,low,new,D\n", HEADER);
        let (_dir, store) = store_with(&content);

        store.ensure_initialized().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), content);
    }

    #[test]
    fn test_append_creates_file_with_header() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());

        store.append(&ticket("1", "2025-01-01")).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            format!("{}1,2025-01-01,Ticket 1,ACME,medium,new,\n", HEADER)
        );
    }

    #[test]
    fn test_append_fails_when_directory_missing() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path().join("missing"));

        let result = store.append(&ticket("1", "2025-01-01"));
        assert!(matches!(result, Err(TicketError::IoError { .. })));
    }

    #[test]
    fn test_read_all_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());

        let result = store.read_all();
        assert_eq!(result, Err(TicketError::store_not_found(store.path())));
    }

    #[rstest]
    #[case::header_only(HEADER)]
    #[case::header_without_newline("ID,Date,Title,Customer,Priority,Status,Description")]
    #[case::empty_file("")]
    fn test_read_all_without_rows_is_empty(#[case] content: &str) {
        let (_dir, store) = store_with(content);
        assert_eq!(store.read_all().unwrap(), Vec::<Ticket>::new());
    }

    #[test]
    fn test_read_all_drops_short_rows() {
        let content = format!(
            "{}1,2025-01-01,Ticket 1,ACME,medium,new,\n2,2025-01-01,Short,ACME\n",
            HEADER
        );
        let (_dir, store) = store_with(&content);

        let tickets = store.read_all().unwrap();
        assert_eq!(tickets, vec![ticket("1", "2025-01-01")]);
    }

    #[test]
    fn test_read_all_preserves_file_order() {
        let content = format!(
            "{}3,2025-01-03,Ticket 3,ACME,medium,new,\n1,2025-01-01,Ticket 1,ACME,medium,new,\n",
            HEADER
        );
        let (_dir, store) = store_with(&content);

        let ids: Vec<String> = store.read_all().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_read_all_surfaces_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());
        let mut content = HEADER.as_bytes().to_vec();
        content.extend_from_slice(b"1,2025-01-01,\xff\xfe,ACME,medium,new,\n");
        fs::write(store.path(), content).unwrap();

        let result = store.read_all();
        assert!(matches!(result, Err(TicketError::ParseError { .. })));
    }

    fn broken_quote_content() -> String {
        format!(
            "{}1,2025-01-01,Ticket 1,ACME,medium,new,\n2,2025-01-01,\"Broken,ACME,low,new,D\n3,2025-01-01,Ticket 3,ACME,medium,new,\n",
            HEADER
        )
    }

    #[test]
    fn test_read_all_rejects_unterminated_quote() {
        let (_dir, store) = store_with(&broken_quote_content());

        let result = store.read_all();
        assert_eq!(result, Err(TicketError::unterminated_quote(3)));
    }

    #[test]
    fn test_delete_with_unterminated_quote_keeps_file() {
        let content = broken_quote_content();
        let (_dir, store) = store_with(&content);

        let result = store.delete("1");
        assert!(matches!(result, Err(TicketError::ParseError { .. })));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), content);
    }

    #[test]
    fn test_delete_removes_every_match() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());
        store.append(&ticket("1", "2025-01-01")).unwrap();
        store.append(&ticket("2", "2025-01-02")).unwrap();
        store.append(&ticket("2", "2025-01-03")).unwrap();

        assert_eq!(store.delete("2").unwrap(), 2);
        assert_eq!(store.read_all().unwrap(), vec![ticket("1", "2025-01-01")]);
    }

    #[test]
    fn test_delete_last_ticket_leaves_header() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());
        store.append(&ticket("1", "2025-01-01")).unwrap();

        store.delete("1").unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), HEADER);
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_leaves_file_untouched() {
        let content = format!("{}1,2025-01-01,Ticket 1,ACME,medium,new,\n", HEADER);
        let (_dir, store) = store_with(&content);

        let result = store.delete("nonexistent");
        assert_eq!(result, Err(TicketError::ticket_not_found("nonexistent")));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), content);
    }

    #[test]
    fn test_delete_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());

        let result = store.delete("1");
        assert!(matches!(result, Err(TicketError::StoreNotFound { .. })));
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn test_delete_drops_malformed_rows_on_rewrite() {
        let content = format!(
            "{}1,2025-01-01,Ticket 1,ACME,medium,new,\nbroken,row\n2,2025-01-02,Ticket 2,ACME,medium,new,\n",
            HEADER
        );
        let (_dir, store) = store_with(&content);

        store.delete("2").unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            format!("{}1,2025-01-01,Ticket 1,ACME,medium,new,\n", HEADER)
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());
        store.append(&ticket("1", "2025-01-01")).unwrap();
        store.append(&ticket("2", "2025-01-01")).unwrap();
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

        store.delete("1").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_writes_through_symlink() {
        let dir = TempDir::new().unwrap();
        let shared = dir.path().join("shared.csv");
        fs::write(
            &shared,
            format!(
                "{}1,2025-01-01,Ticket 1,ACME,medium,new,\n2,2025-01-01,Ticket 2,ACME,medium,new,\n",
                HEADER
            ),
        )
        .unwrap();
        let store = TicketStore::in_dir(dir.path());
        std::os::unix::fs::symlink(&shared, store.path()).unwrap();

        store.delete("1").unwrap();

        let link = fs::symlink_metadata(store.path()).unwrap();
        assert!(link.file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(&shared).unwrap(),
            format!("{}2,2025-01-01,Ticket 2,ACME,medium,new,\n", HEADER)
        );
    }

    #[test]
    fn test_delete_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::in_dir(dir.path());
        store.append(&ticket("1", "2025-01-01")).unwrap();
        store.append(&ticket("2", "2025-01-01")).unwrap();

        store.delete("1").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(FILE_NAME)]);
    }
}
