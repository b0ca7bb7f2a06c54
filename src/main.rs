//! Ticket CLI
//!
//! Command-line interface for recording support tickets in `tickets.csv`.
//!
//! # Usage
//!
//! ```bash
//! ticket-cli add --title "Printer jam" --customer ACME --priority high
//! ticket-cli list
//! ticket-cli list --date 2025-01-01
//! ticket-cli delete 1736000000000000000
//! ticket-cli --dir /srv/support list
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success, or a failed `add` (the error is still printed)
//! - 1: `list` or `delete` failed, or the ticket directory could not be resolved
//! - 2: Invalid arguments (reported by clap)

use std::process;
use ticket_cli::cli;
use ticket_cli::commands;
use ticket_cli::logging;
use ticket_cli::TicketStore;

fn main() {
    let args = cli::parse_args();
    logging::init(args.verbose);

    let store = match &args.dir {
        Some(dir) => TicketStore::in_dir(dir),
        None => match TicketStore::in_current_dir() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
    };

    let command = args.into_command();
    let code = commands::execute(
        &store,
        command,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    process::exit(code);
}
