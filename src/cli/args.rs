use crate::commands::{AddConfig, Command, DeleteConfig, ListConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Record, list and delete support tickets stored in tickets.csv
#[derive(Parser, Debug)]
#[command(name = "ticket-cli")]
#[command(about = "Record, list and delete support tickets", long_about = None)]
pub struct CliArgs {
    /// Directory holding tickets.csv (defaults to the working directory)
    #[arg(long = "dir", value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CommandArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum CommandArgs {
    /// Add a new ticket
    Add(AddArgs),

    /// List tickets
    List(ListArgs),

    /// Delete a ticket by ID
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Ticket title
    #[arg(long)]
    pub title: String,

    /// Customer or reporter
    #[arg(long)]
    pub customer: Option<String>,

    /// Priority: low|medium|high (default: medium)
    #[arg(long)]
    pub priority: Option<String>,

    /// Status: new|open|closed (default: new)
    #[arg(long)]
    pub status: Option<String>,

    /// Longer description
    #[arg(long)]
    pub description: Option<String>,

    /// Ticket date YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter tickets by date YYYY-MM-DD
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ID of the ticket to delete
    #[arg(value_name = "TICKET_ID")]
    pub id: String,
}

impl From<AddArgs> for AddConfig {
    fn from(args: AddArgs) -> Self {
        AddConfig {
            title: args.title,
            customer: args.customer,
            priority: args.priority,
            status: args.status,
            description: args.description,
            date: args.date,
        }
    }
}

impl From<ListArgs> for ListConfig {
    fn from(args: ListArgs) -> Self {
        ListConfig { date: args.date }
    }
}

impl From<DeleteArgs> for DeleteConfig {
    fn from(args: DeleteArgs) -> Self {
        DeleteConfig { id: args.id }
    }
}

impl From<CommandArgs> for Command {
    fn from(args: CommandArgs) -> Self {
        match args {
            CommandArgs::Add(args) => Command::Add(args.into()),
            CommandArgs::List(args) => Command::List(args.into()),
            CommandArgs::Delete(args) => Command::Delete(args.into()),
        }
    }
}

impl CliArgs {
    /// Convert the parsed subcommand into its command configuration
    pub fn into_command(self) -> Command {
        self.command.into()
    }
}
