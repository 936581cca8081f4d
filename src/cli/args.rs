//! Command-line arguments for the `pomo` binary

use clap::{Parser, Subcommand};

use crate::cli::{CliConfig, Command};
use crate::client::DateFilter;

#[derive(Debug, Parser)]
#[command(name = "pomo", version)]
#[command(about = "pomodoro timer and session manager for hackers", long_about = None)]
pub struct Cli {
    /// Only list sessions on or after this date (YYYY-Mon-DD)
    #[arg(long, global = true, value_name = "DATE")]
    pub start_date: Option<String>,

    /// Only list sessions on or before this date (YYYY-Mon-DD)
    #[arg(long, global = true, value_name = "DATE")]
    pub end_date: Option<String>,

    /// List session names instead of sessions
    #[arg(long, global = true)]
    pub nameonly: bool,

    /// Skip the desktop notification after recording
    #[arg(long, global = true)]
    pub no_notify: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List sessions, optionally only those with NAME
    List {
        name: Option<String>,
    },

    /// Run a countdown, then record the session
    Record {
        #[arg(value_parser = parse_name)]
        name: String,

        /// Session length in minutes
        #[arg(value_name = "DURATION (M)", value_parser = parse_minutes)]
        minutes: u32,
    },

    /// Delete a session by id
    Delete {
        id: i64,
    },
}

impl Cli {
    pub fn config(&self) -> CliConfig {
        CliConfig {
            filter: DateFilter::new(self.start_date.clone(), self.end_date.clone()),
            name_only: self.nameonly,
            notify: !self.no_notify,
        }
    }

    pub fn into_command(self) -> Option<Command> {
        self.command.map(|command| match command {
            Commands::List { name } => Command::List { name },
            Commands::Record { name, minutes } => Command::Record { name, minutes },
            Commands::Delete { id } => Command::Delete { id },
        })
    }
}

/// Names are stored trimmed and must not end up empty.
fn parse_name(arg: &str) -> Result<String, String> {
    let name = arg.trim();
    if name.is_empty() {
        return Err("Incorrect argument: session name cannot be empty".to_string());
    }
    Ok(name.to_string())
}

/// Minutes must fit the stored integer column.
fn parse_minutes(arg: &str) -> Result<u32, String> {
    arg.parse::<u32>()
        .ok()
        .filter(|minutes| i32::try_from(*minutes).is_ok())
        .ok_or_else(|| format!("Incorrect argument: {} is not a number", arg))
}
