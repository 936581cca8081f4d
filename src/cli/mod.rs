//! Command handlers for the `pomo` binary
//!
//! Handlers write their normal output to any `io::Write`, so the binary
//! hands them stdout and tests hand them a buffer.

pub mod args;
pub mod table;

use std::io::{self, Write};

use crate::client::{ClientError, DateFilter, PomoClient};
use crate::notify::{completion_message, Notifier};
use crate::timer::{self, Pacer};

pub const CONNECTION_FAILED_MESSAGE: &str =
    "Error: pomo failed to connect to pomo-server. Maybe it's not running?";
pub const SERVER_FAILED_MESSAGE: &str = "Unable to perform command. Some issue occured.";

/// Global flags, fixed once parsed
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub filter: DateFilter,
    pub name_only: bool,
    pub notify: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { name: Option<String> },
    Record { name: String, minutes: u32 },
    Delete { id: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Text shown to the user when `command` failed with this error.
    pub fn user_message(&self, command: &Command) -> String {
        let err = match self {
            CliError::Client(err) => err,
            CliError::Output(e) => return format!("Error: {}", e),
        };

        match (err, command) {
            (ClientError::Connection(_), _) => CONNECTION_FAILED_MESSAGE.to_string(),
            (ClientError::NotFound(_), Command::List { name: Some(name) }) => {
                format!("Error: There are no sessions with name: {}", name)
            }
            (ClientError::NotFound(_), Command::Delete { id }) => {
                format!("Error: There is no session with id: {}", id)
            }
            (ClientError::Server { .. }, _) => SERVER_FAILED_MESSAGE.to_string(),
            (other, _) => format!("Error: {}", other),
        }
    }
}

/// Everything a command needs besides its arguments
pub struct Context<'a, W: Write, P: Pacer> {
    pub config: &'a CliConfig,
    pub client: &'a PomoClient,
    pub notifier: &'a dyn Notifier,
    pub pacer: P,
    pub out: W,
}

impl<'a, W: Write, P: Pacer> Context<'a, W, P> {
    pub fn run(&mut self, command: &Command) -> Result<(), CliError> {
        match command {
            Command::List { name } => self.list(name.as_deref()),
            Command::Record { name, minutes } => self.record(name, *minutes),
            Command::Delete { id } => self.delete(*id),
        }
    }

    fn list(&mut self, name: Option<&str>) -> Result<(), CliError> {
        if self.config.name_only {
            for name in self.client.list_names()? {
                writeln!(self.out, "{}", name)?;
            }
            return Ok(());
        }

        let data = self.client.list_sessions(name, &self.config.filter)?;
        writeln!(self.out, "{}", table::render_sessions(&data))?;
        Ok(())
    }

    /// Count down, persist, then notify. A notification failure is reported
    /// after the session is already stored.
    fn record(&mut self, name: &str, minutes: u32) -> Result<(), CliError> {
        let duration = i32::try_from(minutes).map_err(|_| {
            ClientError::Validation(format!("Incorrect argument: {} is not a number", minutes))
        })?;

        timer::run_countdown(minutes, &mut self.out, &mut self.pacer)?;

        let session = self.client.record(name, duration)?;
        tracing::info!(id = session.id, name = %session.name, "session recorded");

        if self.config.notify {
            self.notifier
                .notify("pomo", &completion_message(name))
                .map_err(|e| {
                    tracing::error!(name, "session recorded but notification failed: {:#}", e);
                    ClientError::Notification(format!("{:#}", e))
                })?;
        }
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<(), CliError> {
        self.client.delete(id)?;
        writeln!(self.out, "Deleted session {}", id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::notify::NoopNotifier;

    struct NoPacer;

    impl Pacer for NoPacer {
        fn wait(&mut self) {}
    }

    fn unreachable_client() -> PomoClient {
        PomoClient::new(&ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_not_found_message_names_the_session() {
        let err = CliError::Client(ClientError::NotFound("no sessions with name: x".into()));
        let command = Command::List {
            name: Some("deep-work".into()),
        };
        assert_eq!(
            err.user_message(&command),
            "Error: There are no sessions with name: deep-work"
        );
    }

    #[test]
    fn test_server_error_message_is_generic() {
        let err = CliError::Client(ClientError::Server {
            status: 500,
            message: "Internal server error".into(),
        });
        assert_eq!(
            err.user_message(&Command::List { name: None }),
            SERVER_FAILED_MESSAGE
        );
    }

    #[test]
    fn test_delete_not_found_message() {
        let err = CliError::Client(ClientError::NotFound("no session with id: 7".into()));
        assert_eq!(
            err.user_message(&Command::Delete { id: 7 }),
            "Error: There is no session with id: 7"
        );
    }

    #[test]
    fn test_list_against_unreachable_server() {
        let client = unreachable_client();
        let config = CliConfig::default();
        let mut ctx = Context {
            config: &config,
            client: &client,
            notifier: &NoopNotifier,
            pacer: NoPacer,
            out: Vec::new(),
        };

        let command = Command::List { name: None };
        let err = ctx.run(&command).unwrap_err();
        assert_eq!(err.user_message(&command), CONNECTION_FAILED_MESSAGE);
        assert!(ctx.out.is_empty());
    }
}
