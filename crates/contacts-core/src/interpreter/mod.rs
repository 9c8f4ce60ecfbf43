//! Command interpreter
//!
//! The Interpreter drives a read-eval-print session against a ContactStore:
//! - Reads one line at a time from an async reader, decoding bytes lossily
//! - Classifies it (see [`command::parse`])
//! - Dispatches to the matching store/record operation
//! - Writes the reply, translating faults to their fixed messages
//!
//! ## Session States
//!
//! ```text
//!   ┌─────────┐  any other line   ┌─────────┐
//!   │ RUNNING │ ────────────────▶ │ RUNNING │
//!   └─────────┘                   └─────────┘
//!        │
//!        │ good bye / close / exit / end of input
//!        ▼
//!   ┌────────────┐
//!   │ TERMINATED │
//!   └────────────┘
//! ```
//!
//! Faults (`NotFound`, `InvalidInput`, `InvalidCommand`) never end the
//! session. Only I/O errors on the streams do.

pub mod command;

pub use command::{Command, Input, Usage, parse};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::SplitStream;
use tracing::{debug, info, warn};

use crate::config::InterpreterConfig;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::traits::{Clock, ContactStore};

/// Reply for input outside the command vocabulary
pub const INVALID_COMMAND: &str = "Invalid command. Please try again.";

/// Reply for `birthday` on a contact without one
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set for this contact.";

/// Interpreter session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Result of handling one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to print
    pub message: String,
    /// State after this line
    pub state: SessionState,
}

impl Reply {
    fn running(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            state: SessionState::Running,
        }
    }
}

/// Address book command interpreter
///
/// Owns the store for the whole session; nothing else touches it.
pub struct Interpreter {
    store: Box<dyn ContactStore>,
    clock: Box<dyn Clock>,
    config: InterpreterConfig,
}

impl Interpreter {
    /// Create a new interpreter
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the configuration is invalid.
    pub fn new(
        store: Box<dyn ContactStore>,
        clock: Box<dyn Clock>,
        config: InterpreterConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            clock,
            config,
        })
    }

    /// The underlying store
    pub fn store(&self) -> &dyn ContactStore {
        self.store.as_ref()
    }

    /// Run a session until a termination keyword or end of input
    ///
    /// Prints the greeting, then a prompt before every read.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = SplitStream::new(input.split(b'\n'));

        info!("Session started");
        write_line(output, &self.config.greeting).await?;

        loop {
            output.write_all(self.config.prompt.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next().await else {
                info!("Input closed, ending session");
                break;
            };

            let reply = self.handle_line(&decode_line(&line?)).await?;
            write_line(output, &reply.message).await?;
            if reply.state == SessionState::Terminated {
                info!("Session terminated by user");
                break;
            }
        }

        output.flush().await?;
        Ok(())
    }

    /// Handle a single input line
    ///
    /// Faults are translated to their replies here; only I/O errors escape.
    pub async fn handle_line(&self, line: &str) -> Result<Reply> {
        let command = match parse(line) {
            Ok(Input::Unknown) => return Ok(Reply::running(INVALID_COMMAND)),
            Ok(Input::Usage(usage)) => return Ok(Reply::running(usage.to_string())),
            Ok(Input::Command(command)) => command,
            Err(err) => return fault_reply(err),
        };

        let terminates = command.is_exit();
        match self.execute(command).await {
            Ok(message) => Ok(Reply {
                message,
                state: if terminates {
                    SessionState::Terminated
                } else {
                    SessionState::Running
                },
            }),
            Err(err) => fault_reply(err),
        }
    }

    /// Execute a parsed command and return its reply text
    pub async fn execute(&self, command: Command) -> Result<String> {
        debug!("Dispatching {:?}", command);

        match command {
            Command::Hello => Ok(self.config.greeting.clone()),
            Command::Add {
                name,
                phone,
                birthday,
            } => self.add_contact(name, phone, birthday).await,
            Command::Change { name, phone } => self.change_phone(&name, phone).await,
            Command::Phone { name } => {
                let record = self.require(&name).await?;
                Ok(format!(
                    "Phone number for contact '{}': {}",
                    name,
                    record.phones().join(", ")
                ))
            }
            Command::Remove { name } => {
                self.store.remove_record(&name).await?;
                Ok(format!("Removed contact: {}", name))
            }
            Command::ShowAll => self.store.render().await,
            Command::Birthday { name } => {
                let record = self.require(&name).await?;
                Ok(match record.days_to_birthday(self.clock.today()) {
                    Some(days) => format!("{} days to {}'s birthday", days, name),
                    None => BIRTHDAY_NOT_SET.to_string(),
                })
            }
            Command::Exit => Ok(self.config.farewell.clone()),
        }
    }

    async fn add_contact(
        &self,
        name: String,
        phone: Option<String>,
        birthday: Option<String>,
    ) -> Result<String> {
        if self.store.contains(&name).await? {
            return Ok(format!("Contact '{}' already exists.", name));
        }

        let mut record = Record::new(name.as_str())?;
        if let Some(phone) = &phone {
            record.add_phone(phone.as_str());
        }
        if let Some(birthday) = &birthday {
            record.set_birthday(birthday)?;
        }
        self.store.add_record(record).await?;

        Ok(format!(
            "Added contact: {}, {}, {}",
            name,
            phone.as_deref().unwrap_or("None"),
            birthday.as_deref().unwrap_or("None")
        ))
    }

    async fn change_phone(&self, name: &str, new_phone: String) -> Result<String> {
        let mut record = self.require(name).await?;
        let Some(old_phone) = record.phones().first().cloned() else {
            return Ok(format!(
                "No phone number found for contact: {}. Cannot change.",
                name
            ));
        };

        let outcome = record.edit_phone(&old_phone, new_phone);
        self.store.add_record(record).await?;
        Ok(outcome.to_string())
    }

    async fn require(&self, name: &str) -> Result<Record> {
        self.store
            .get_record(name)
            .await?
            .ok_or_else(|| Error::not_found(name))
    }
}

fn fault_reply(err: Error) -> Result<Reply> {
    match err.reply() {
        Some(message) => {
            warn!("Command failed: {}", err);
            Ok(Reply::running(message))
        }
        None => Err(err),
    }
}

/// Decode one raw input line, replacing invalid UTF-8 and dropping a
/// trailing carriage return
fn decode_line(bytes: &[u8]) -> String {
    let line = String::from_utf8_lossy(bytes);
    line.strip_suffix('\r').unwrap_or(&*line).to_string()
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryContactStore;
    use crate::traits::FixedClock;
    use chrono::NaiveDate;

    fn interpreter() -> Interpreter {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        Interpreter::new(
            Box::new(MemoryContactStore::new()),
            Box::new(FixedClock(today)),
            InterpreterConfig::default(),
        )
        .unwrap()
    }

    async fn reply(interpreter: &Interpreter, line: &str) -> String {
        interpreter
            .handle_line(line)
            .await
            .unwrap()
            .message
    }

    #[tokio::test]
    async fn add_reports_absent_fields_as_none() {
        let interpreter = interpreter();
        assert_eq!(
            reply(&interpreter, "add bob").await,
            "Added contact: bob, None, None"
        );
        assert_eq!(
            reply(&interpreter, "add carol 555").await,
            "Added contact: carol, 555, None"
        );
    }

    #[tokio::test]
    async fn add_existing_contact_is_an_outcome() {
        let interpreter = interpreter();
        reply(&interpreter, "add bob 1").await;
        assert_eq!(
            reply(&interpreter, "add bob 2").await,
            "Contact 'bob' already exists."
        );

        let bob = interpreter.store().get_record("bob").await.unwrap().unwrap();
        assert_eq!(bob.phones(), ["1"]);
    }

    #[tokio::test]
    async fn add_with_bad_birthday_stores_nothing() {
        let interpreter = interpreter();
        assert_eq!(
            reply(&interpreter, "add bob 1 2024-13-40").await,
            "Invalid input."
        );
        assert!(!interpreter.store().contains("bob").await.unwrap());
    }

    #[tokio::test]
    async fn change_without_phone_is_refused() {
        let interpreter = interpreter();
        reply(&interpreter, "add bob").await;
        assert_eq!(
            reply(&interpreter, "change bob 999").await,
            "No phone number found for contact: bob. Cannot change."
        );

        let bob = interpreter.store().get_record("bob").await.unwrap().unwrap();
        assert!(bob.phones().is_empty());
    }

    #[tokio::test]
    async fn missing_contacts_are_not_found_faults() {
        let interpreter = interpreter();
        for line in ["change ghost 1", "phone ghost", "remove ghost", "birthday ghost"] {
            let reply = interpreter.handle_line(line).await.unwrap();
            assert_eq!(reply.message, "Contact not found.");
            assert_eq!(reply.state, SessionState::Running);
        }
    }

    #[tokio::test]
    async fn birthday_countdown_uses_clock() {
        let interpreter = interpreter();
        reply(&interpreter, "add bob 1 1990-10-18").await;
        reply(&interpreter, "add carol 2 1985-10-17").await;
        reply(&interpreter, "add dave").await;

        assert_eq!(
            reply(&interpreter, "birthday bob").await,
            "0 days to bob's birthday"
        );
        assert_eq!(
            reply(&interpreter, "birthday carol").await,
            "364 days to carol's birthday"
        );
        assert_eq!(reply(&interpreter, "birthday dave").await, BIRTHDAY_NOT_SET);
    }

    #[tokio::test]
    async fn exit_keywords_terminate() {
        let interpreter = interpreter();
        for line in ["exit", "close", "good bye", "GOOD BYE"] {
            let reply = interpreter.handle_line(line).await.unwrap();
            assert_eq!(reply.message, "Good bye!");
            assert_eq!(reply.state, SessionState::Terminated);
        }
    }

    #[tokio::test]
    async fn blank_lines_are_unknown_commands() {
        let interpreter = interpreter();
        for line in ["", "   "] {
            let reply = interpreter.handle_line(line).await.unwrap();
            assert_eq!(reply, Reply::running(INVALID_COMMAND));
        }
    }

    #[tokio::test]
    async fn surplus_add_arguments_are_invalid_command() {
        let interpreter = interpreter();
        assert_eq!(
            reply(&interpreter, "add bob 1 1990-01-01 extra").await,
            "Invalid command."
        );
        assert!(!interpreter.store().contains("bob").await.unwrap());
    }

    #[test]
    fn decode_line_replaces_invalid_utf8() {
        assert_eq!(decode_line(b"show all\r"), "show all");
        assert_eq!(decode_line(b"\xff"), "\u{FFFD}");
        assert_eq!(decode_line(b"add bob \xff\xfe"), "add bob \u{FFFD}\u{FFFD}");
    }

    #[test]
    fn rejects_invalid_config() {
        let config = InterpreterConfig {
            greeting: String::new(),
            ..InterpreterConfig::default()
        };
        let result = Interpreter::new(
            Box::new(MemoryContactStore::new()),
            Box::new(FixedClock(NaiveDate::MIN)),
            config,
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
