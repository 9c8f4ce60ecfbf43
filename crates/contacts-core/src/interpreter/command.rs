//! Command line parsing
//!
//! A line is lowercased, split on whitespace and classified by its leading
//! keyword. Arity is checked here so handlers only ever see well-formed
//! commands.

use std::fmt;

use crate::error::{Error, Result};

/// A well-formed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> [phone] [birthday]`
    Add {
        name: String,
        phone: Option<String>,
        birthday: Option<String>,
    },
    /// `change <name> <phone>`
    Change { name: String, phone: String },
    /// `phone <name>`
    Phone { name: String },
    /// `remove <name>`
    Remove { name: String },
    /// `show all`
    ShowAll,
    /// `birthday <name>`
    Birthday { name: String },
    /// `good bye`, `close` or `exit`
    Exit,
}

impl Command {
    /// Whether this command ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

/// Hint printed when a known command gets the wrong number of arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Add,
    Change,
    Name,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Usage::Add => "Enter name and optional phone number and birthday, separated by a space.",
            Usage::Change => "Enter name and new phone number, separated by a space.",
            Usage::Name => "Enter a name.",
        })
    }
}

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A command ready for dispatch
    Command(Command),
    /// Known keyword, wrong argument count
    Usage(Usage),
    /// Not in the vocabulary
    Unknown,
}

/// Classify a raw input line
///
/// `add` with more than three arguments is an arity fault and fails with
/// `Error::InvalidCommand`; every other arity mismatch yields a usage hint.
pub fn parse(line: &str) -> Result<Input> {
    let lowered = line.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let command = match tokens.as_slice() {
        ["hello"] => Command::Hello,
        ["show", "all"] => Command::ShowAll,
        ["good", "bye"] | ["close"] | ["exit"] => Command::Exit,
        ["add"] => return Ok(Input::Usage(Usage::Add)),
        ["add", name, rest @ ..] => {
            if rest.len() > 2 {
                return Err(Error::invalid_command(format!(
                    "add takes at most 3 arguments, got {}",
                    rest.len() + 1
                )));
            }
            Command::Add {
                name: name.to_string(),
                phone: rest.first().map(|s| s.to_string()),
                birthday: rest.get(1).map(|s| s.to_string()),
            }
        }
        ["change", name, phone] => Command::Change {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ["change", ..] => return Ok(Input::Usage(Usage::Change)),
        ["phone", name] => Command::Phone {
            name: name.to_string(),
        },
        ["remove", name] => Command::Remove {
            name: name.to_string(),
        },
        ["birthday", name] => Command::Birthday {
            name: name.to_string(),
        },
        ["phone" | "remove" | "birthday", ..] => return Ok(Input::Usage(Usage::Name)),
        _ => return Ok(Input::Unknown),
    };

    Ok(Input::Command(command))
}
