//! Configuration types for the address book
//!
//! Only the presentation of the session is configurable. The command
//! vocabulary and reply templates are fixed.

use serde::{Deserialize, Serialize};

/// Interpreter session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Printed at session start and in reply to `hello`
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Marker written before each input line is read
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Printed when a termination keyword is entered
    #[serde(default = "default_farewell")]
    pub farewell: String,
}

impl InterpreterConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            greeting: default_greeting(),
            prompt: default_prompt(),
            farewell: default_farewell(),
        }
    }

    /// Set the prompt marker
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.greeting.trim().is_empty() {
            return Err(crate::Error::invalid_input("greeting cannot be empty"));
        }
        if self.farewell.trim().is_empty() {
            return Err(crate::Error::invalid_input("farewell cannot be empty"));
        }
        Ok(())
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_greeting() -> String {
    "How can I help you?".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_farewell() -> String {
    "Good bye!".to_string()
}
