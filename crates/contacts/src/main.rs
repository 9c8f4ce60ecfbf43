// # contacts - interactive address book
//
// Thin integration layer: all address book logic lives in contacts-core.
//
// The binary is responsible for:
// 1. Reading logging configuration from the environment
// 2. Initializing tracing (to stderr, so stdout carries only the session)
// 3. Building a single-threaded runtime
// 4. Running the interpreter over stdin/stdout
//
// ## Configuration
//
// - `CONTACTS_LOG_LEVEL`: trace, debug, info, warn, error (default: warn)
//
// ## Example
//
// ```bash
// CONTACTS_LOG_LEVEL=debug contacts
// ```

use anyhow::Result;
use contacts_core::{Interpreter, InterpreterConfig, MemoryContactStore, SystemClock};
use std::env;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum ContactsExitCode {
    /// Session ended normally
    CleanShutdown = 0,
    /// Configuration or startup failure
    ConfigError = 1,
    /// Terminal I/O failure during the session
    RuntimeError = 2,
}

impl From<ContactsExitCode> for ExitCode {
    fn from(code: ContactsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        Self {
            log_level: env::var("CONTACTS_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        }
    }

    /// Validate the configuration and resolve the log level
    fn validate(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "CONTACTS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }
}

fn main() -> ExitCode {
    let config = Config::from_env();

    let log_level = match config.validate() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration validation error: {}", e);
            return ContactsExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ContactsExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return ContactsExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run_session().await {
            Ok(()) => ContactsExitCode::CleanShutdown,
            Err(e) => {
                error!("Session error: {}", e);
                ContactsExitCode::RuntimeError
            }
        }
    })
    .into()
}

/// Run one interactive session over stdin/stdout
async fn run_session() -> Result<()> {
    let interpreter = Interpreter::new(
        Box::new(MemoryContactStore::new()),
        Box::new(SystemClock),
        InterpreterConfig::default(),
    )?;

    info!("Starting address book session");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    interpreter.run(stdin, &mut stdout).await?;

    info!("Address book session finished");
    Ok(())
}
