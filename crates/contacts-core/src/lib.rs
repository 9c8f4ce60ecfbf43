// # contacts-core
//
// Core library for the in-memory address book.
//
// ## Architecture Overview
//
// - **Record**: One contact (name, phones, optional birthday)
// - **ContactStore**: Trait for the name → Record mapping
// - **MemoryContactStore**: The in-memory ContactStore
// - **Clock**: Source of today's date for birthday countdowns
// - **Interpreter**: Line-oriented command loop over any async reader/writer
//
// ## Design Principles
//
// 1. **No hidden state**: The store is constructed once and handed to the
//    interpreter
// 2. **Faults vs outcomes**: Errors are reserved for NotFound, InvalidInput
//    and InvalidCommand; expected alternate results are plain replies
// 3. **Library-First**: The binary only wires stdin/stdout to the interpreter

pub mod config;
pub mod error;
pub mod interpreter;
pub mod record;
pub mod state;
pub mod traits;

// Re-export core types for convenience
pub use config::InterpreterConfig;
pub use error::{Error, Result};
pub use interpreter::{Command, Interpreter, Reply, SessionState};
pub use record::{Birthday, PhoneEdit, Record};
pub use state::MemoryContactStore;
pub use traits::{Clock, ContactStore, FixedClock, SystemClock};
