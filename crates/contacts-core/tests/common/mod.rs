//! Shared helpers for interpreter session tests
//!
//! Sessions run over an in-memory byte slice with the output captured in a
//! `Vec<u8>`, so every test sees the exact transcript a terminal would.

#![allow(dead_code)]

use chrono::NaiveDate;
use contacts_core::{FixedClock, Interpreter, InterpreterConfig, MemoryContactStore};

/// Date every session test treats as "today"
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

/// Interpreter with the default prompt and a fixed clock
pub fn interpreter_with(store: MemoryContactStore, config: InterpreterConfig) -> Interpreter {
    Interpreter::new(Box::new(store), Box::new(FixedClock(today())), config)
        .expect("interpreter construction succeeds")
}

/// Run `script` through a fresh session and return the full transcript
pub async fn transcript(interpreter: &Interpreter, script: &str) -> String {
    transcript_bytes(interpreter, script.as_bytes()).await
}

/// Same as [`transcript`] for raw input that need not be valid UTF-8
pub async fn transcript_bytes(interpreter: &Interpreter, input: &[u8]) -> String {
    let mut output = Vec::new();
    interpreter
        .run(input, &mut output)
        .await
        .expect("session runs to completion");
    String::from_utf8(output).expect("output is utf-8")
}

/// Run `script` with an empty prompt and return the printed lines,
/// greeting included
pub async fn replies(script: &str) -> Vec<String> {
    let interpreter = interpreter_with(
        MemoryContactStore::new(),
        InterpreterConfig::new().with_prompt(""),
    );
    transcript(&interpreter, script)
        .await
        .lines()
        .map(str::to_string)
        .collect()
}
