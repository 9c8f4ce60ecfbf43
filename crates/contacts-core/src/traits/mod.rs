//! Core traits for the address book
//!
//! - [`ContactStore`]: The name → Record mapping
//! - [`Clock`]: Today's date, injectable for tests

pub mod clock;
pub mod contact_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use contact_store::{ContactStore, NO_CONTACTS};
