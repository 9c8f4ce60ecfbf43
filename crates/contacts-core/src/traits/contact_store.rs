// # Contact Store Trait
//
// Defines the interface for the name → Record mapping.
//
// ## Ownership
//
// The store exclusively owns its records. Lookups return clones, so no
// caller-held value is invalidated by a later mutation. Updating a contact
// is lookup, modify the clone, then `add_record` to overwrite.
//
// ## Implementations
//
// - In-memory: `MemoryContactStore`
//
// ## Usage
//
// ```rust
// use contacts_core::{ContactStore, MemoryContactStore, Record};
//
// #[tokio::main]
// async fn main() -> contacts_core::Result<()> {
//     let store = MemoryContactStore::new();
//
//     store.add_record(Record::new("alice")?).await?;
//     assert!(store.get_record("alice").await?.is_some());
//
//     store.remove_record("alice").await?;
//     assert!(store.get_record("alice").await?.is_none());
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::record::Record;

/// Rendered text for an empty store
pub const NO_CONTACTS: &str = "No contacts found.";

/// Trait for contact store implementations
///
/// All methods must be safe to call concurrently from multiple tasks.
///
/// The store enforces no uniqueness beyond overwrite-on-insert: callers that
/// must not replace an existing contact check [`ContactStore::contains`]
/// first.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Insert a record under its name, replacing any existing entry
    ///
    /// A replaced entry keeps its position in listing order.
    async fn add_record(&self, record: Record) -> Result<(), crate::Error>;

    /// Remove a record
    ///
    /// # Returns
    ///
    /// - `Ok(Record)`: The removed record
    /// - `Err(Error::NotFound)`: No record with that name
    async fn remove_record(&self, name: &str) -> Result<Record, crate::Error>;

    /// Look up a record by name
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Record))`: A copy of the stored record
    /// - `Ok(None)`: No record found
    async fn get_record(&self, name: &str) -> Result<Option<Record>, crate::Error>;

    /// Check whether a record exists
    async fn contains(&self, name: &str) -> Result<bool, crate::Error> {
        Ok(self.get_record(name).await?.is_some())
    }

    /// All records in insertion order
    async fn list_records(&self) -> Result<Vec<Record>, crate::Error>;

    /// Render every record, separated by a blank line
    ///
    /// An empty store renders as [`NO_CONTACTS`].
    async fn render(&self) -> Result<String, crate::Error> {
        let records = self.list_records().await?;
        if records.is_empty() {
            return Ok(NO_CONTACTS.to_string());
        }

        Ok(records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}
