// # Memory Contact Store
//
// In-memory implementation of ContactStore.
//
// ## Lifetime
//
// - Created empty at process start
// - All contacts are lost when the process exits
// - Nothing is ever written to disk
//
// ## Ordering
//
// Records are listed in insertion order. Overwriting an existing name keeps
// its original slot.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::Error;
use crate::record::Record;
use crate::traits::contact_store::ContactStore;

#[derive(Debug, Default)]
struct Contacts {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

/// In-memory contact store implementation
///
/// This implementation stores all records in a HashMap protected by a RwLock.
///
/// # Example
///
/// ```rust,no_run
/// use contacts_core::state::MemoryContactStore;
/// use contacts_core::traits::ContactStore;
/// use contacts_core::Record;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryContactStore::new();
///
///     let mut record = Record::new("alice")?;
///     record.add_phone("12345");
///     store.add_record(record).await?;
///
///     let alice = store.get_record("alice").await?;
///     assert_eq!(alice.unwrap().phones(), ["12345"]);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryContactStore {
    inner: Arc<RwLock<Contacts>>,
}

impl MemoryContactStore {
    /// Create a new empty memory contact store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Contacts::default())),
        }
    }

    /// Get the number of records in the store
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn add_record(&self, record: Record) -> Result<(), Error> {
        let mut guard = self.inner.write().await;
        let name = record.name().to_string();
        if guard.records.insert(name.clone(), record).is_none() {
            debug!("Added contact '{}'", name);
            guard.order.push(name);
        } else {
            debug!("Replaced contact '{}'", name);
        }
        Ok(())
    }

    async fn remove_record(&self, name: &str) -> Result<Record, Error> {
        let mut guard = self.inner.write().await;
        let record = guard
            .records
            .remove(name)
            .ok_or_else(|| Error::not_found(name))?;
        guard.order.retain(|key| key != name);
        debug!("Removed contact '{}'", name);
        Ok(record)
    }

    async fn get_record(&self, name: &str) -> Result<Option<Record>, Error> {
        let guard = self.inner.read().await;
        Ok(guard.records.get(name).cloned())
    }

    async fn contains(&self, name: &str) -> Result<bool, Error> {
        let guard = self.inner.read().await;
        Ok(guard.records.contains_key(name))
    }

    async fn list_records(&self) -> Result<Vec<Record>, Error> {
        let guard = self.inner.read().await;
        Ok(guard
            .order
            .iter()
            .filter_map(|name| guard.records.get(name).cloned())
            .collect())
    }
}
