//! Ticket persistence
//!
//! `TicketStore` is the seam between the ticket screen and durable state.
//! The whole collection is read and written at once; there is no merge.

use std::sync::Arc;

use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::types::{TICKETS_KEY, Ticket};

/// Durable read/write of the full ticket collection
pub trait TicketStore: Send + Sync {
    /// Read the whole collection
    ///
    /// A missing or malformed slot reads as an empty collection.
    fn load_all(&self) -> Vec<Ticket>;

    /// Overwrite the whole collection
    fn save_all(&self, tickets: &[Ticket]) -> Result<()>;
}

/// `TicketStore` over a single JSON slot of a key-value storage
#[derive(Debug)]
pub struct StorageTicketStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> StorageTicketStore<S> {
    /// Store tickets under the default `tickets` slot
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, TICKETS_KEY)
    }

    /// Store tickets under a custom slot
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> TicketStore for StorageTicketStore<S> {
    fn load_all(&self) -> Vec<Ticket> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return vec![],
            Err(e) => {
                tracing::warn!("Failed to read slot '{}': {}", self.key, e);
                return vec![];
            }
        };

        match serde_json::from_str::<Vec<Ticket>>(&raw) {
            Ok(tickets) => tickets,
            Err(e) => {
                tracing::warn!(
                    "Slot '{}' holds malformed ticket data, treating as empty: {}",
                    self.key,
                    e
                );
                vec![]
            }
        }
    }

    fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        let json = serde_json::to_string(tickets)?;
        self.storage.set_item(&self.key, &json)
    }
}

impl<T: TicketStore + ?Sized> TicketStore for Arc<T> {
    fn load_all(&self) -> Vec<Ticket> {
        (**self).load_all()
    }

    fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        (**self).save_all(tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::{TicketPriority, TicketStatus};

    fn ticket(id: &str, title: &str) -> Ticket {
        let now: jiff::Timestamp = "2024-05-01T08:30:00Z".parse().unwrap();
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} description"),
            priority: TicketPriority::Medium.into(),
            status: TicketStatus::Open.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_storage_loads_empty() {
        let store = StorageTicketStore::new(MemoryStorage::new());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let store = StorageTicketStore::new(MemoryStorage::new());
        let tickets = vec![ticket("3", "Third"), ticket("1", "First"), ticket("2", "Second")];

        store.save_all(&tickets).unwrap();
        assert_eq!(store.load_all(), tickets);
    }

    #[test]
    fn test_malformed_slot_loads_empty() {
        for raw in ["not json", "{\"id\": 1}", "[{\"id\": \"1\"}]", "null"] {
            let store = StorageTicketStore::new(MemoryStorage::with_item(TICKETS_KEY, raw));
            assert!(store.load_all().is_empty(), "expected empty for {raw:?}");
        }
    }

    #[test]
    fn test_unknown_enum_value_keeps_collection() {
        let raw = r#"[
            {"id":"1","title":"A","description":"B","priority":"low","status":"open",
             "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
            {"id":"2","title":"C","description":"D","priority":"urgent","status":"archived",
             "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}
        ]"#;
        let store = StorageTicketStore::new(MemoryStorage::with_item(TICKETS_KEY, raw));
        let loaded = store.load_all();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].status.as_str(), "archived");
        assert_eq!(loaded[1].priority.as_str(), "urgent");

        // Written back verbatim
        store.save_all(&loaded).unwrap();
        assert_eq!(store.load_all(), loaded);
    }

    #[test]
    fn test_save_overwrites_whole_collection() {
        let store = StorageTicketStore::new(MemoryStorage::new());
        store.save_all(&[ticket("1", "One"), ticket("2", "Two")]).unwrap();
        store.save_all(&[ticket("2", "Two")]).unwrap();

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "2");
    }

    #[test]
    fn test_custom_key() {
        let store = StorageTicketStore::with_key(MemoryStorage::new(), "tickets_archive");
        store.save_all(&[ticket("1", "One")]).unwrap();
        assert_eq!(store.key(), "tickets_archive");
        assert!(store.storage().get_item(TICKETS_KEY).unwrap().is_none());
        assert!(store.storage().get_item("tickets_archive").unwrap().is_some());
    }
}
