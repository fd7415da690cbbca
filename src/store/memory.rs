//! In-memory cart store
//!
//! A `CartStore` backed by an owned snapshot slot. Used by tests and by
//! sessions that do not need durability.

use crate::store::{CartSnapshot, CartStore, StoreError};

/// In-memory persistence adapter.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Option<CartSnapshot>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: CartSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError> {
        self.snapshot = Some(snapshot.clone());

        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.snapshot = None;

        Ok(())
    }
}
