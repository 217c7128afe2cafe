//! Typed wrapper with automatic JSON serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{KvStore, StoreError};

/// Type-safe view over a [`KvStore`].
///
/// Values are stored as JSON, the same shape a page script writes with
/// `JSON.stringify`, so data written here can be read by the page and
/// the other way around.
#[derive(Debug, Clone)]
pub struct JsonStore<S> {
    store: S,
}

impl<S: KvStore> JsonStore<S> {
    /// Wrap a raw store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist. A value that is present but
    /// doesn't parse as `T` is a [`StoreError::SerializeError`].
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.store.exists(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.store.keys()
    }

    /// Access the underlying raw store.
    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: u64,
        quantity: u32,
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = JsonStore::new(MemoryStore::new());
        let value: Option<Vec<Entry>> = store.get("mimoCart").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        let store = JsonStore::new(MemoryStore::new());
        let entries = vec![Entry { id: 1, quantity: 2 }];
        store.set("mimoCart", &entries).unwrap();

        let raw = store.inner().get("mimoCart").unwrap().unwrap();
        assert_eq!(raw, br#"[{"id":1,"quantity":2}]"#.to_vec());

        let back: Option<Vec<Entry>> = store.get("mimoCart").unwrap();
        assert_eq!(back, Some(entries));
    }

    #[test]
    fn test_get_malformed_is_serialize_error() {
        let raw = MemoryStore::new();
        raw.set("mimoCart", b"{not json").unwrap();

        let store = JsonStore::new(raw);
        let result: Result<Option<Vec<Entry>>, _> = store.get("mimoCart");
        assert!(matches!(result, Err(StoreError::SerializeError(_))));
    }
}
