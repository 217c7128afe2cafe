//! Key-Value persistence for the storefront cart.
//!
//! A shop page keeps its cart in a flat key-value store, usually browser
//! local storage. This crate puts that behind the [`KvStore`] trait so the
//! cart logic runs unchanged against memory, a directory on disk, or Spin's
//! Key-Value Store. [`JsonStore`] wraps any store with JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use shop_kv::{JsonStore, MemoryStore};
//!
//! let store = JsonStore::new(MemoryStore::new());
//! store.set("mimoCart", &vec![1u32, 2, 3]).unwrap();
//!
//! let ids: Option<Vec<u32>> = store.get("mimoCart").unwrap();
//! assert_eq!(ids, Some(vec![1, 2, 3]));
//!
//! store.delete("mimoCart").unwrap();
//! assert!(!store.exists("mimoCart").unwrap());
//! ```

mod error;
mod json;
mod store;

pub use error::StoreError;
pub use json::JsonStore;
pub use store::{FileStore, KvStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use store::SpinStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, JsonStore, KvStore, MemoryStore, StoreError};
}
