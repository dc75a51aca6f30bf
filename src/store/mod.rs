//! Storage and catalog access
//!
//! - `kv`: key-value persistence (file-backed or in-memory)
//! - `catalog`: the media catalog, search, and favorites

pub mod catalog;
pub mod kv;

pub use catalog::{CatalogError, CatalogStore, Favorites, MediaFetcher, FAVORITES_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
