//! mediashelf - terminal catalog of films and series with favorites
//!
//! Browse a small catalog by section, search titles and directors, open
//! details, and keep a persistent favorites shelf. Ships a TUI and a
//! scriptable CLI over the same store.
//!
//! # Modules
//!
//! - `models` - Film, Series and the persisted favorite record
//! - `store` - Key-value persistence and the catalog store
//! - `navigation` - Section visibility and nav links
//! - `bootstrap` - First-run detection
//! - `ui` - TUI components
//! - `app` - Application controller
//! - `cli` / `commands` - Scriptable interface
//! - `config` / `logging` - Ambient setup

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use models::{media_id, FavoriteRecord, Film, MediaItem, MediaKind, Series};

pub use app::{App, AppEvent, InputMode, Request, LOAD_FAILURE_NOTICE};
pub use config::Config;
pub use navigation::{Navigation, Section};
pub use store::{
    CatalogError, CatalogStore, Favorites, FileStore, KeyValueStore, MediaFetcher, MemoryStore,
    StoreError,
};
