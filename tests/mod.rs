//! Integration tests for mediashelf
//!
//! Tests are organized by component:
//! - catalog_test: Catalog store, favorites persistence, search
//! - app_test: End-to-end flows through the app controller
//! - cli_test: CLI parsing and command handlers
//! - ui_test: Full-screen rendering with TestBackend
