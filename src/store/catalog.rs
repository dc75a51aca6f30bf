//! Catalog store
//!
//! Owns the fixed film and series lists, serves them after a simulated
//! network delay, filters them for search, and keeps favorites in the
//! key-value store under the `favorites` key.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{FavoriteRecord, Film, MediaItem, Series};
use crate::store::kv::{KeyValueStore, StoreError};

/// Storage key holding the serialized favorites list
pub const FAVORITES_KEY: &str = "favorites";

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Media not found: {0}")]
    NotFound(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

// =============================================================================
// Seams
// =============================================================================

/// Asynchronous media listing and search
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    async fn list_films(&self) -> Result<Vec<MediaItem>>;
    async fn list_series(&self) -> Result<Vec<MediaItem>>;
    async fn search(&self, query: &str) -> Result<Vec<MediaItem>>;
}

/// Favorite bookkeeping backed by persistent storage
pub trait Favorites: Send + Sync {
    /// All stored favorites. Absent or malformed storage reads as empty;
    /// records that do not parse are skipped.
    fn list_favorites(&self) -> Vec<FavoriteRecord>;

    /// Store a copy of `item`; `false` when it was already a favorite
    fn add_favorite(&self, item: &MediaItem) -> Result<bool>;

    /// Drop the record for `id`; `false` when there was none
    fn remove_favorite(&self, id: &str) -> Result<bool>;

    /// Re-reads storage on every call
    fn is_favorite(&self, id: &str) -> bool;
}

// =============================================================================
// Default catalog
// =============================================================================

pub fn default_films() -> Vec<Film> {
    vec![
        Film::new("El Padrino", "Francis Ford Coppola", 1972),
        Film::new("Pulp Fiction", "Quentin Tarantino", 1994),
        Film::new("El origen", "Christopher Nolan", 2010),
        Film::new("Interstellar", "Christopher Nolan", 2014),
        Film::new("Parasite", "Bong Joon-ho", 2019),
    ]
}

pub fn default_series() -> Vec<Series> {
    vec![
        Series::new("Breaking Bad", 5, 2008),
        Series::new("Game of Thrones", 8, 2011),
        Series::new("Stranger Things", 4, 2016),
        Series::new("The Mandalorian", 3, 2019),
    ]
}

// =============================================================================
// Catalog Store
// =============================================================================

/// In-memory catalog with persisted favorites
pub struct CatalogStore {
    films: Vec<MediaItem>,
    series: Vec<MediaItem>,
    kv: Arc<dyn KeyValueStore>,
    latency: Duration,
}

impl CatalogStore {
    /// Simulated network latency applied to every fetch
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

    /// Create a store over the default catalog
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_catalog(default_films(), default_series(), kv)
    }

    /// Create a store over a custom catalog
    pub fn with_catalog(films: Vec<Film>, series: Vec<Series>, kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            films: films.into_iter().map(MediaItem::from).collect(),
            series: series.into_iter().map(MediaItem::from).collect(),
            kv,
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn films(&self) -> &[MediaItem] {
        &self.films
    }

    pub fn series(&self) -> &[MediaItem] {
        &self.series
    }

    /// Underlying key-value store
    pub fn kv(&self) -> &Arc<dyn KeyValueStore> {
        &self.kv
    }

    /// Look up a catalog item by id (films first, then series)
    pub fn find(&self, id: &str) -> Option<&MediaItem> {
        self.films
            .iter()
            .chain(self.series.iter())
            .find(|item| item.id() == id)
    }

    /// Synchronous search: films in catalog order, then series.
    ///
    /// An empty query matches every item.
    pub fn filter(&self, query: &str) -> Vec<MediaItem> {
        let needle = query.to_lowercase();
        self.films
            .iter()
            .chain(self.series.iter())
            .filter(|item| item.matches(&needle))
            .cloned()
            .collect()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn write_favorites(&self, favorites: &[FavoriteRecord]) -> Result<()> {
        let json = serde_json::to_string(favorites).map_err(StoreError::from)?;
        self.kv.set(FAVORITES_KEY, &json)?;
        Ok(())
    }
}

#[async_trait]
impl MediaFetcher for CatalogStore {
    async fn list_films(&self) -> Result<Vec<MediaItem>> {
        self.simulate_latency().await;
        debug!("Serving {} films", self.films.len());
        Ok(self.films.clone())
    }

    async fn list_series(&self) -> Result<Vec<MediaItem>> {
        self.simulate_latency().await;
        debug!("Serving {} series", self.series.len());
        Ok(self.series.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<MediaItem>> {
        self.simulate_latency().await;
        let results = self.filter(query);
        info!("Search {:?} matched {} items", query, results.len());
        Ok(results)
    }
}

impl Favorites for CatalogStore {
    fn list_favorites(&self) -> Vec<FavoriteRecord> {
        let raw = match self.kv.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Could not read favorites: {}", e);
                return Vec::new();
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring malformed favorites: {}", e);
                return Vec::new();
            }
        };

        let total = entries.len();
        let favorites: Vec<FavoriteRecord> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        if favorites.len() < total {
            warn!("Skipped {} malformed favorite records", total - favorites.len());
        }
        favorites
    }

    fn add_favorite(&self, item: &MediaItem) -> Result<bool> {
        let mut favorites = self.list_favorites();
        if favorites.iter().any(|fav| fav.id == item.id()) {
            return Ok(false);
        }

        favorites.push(FavoriteRecord::from(item));
        self.write_favorites(&favorites)?;
        info!("Added {} to favorites", item.title());
        Ok(true)
    }

    fn remove_favorite(&self, id: &str) -> Result<bool> {
        let mut favorites = self.list_favorites();
        let before = favorites.len();
        favorites.retain(|fav| fav.id != id);
        self.write_favorites(&favorites)?;

        let removed = favorites.len() < before;
        if removed {
            info!("Removed {} from favorites", id);
        }
        Ok(removed)
    }

    fn is_favorite(&self, id: &str) -> bool {
        self.list_favorites().iter().any(|fav| fav.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;

    fn store() -> CatalogStore {
        CatalogStore::new(Arc::new(MemoryStore::new())).with_latency(Duration::ZERO)
    }

    fn titles(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|i| i.title()).collect()
    }

    #[test]
    fn test_default_catalog_sizes() {
        let store = store();
        assert_eq!(store.films().len(), 5);
        assert_eq!(store.series().len(), 4);
    }

    #[test]
    fn test_filter_director_case_insensitive() {
        let results = store().filter("nolan");
        assert_eq!(titles(&results), vec!["El origen", "Interstellar"]);
    }

    #[test]
    fn test_filter_films_before_series() {
        // "in" hits films and series alike
        let results = store().filter("IN");
        let kinds: Vec<_> = results.iter().map(|i| i.kind()).collect();
        let first_series = kinds
            .iter()
            .position(|k| *k == crate::models::MediaKind::Series)
            .unwrap();
        assert!(kinds[first_series..]
            .iter()
            .all(|k| *k == crate::models::MediaKind::Series));
    }

    #[test]
    fn test_filter_empty_query_matches_everything() {
        assert_eq!(store().filter("").len(), 9);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(store().filter("zzz").is_empty());
    }

    #[test]
    fn test_find() {
        let store = store();
        assert_eq!(store.find("El-Padrino-1972").unwrap().title(), "El Padrino");
        assert_eq!(store.find("Breaking-Bad-2008").unwrap().title(), "Breaking Bad");
        assert!(store.find("nope").is_none());
    }

    #[test]
    fn test_add_favorite_twice() {
        let store = store();
        let item = store.films()[0].clone();

        assert!(store.add_favorite(&item).unwrap());
        assert!(!store.add_favorite(&item).unwrap());
        assert_eq!(store.list_favorites().len(), 1);
    }

    #[test]
    fn test_remove_missing_favorite() {
        let store = store();
        let item = store.films()[1].clone();
        store.add_favorite(&item).unwrap();

        let before = store.list_favorites();
        assert!(!store.remove_favorite("Not-Here-2000").unwrap());
        assert_eq!(store.list_favorites(), before);
    }

    #[test]
    fn test_is_favorite_reflects_storage_immediately() {
        let store = store();
        let item = store.series()[0].clone();

        assert!(!store.is_favorite(item.id()));
        store.add_favorite(&item).unwrap();
        assert!(store.is_favorite(item.id()));
        store.remove_favorite(item.id()).unwrap();
        assert!(!store.is_favorite(item.id()));
    }

    #[test]
    fn test_is_favorite_sees_external_writes() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let store = CatalogStore::new(kv.clone());

        kv.set(
            FAVORITES_KEY,
            r#"[{"id":"Parasite-2019","title":"Parasite","year":2019,"director":"Bong Joon-ho"}]"#,
        )
        .unwrap();
        assert!(store.is_favorite("Parasite-2019"));
    }

    #[test]
    fn test_malformed_favorites_fail_soft() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        kv.set(FAVORITES_KEY, "definitely not json").unwrap();
        let store = CatalogStore::new(kv);

        assert!(store.list_favorites().is_empty());
        assert!(!store.is_favorite("El-Padrino-1972"));

        // Adding replaces the garbage with a valid list
        let item = store.films()[0].clone();
        assert!(store.add_favorite(&item).unwrap());
        assert_eq!(store.list_favorites().len(), 1);
    }

    #[test]
    fn test_search_outside_runtime() {
        let results = tokio_test::block_on(store().search("BREAKING")).unwrap();
        assert_eq!(titles(&results), vec!["Breaking Bad"]);
    }

    #[tokio::test]
    async fn test_list_films_returns_copies() {
        let store = store();
        let mut films = store.list_films().await.unwrap();
        if let MediaItem::Film(f) = &mut films[0] {
            f.title = "Changed".into();
        }
        assert_eq!(store.films()[0].title(), "El Padrino");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let store = CatalogStore::new(Arc::new(MemoryStore::new()));
        let start = tokio::time::Instant::now();
        let series = store.list_series().await.unwrap();
        assert_eq!(series.len(), 4);
        assert!(start.elapsed() >= CatalogStore::DEFAULT_LATENCY);
    }
}
