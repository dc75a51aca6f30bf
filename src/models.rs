//! Data structures and types for mediashelf
//!
//! Contains the shared models used across the application:
//! - **Media**: films and series as a closed enum with `describe()`
//! - **Favorites**: the serialized copy persisted in the key-value store

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identity
// =============================================================================

/// Build the deterministic id for a title/year pair.
///
/// Every whitespace character becomes a single hyphen, so `"El Padrino"`
/// released in 1972 maps to `"El-Padrino-1972"`. Two items sharing a title
/// and year get the same id; nothing downstream tells them apart.
pub fn media_id(title: &str, year: u16) -> String {
    let slug: String = title
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("{}-{}", slug, year)
}

// =============================================================================
// Media Models
// =============================================================================

/// Media kind discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Film,
    Series,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Film => write!(f, "Film"),
            MediaKind::Series => write!(f, "Series"),
        }
    }
}

/// A feature film
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub id: String,
    pub title: String,
    pub year: u16,
    pub director: String,
}

impl Film {
    pub fn new(title: impl Into<String>, director: impl Into<String>, year: u16) -> Self {
        let title = title.into();
        Self {
            id: media_id(&title, year),
            title,
            year,
            director: director.into(),
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "{} ({}) - Directed by {}",
            self.title, self.year, self.director
        )
    }
}

/// A TV series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub title: String,
    pub year: u16,
    #[serde(rename = "seasonCount")]
    pub season_count: u32,
}

impl Series {
    pub fn new(title: impl Into<String>, season_count: u32, year: u16) -> Self {
        let title = title.into();
        Self {
            id: media_id(&title, year),
            title,
            year,
            season_count,
        }
    }

    pub fn describe(&self) -> String {
        format!("{} ({}) - {} seasons", self.title, self.year, self.season_count)
    }
}

/// A catalog entry: either a film or a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaItem {
    Film(Film),
    Series(Series),
}

impl MediaItem {
    pub fn id(&self) -> &str {
        match self {
            MediaItem::Film(f) => &f.id,
            MediaItem::Series(s) => &s.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MediaItem::Film(f) => &f.title,
            MediaItem::Series(s) => &s.title,
        }
    }

    pub fn year(&self) -> u16 {
        match self {
            MediaItem::Film(f) => f.year,
            MediaItem::Series(s) => s.year,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Film(_) => MediaKind::Film,
            MediaItem::Series(_) => MediaKind::Series,
        }
    }

    /// Human-readable one-line summary
    pub fn describe(&self) -> String {
        match self {
            MediaItem::Film(f) => f.describe(),
            MediaItem::Series(s) => s.describe(),
        }
    }

    /// Variant-specific line for the detail view
    pub fn detail_line(&self) -> String {
        match self {
            MediaItem::Film(f) => format!("Director: {}", f.director),
            MediaItem::Series(s) => format!("Seasons: {}", s.season_count),
        }
    }

    /// Case-insensitive match against title, and director for films.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        if self.title().to_lowercase().contains(needle) {
            return true;
        }
        match self {
            MediaItem::Film(f) => f.director.to_lowercase().contains(needle),
            MediaItem::Series(_) => false,
        }
    }
}

impl From<Film> for MediaItem {
    fn from(film: Film) -> Self {
        MediaItem::Film(film)
    }
}

impl From<Series> for MediaItem {
    fn from(series: Series) -> Self {
        MediaItem::Series(series)
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

// =============================================================================
// Favorite Models
// =============================================================================

/// Persisted copy of a favorited item.
///
/// Holds its own data rather than a reference into the catalog, so the two
/// can never affect each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub id: String,
    pub title: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "seasons")]
    pub season_count: Option<u32>,
}

impl FavoriteRecord {
    /// Rebuild the media item this record was copied from.
    ///
    /// Records carrying neither a director nor a season count (hand-edited
    /// storage) are treated as films with an empty director.
    pub fn to_media(&self) -> MediaItem {
        match (&self.director, self.season_count) {
            (None, Some(seasons)) => MediaItem::Series(Series {
                id: self.id.clone(),
                title: self.title.clone(),
                year: self.year,
                season_count: seasons,
            }),
            (director, _) => MediaItem::Film(Film {
                id: self.id.clone(),
                title: self.title.clone(),
                year: self.year,
                director: director.clone().unwrap_or_default(),
            }),
        }
    }
}

impl From<&MediaItem> for FavoriteRecord {
    fn from(item: &MediaItem) -> Self {
        match item {
            MediaItem::Film(f) => FavoriteRecord {
                id: f.id.clone(),
                title: f.title.clone(),
                year: f.year,
                director: Some(f.director.clone()),
                season_count: None,
            },
            MediaItem::Series(s) => FavoriteRecord {
                id: s.id.clone(),
                title: s.title.clone(),
                year: s.year,
                director: None,
                season_count: Some(s.season_count),
            },
        }
    }
}

impl fmt::Display for FavoriteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.to_media().describe(), self.id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
