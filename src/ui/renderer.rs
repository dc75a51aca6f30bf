//! Media renderer
//!
//! Turns media items into cards and fills a grid with them. The per-item
//! look is pluggable through [`ItemRenderer`]; the default card shows the
//! title, the `describe()` summary and a favorite star.

use ratatui::{
    prelude::*,
    widgets::ListItem,
};
use serde::{Deserialize, Serialize};

use crate::models::MediaItem;
use crate::store::Favorites;
use crate::ui::grid::MediaGrid;
use crate::ui::Theme;

const STAR: &str = "★";

/// Rendered representation of one media item
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub item: MediaItem,
    /// First line (title)
    pub heading: String,
    /// Second line; empty for single-line cards
    pub summary: String,
    /// Favorite toggle state
    pub favorited: bool,
}

impl Card {
    /// Default two-line card
    pub fn new(item: MediaItem, favorited: bool) -> Self {
        Self {
            heading: item.title().to_string(),
            summary: item.describe(),
            item,
            favorited,
        }
    }

    /// Lines occupied when drawn
    pub fn height(&self) -> usize {
        if self.summary.is_empty() {
            1
        } else {
            2
        }
    }

    pub fn to_list_item(&self, selected: bool) -> ListItem<'static> {
        let marker = if selected { "▸ " } else { "  " };
        let star_style = if self.favorited {
            Theme::favorite_on()
        } else {
            Theme::favorite_off()
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(marker, Theme::title()),
            Span::styled(format!("{} ", STAR), star_style),
            Span::styled(
                self.heading.clone(),
                if selected { Theme::selected() } else { Theme::text() },
            ),
        ])];

        if !self.summary.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(self.summary.clone(), Theme::dimmed()),
            ]));
        }

        ListItem::new(lines)
    }
}

/// Produces the card for one item
pub trait ItemRenderer {
    fn render_item(&self, item: &MediaItem) -> Card;
}

/// Default renderer: title + summary + favorite star
pub struct CardRenderer<'a> {
    favorites: &'a dyn Favorites,
}

impl<'a> CardRenderer<'a> {
    pub fn new(favorites: &'a dyn Favorites) -> Self {
        Self { favorites }
    }
}

impl ItemRenderer for CardRenderer<'_> {
    fn render_item(&self, item: &MediaItem) -> Card {
        Card::new(item.clone(), self.favorites.is_favorite(item.id()))
    }
}

/// Single-line renderer: the `describe()` text only
pub struct CompactRenderer<'a> {
    favorites: &'a dyn Favorites,
}

impl<'a> CompactRenderer<'a> {
    pub fn new(favorites: &'a dyn Favorites) -> Self {
        Self { favorites }
    }
}

impl ItemRenderer for CompactRenderer<'_> {
    fn render_item(&self, item: &MediaItem) -> Card {
        Card {
            item: item.clone(),
            heading: item.describe(),
            summary: String::new(),
            favorited: self.favorites.is_favorite(item.id()),
        }
    }
}

/// Card look selectable from config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    #[default]
    Card,
    Compact,
}

impl CardStyle {
    pub fn renderer<'a>(self, favorites: &'a dyn Favorites) -> Box<dyn ItemRenderer + 'a> {
        match self {
            CardStyle::Card => Box::new(CardRenderer::new(favorites)),
            CardStyle::Compact => Box::new(CompactRenderer::new(favorites)),
        }
    }
}

/// Replace `target`'s content with one card per item, in order.
///
/// Clears the loading marker. Does nothing when there is no target.
pub fn render(items: &[MediaItem], target: Option<&mut MediaGrid>, renderer: &dyn ItemRenderer) {
    let Some(grid) = target else {
        return;
    };

    grid.clear();
    grid.set_loading(false);
    for item in items {
        grid.push(renderer.render_item(item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Film, Series};
    use crate::store::{CatalogStore, MemoryStore};
    use std::sync::Arc;

    fn store() -> CatalogStore {
        CatalogStore::new(Arc::new(MemoryStore::new()))
    }

    fn items() -> Vec<MediaItem> {
        vec![
            Film::new("Pulp Fiction", "Quentin Tarantino", 1994).into(),
            Series::new("Breaking Bad", 5, 2008).into(),
        ]
    }

    #[test]
    fn test_render_preserves_order() {
        let store = store();
        let mut grid = MediaGrid::new("HOME");
        render(&items(), Some(&mut grid), &CardRenderer::new(&store));

        let titles: Vec<_> = grid.cards().iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(titles, vec!["Pulp Fiction", "Breaking Bad"]);
        assert_eq!(grid.cards()[1].summary, "Breaking Bad (2008) - 5 seasons");
    }

    #[test]
    fn test_render_clears_previous_content_and_loading() {
        let store = store();
        let mut grid = MediaGrid::new("HOME");
        render(&items(), Some(&mut grid), &CardRenderer::new(&store));
        grid.set_loading(true);

        render(&items()[..1], Some(&mut grid), &CardRenderer::new(&store));
        assert_eq!(grid.len(), 1);
        assert!(!grid.is_loading());
    }

    #[test]
    fn test_render_without_target_is_noop() {
        let store = store();
        render(&items(), None, &CardRenderer::new(&store));
    }

    #[test]
    fn test_card_marks_favorites() {
        let store = store();
        let list = items();
        store.add_favorite(&list[1]).unwrap();

        let mut grid = MediaGrid::new("HOME");
        render(&list, Some(&mut grid), &CardRenderer::new(&store));
        assert!(!grid.cards()[0].favorited);
        assert!(grid.cards()[1].favorited);
    }

    #[test]
    fn test_compact_renderer_single_line() {
        let store = store();
        let card = CompactRenderer::new(&store).render_item(&items()[0]);
        assert_eq!(card.heading, "Pulp Fiction (1994) - Directed by Quentin Tarantino");
        assert_eq!(card.height(), 1);
    }

    #[test]
    fn test_card_style_picks_renderer() {
        let store = store();
        let renderer = CardStyle::Compact.renderer(&store);
        assert!(renderer.render_item(&items()[0]).summary.is_empty());
        let renderer = CardStyle::default().renderer(&store);
        assert_eq!(renderer.render_item(&items()[0]).height(), 2);
    }
}
