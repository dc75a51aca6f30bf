//! Media grid view
//!
//! The render target for one section: an ordered list of cards with a
//! selection cursor and a loading marker. Draws itself as a bordered list
//! with keyboard navigation.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, Paragraph},
};

use crate::ui::renderer::Card;
use crate::ui::Theme;

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Select `index`, clamped to the list
    pub fn select(&mut self, index: usize) {
        self.selected = if self.len == 0 { 0 } else { index.min(self.len - 1) };
    }

    /// Update offset to keep selected item visible
    pub fn scroll_into_view(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }

    /// Update length, clamping the selection
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// One section's card container
#[derive(Debug, Clone, Default)]
pub struct MediaGrid {
    /// Title shown in the border
    pub title: String,
    cards: Vec<Card>,
    /// Selection cursor
    pub list: ListState,
    loading: bool,
}

impl MediaGrid {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Drop every card
    pub fn clear(&mut self) {
        self.cards.clear();
        self.list.set_len(0);
    }

    /// Append a card at the end
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.list.set_len(self.cards.len());
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Move the cursor, clamped to the current cards
    pub fn select(&mut self, index: usize) {
        self.list.select(index);
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.list.selected)
    }

    pub fn selected_card_mut(&mut self) -> Option<&mut Card> {
        self.cards.get_mut(self.list.selected)
    }

    /// Set the favorite marker on every card showing `id`.
    /// Returns how many cards were patched.
    pub fn set_favorited(&mut self, id: &str, favorited: bool) -> usize {
        let mut patched = 0;
        for card in self.cards.iter_mut().filter(|c| c.item.id() == id) {
            card.favorited = favorited;
            patched += 1;
        }
        patched
    }

    /// Draw the grid
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let title = if self.cards.is_empty() {
            format!(" {} ", self.title)
        } else {
            format!(" {} ({}/{}) ", self.title, self.list.selected + 1, self.cards.len())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(title, Theme::title()));

        if self.loading {
            let loading = Paragraph::new("⟳ Loading...")
                .style(Theme::loading())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(loading, area);
            return;
        }

        if self.cards.is_empty() {
            let empty = Paragraph::new("Nothing to show")
                .style(Theme::dimmed())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Cards are up to two lines tall
        let inner_height = area.height.saturating_sub(2) as usize;
        let per_card = self.cards.iter().map(Card::height).max().unwrap_or(1);
        self.list.scroll_into_view((inner_height / per_card).max(1));

        let items: Vec<_> = self
            .cards
            .iter()
            .enumerate()
            .skip(self.list.offset)
            .map(|(i, card)| card.to_list_item(i == self.list.selected))
            .collect();

        let list = List::new(items).block(block).style(Theme::text());
        frame.render_widget(list, area);
    }
}
