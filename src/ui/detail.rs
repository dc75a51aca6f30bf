//! Detail overlay
//!
//! Popup showing one item's title, year and variant field, with a favorite
//! button whose label follows the stored state.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::models::MediaItem;
use crate::ui::{centered_rect, Theme};

/// Detail overlay state
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    media: Option<MediaItem>,
    favorited: bool,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `item`
    pub fn open(&mut self, item: MediaItem, favorited: bool) {
        self.media = Some(item);
        self.favorited = favorited;
    }

    pub fn close(&mut self) {
        self.media = None;
        self.favorited = false;
    }

    pub fn is_open(&self) -> bool {
        self.media.is_some()
    }

    pub fn media(&self) -> Option<&MediaItem> {
        self.media.as_ref()
    }

    pub fn is_favorited(&self) -> bool {
        self.favorited
    }

    /// Refresh the favorite button after a toggle
    pub fn set_favorited(&mut self, favorited: bool) {
        self.favorited = favorited;
    }

    pub fn button_label(&self) -> &'static str {
        if self.favorited {
            "Remove from Favorites"
        } else {
            "Add to Favorites"
        }
    }

    /// Body text: year line and variant line
    pub fn body_lines(&self) -> Vec<String> {
        match &self.media {
            Some(item) => vec![format!("Year: {}", item.year()), item.detail_line()],
            None => Vec::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(item) = &self.media else {
            return;
        };

        let popup = centered_rect(area, 56, 11);
        frame.render_widget(Clear, popup);

        let mut lines = vec![Line::from("")];
        for text in self.body_lines() {
            lines.push(Line::from(Span::styled(text, Theme::text())));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" f  {} ", self.button_label()),
            Theme::button(true),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" ESC ", Theme::keybind()),
            Span::styled("Close", Theme::dimmed()),
        ]));

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Theme::border_focused())
                    .title(Span::styled(format!(" {} ", item.title()), Theme::title()))
                    .style(Style::default().bg(Theme::BACKGROUND)),
            );

        frame.render_widget(body, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Film, Series};

    #[test]
    fn test_open_and_close() {
        let mut view = DetailView::new();
        assert!(!view.is_open());

        view.open(Film::new("Parasite", "Bong Joon-ho", 2019).into(), true);
        assert!(view.is_open());
        assert_eq!(view.button_label(), "Remove from Favorites");

        view.close();
        assert!(!view.is_open());
        assert!(view.body_lines().is_empty());
    }

    #[test]
    fn test_body_lines_per_variant() {
        let mut view = DetailView::new();
        view.open(Film::new("Parasite", "Bong Joon-ho", 2019).into(), false);
        assert_eq!(view.body_lines(), vec!["Year: 2019", "Director: Bong Joon-ho"]);

        view.open(Series::new("Stranger Things", 4, 2016).into(), false);
        assert_eq!(view.body_lines(), vec!["Year: 2016", "Seasons: 4"]);
        assert_eq!(view.button_label(), "Add to Favorites");
    }
}
