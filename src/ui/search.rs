//! Search box component
//!
//! Single-line text input drawn in the header. The cursor counts
//! characters, not bytes, so accented titles edit cleanly.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::Theme;

/// Search input state
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    /// Current query
    pub query: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.query.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.query.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.query.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Query with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.query.trim()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, editing: bool) {
        let text = if editing {
            let at = self.byte_index(self.cursor);
            let (before, after) = self.query.split_at(at);
            format!("⌕ {}│{}", before, after)
        } else if self.query.is_empty() {
            "⌕ Press / to search titles and directors...".to_string()
        } else {
            format!("⌕ {}", self.query)
        };

        let input = Paragraph::new(text)
            .style(if editing {
                Theme::input().fg(Theme::PRIMARY)
            } else {
                Theme::input()
            })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(if editing {
                        Theme::border_focused()
                    } else {
                        Theme::border()
                    })
                    .title(Span::styled(" SEARCH ", Theme::title())),
            );
        frame.render_widget(input, area);
    }
}
