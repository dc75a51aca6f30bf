//! First-run welcome overlay
//!
//! Purely cosmetic: Login, Register and Close all do the same thing.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::ui::{centered_rect, Theme};

/// Overlay controls, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthAction {
    #[default]
    Login,
    Register,
    Close,
}

impl AuthAction {
    pub const ALL: [AuthAction; 3] = [AuthAction::Login, AuthAction::Register, AuthAction::Close];

    pub fn label(self) -> &'static str {
        match self {
            AuthAction::Login => "Login",
            AuthAction::Register => "Register",
            AuthAction::Close => "Close",
        }
    }

    fn next(self) -> Self {
        match self {
            AuthAction::Login => AuthAction::Register,
            AuthAction::Register => AuthAction::Close,
            AuthAction::Close => AuthAction::Login,
        }
    }

    fn prev(self) -> Self {
        match self {
            AuthAction::Login => AuthAction::Close,
            AuthAction::Register => AuthAction::Login,
            AuthAction::Close => AuthAction::Register,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthOverlay {
    visible: bool,
    focus: AuthAction,
}

impl AuthOverlay {
    pub fn show(&mut self) {
        self.visible = true;
        self.focus = AuthAction::Login;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn focused(&self) -> AuthAction {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let popup = centered_rect(area, 50, 9);
        frame.render_widget(Clear, popup);

        let mut buttons = Vec::new();
        for action in AuthAction::ALL {
            buttons.push(Span::styled(
                format!(" {} ", action.label()),
                Theme::button(action == self.focus),
            ));
            buttons.push(Span::raw("  "));
        }

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Welcome to mediashelf", Theme::title())),
            Line::from(Span::styled(
                "Sign in to keep your favorites",
                Theme::dimmed(),
            )),
            Line::from(""),
            Line::from(buttons),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Theme::border_focused())
                .style(Style::default().bg(Theme::BACKGROUND)),
        );

        frame.render_widget(body, popup);
    }
}
