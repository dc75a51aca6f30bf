//! Full-screen layout
//!
//! Header with logo and search box, the section tabs, the visible grid and
//! a status bar, with the detail, welcome and error overlays drawn on top.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};

use crate::app::{App, InputMode};
use crate::navigation::Section;
use crate::ui::{centered_rect, Theme};

/// Draw the whole interface
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    // Header, tabs, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    render_content(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    app.detail.render(frame, area);
    app.auth.render(frame, area);

    if let Some(ref error) = app.error {
        render_error_popup(frame, area, error);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(1)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("MEDIA", Theme::title()),
        Span::styled("SHELF", Theme::secondary().add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    app.search
        .render(frame, header_chunks[1], app.input_mode == InputMode::Editing);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<_> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| Line::from(format!(" {} {} ", i + 1, section.label())))
        .collect();

    let mut tabs = Tabs::new(titles)
        .style(Theme::tab_inactive())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled("│", Theme::dimmed()));

    if let Some(link) = app.navigation.active_link() {
        let index = Section::ALL.iter().position(|s| *s == link).unwrap_or(0);
        tabs = tabs.select(index);
    }

    frame.render_widget(tabs, area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &mut App) {
    // Home is the visible section until navigation is set up
    let section = app.navigation.active_section().unwrap_or(Section::Home);
    let focused = app.input_mode == InputMode::Normal;
    app.grid_mut(section).render(frame, area, focused);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " SEARCH ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::SECONDARY),
        ),
    };

    let section = app
        .navigation
        .active_section()
        .map(|s| s.label())
        .unwrap_or("LOADING");

    let help = if app.detail.is_open() {
        " f:favorite  ESC:close "
    } else if app.input_mode == InputMode::Editing {
        " ↵:search  ^U:clear  ESC:cancel "
    } else {
        " q:quit  /:search  TAB:section  ↵:details  f:favorite "
    };

    let status_line = Line::from(vec![
        mode_indicator,
        Span::styled(format!(" {} ", section), Style::default().fg(Theme::DIM)),
        Span::raw("│"),
        Span::styled(help, Theme::dimmed()),
    ]);

    let status = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(status, area);
}

fn render_error_popup(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(area, 70, 6);
    frame.render_widget(Clear, popup_area);

    let error_block = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(error, Theme::error())),
    ])
    .alignment(Alignment::Center)
    .wrap(ratatui::widgets::Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::error())
            .title(Span::styled(" ✗ ERROR ", Theme::error()))
            .style(Style::default().bg(Theme::BACKGROUND)),
    );

    frame.render_widget(error_block, popup_area);
}
