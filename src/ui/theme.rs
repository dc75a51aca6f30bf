//! Marquee theme for mediashelf
//!
//! Color palette and style helpers for the TUI: a dark theater background
//! with amber marquee accents and a gold star for favorites.

use ratatui::style::{Color, Modifier, Style};

/// Marquee color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0e0b14 (theater black)
    pub const BACKGROUND: Color = Color::Rgb(0x0e, 0x0b, 0x14);

    /// Primary: #ffb347 (marquee amber)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xb3, 0x47);

    /// Secondary: #9d8cff (usher violet)
    pub const SECONDARY: Color = Color::Rgb(0x9d, 0x8c, 0xff);

    /// Favorite star: #ffd700 (gold)
    pub const STAR: Color = Color::Rgb(0xff, 0xd7, 0x00);

    /// Text: #ece6f0 (screen white)
    pub const TEXT: Color = Color::Rgb(0xec, 0xe6, 0xf0);

    /// Dim: #5c5566 (muted)
    pub const DIM: Color = Color::Rgb(0x5c, 0x55, 0x66);

    /// Error: #ff4d5e (exit-sign red)
    pub const ERROR: Color = Color::Rgb(0xff, 0x4d, 0x5e);

    /// Slightly lighter background for panels and the status bar
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1b, 0x16, 0x24);

    /// Border color (dim amber)
    pub const BORDER: Color = Color::Rgb(0x80, 0x5a, 0x24);

    /// Border color when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected card (inverted amber)
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Star shown on favorited cards
    pub fn favorite_on() -> Style {
        Style::default()
            .fg(Self::STAR)
            .add_modifier(Modifier::BOLD)
    }

    /// Star shown on non-favorited cards
    pub fn favorite_off() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Active nav tab
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Button in an overlay
    pub fn button(focused: bool) -> Style {
        if focused {
            Self::selected()
        } else {
            Style::default().fg(Self::PRIMARY).bg(Self::BACKGROUND_LIGHT)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance per WCAG 2.0
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, from 1 (identical) to 21
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
