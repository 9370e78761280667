//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette, with
//! indexed fallbacks for light backgrounds.

use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthChar;

/// Whether the terminal reports a light background via `COLORFGBG`.
pub fn is_light_background() -> bool {
    light_background_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn light_background_from_colorfgbg(value: Option<&str>) -> bool {
    // "fg;bg" or "fg;default;bg"; 7 and 15 are the light greys.
    value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg == 15)
}

const fn accent(light_bg: bool) -> Color {
    if light_bg {
        Color::Indexed(24)
    } else {
        Color::Cyan
    }
}

pub fn nav_link_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(accent(is_light_background()))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent(is_light_background()))
    }
}

pub fn section_border_style() -> Style {
    Style::default().fg(Color::Indexed(240))
}

pub fn card_border_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Indexed(244))
    }
}

pub fn card_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn card_subtitle_style() -> Style {
    Style::default()
        .fg(Color::Indexed(245))
        .add_modifier(Modifier::ITALIC)
}

pub fn badge_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn panel_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}

pub fn panel_heading_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn control_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn dot_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Indexed(242))
    }
}

pub const fn dot_symbol(active: bool) -> &'static str {
    if active { "\u{25cf}" } else { "\u{25cb}" }
}

pub fn dim_style() -> Style {
    Style::default().fg(Color::Indexed(245))
}

/// Truncate `text` to `width` display columns, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}
