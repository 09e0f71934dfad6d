//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── tab bar ────────────────────────────────────────────────
    pub fn tab_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn tab_active_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    // ── stage content ──────────────────────────────────────────
    pub fn text_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_label_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item_title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item_meta_style() -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn item_detail_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn work_title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn work_date_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn work_desc_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    // ── error view ─────────────────────────────────────────────
    pub fn error_heading_style() -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_detail_style() -> Style {
        Style::default().fg(Color::Red)
    }
}
