//! Tab bar — the three tab controls, exactly one marked active.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::view::Tab;

use super::theme::Theme;

/// Label of one tab control, digit hint included (e.g. `"[1] Intro"`).
fn control_label(tab: Tab) -> String {
    format!("[{}] {}", tab.digit(), tab.label())
}

/// The tab bar widget — created fresh each frame.
pub struct TabBar {
    pub active: Tab,
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, &tab) in Tab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if tab == self.active {
                Theme::tab_active_style()
            } else {
                Theme::tab_style()
            };
            spans.push(Span::styled(control_label(tab), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Which tab control, if any, sits under the pointer.
///
/// Mirrors the geometry [`TabBar`] renders: a leading space, then the
/// controls separated by single spaces. Labels are ASCII, so byte length
/// equals column width.
pub fn tab_hit(area: Rect, col: u16, row: u16) -> Option<Tab> {
    if row != area.y || area.width == 0 {
        return None;
    }
    let mut x = area.x.saturating_add(1);
    for &tab in Tab::ALL {
        let width = control_label(tab).len() as u16;
        if col >= x && col < x.saturating_add(width) {
            return Some(tab);
        }
        x = x.saturating_add(width + 1);
    }
    None
}
