//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: tab bar on top, stage, bottom status bar.
pub struct AppLayout {
    pub tabs_area: Rect,
    pub stage_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // tab bar
                Constraint::Min(3),    // stage (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            tabs_area: chunks[0],
            stage_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
