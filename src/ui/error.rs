//! Failed-session view — shown in place of the stage when the content
//! document could not be loaded. Terminal for the session: no retry, only
//! a restart recovers.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

use crate::core::store::LoadError;

use super::theme::Theme;

const DIAGNOSTIC: &[&str] = &[
    "Could not load the content document.",
    "",
    "Nothing can be shown without it. Check that the content file exists",
    "and is valid JSON (or that the URL is reachable), then restart.",
    "",
];

/// Replaces the stage with a fixed diagnostic plus the stringified error.
pub struct ErrorView<'a> {
    error: &'a LoadError,
    block: Option<Block<'a>>,
}

impl<'a> ErrorView<'a> {
    pub fn new(error: &'a LoadError) -> Self {
        Self { error, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for ErrorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::styled(DIAGNOSTIC[0], Theme::error_heading_style()));
        for &row in &DIAGNOSTIC[1..] {
            lines.push(Line::styled(row, Theme::text_style()));
        }
        lines.push(Line::styled(
            self.error.to_string(),
            Theme::error_detail_style(),
        ));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
