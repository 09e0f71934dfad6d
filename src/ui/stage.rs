//! The stage — commits a built display-node tree to the terminal.
//!
//! Immediate-mode: the widget is created fresh each frame from the current
//! tab's nodes, so the previous frame's content is fully discarded and
//! nothing carries over between tabs.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::core::view::Node;

use super::markup;
use super::theme::Theme;

/// Renders one tab's display nodes into the stage region.
pub struct StageWidget<'a> {
    nodes: &'a [Node],
    scroll: u16,
    block: Option<Block<'a>>,
}

impl<'a> StageWidget<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            nodes,
            scroll: 0,
            block: None,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for StageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // The about tab is a single two-column node; everything else is a
        // flat run of lines.
        if let [Node::Columns { left, right }] = self.nodes {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(inner);
            let left_area = Rect {
                width: chunks[0].width.saturating_sub(1),
                ..chunks[0]
            };
            let right_area = Rect {
                x: chunks[1].x.saturating_add(1),
                width: chunks[1].width.saturating_sub(1),
                ..chunks[1]
            };
            render_lines(flat_lines(left), left_area, buf, self.scroll);
            render_lines(flat_lines(right), right_area, buf, self.scroll);
        } else {
            render_lines(flat_lines(self.nodes), inner, buf, self.scroll);
        }
    }
}

fn render_lines(lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer, scroll: u16) {
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .render(area, buf);
}

/// Number of unwrapped stage lines — the handler's scroll bound. For the
/// two-column layout the taller column counts.
pub fn line_count(nodes: &[Node]) -> usize {
    if let [Node::Columns { left, right }] = nodes {
        flat_lines(left).len().max(flat_lines(right).len())
    } else {
        flat_lines(nodes).len()
    }
}

/// Flatten nodes into styled lines.
fn flat_lines(nodes: &[Node]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for node in nodes {
        match node {
            Node::Text(text) => {
                // split, not lines(): a trailing newline is a visible blank row.
                for part in text.split('\n') {
                    lines.push(Line::styled(part.to_string(), Theme::text_style()));
                }
            }
            Node::Heading(heading) => {
                lines.push(Line::styled(heading.clone(), Theme::heading_style()));
                lines.push(Line::raw(""));
            }
            Node::Section { label, items } => {
                lines.push(Line::styled(label.clone(), Theme::section_label_style()));
                for item in items {
                    lines.extend(markup::fragment_lines(item));
                    lines.push(Line::raw(""));
                }
                if items.is_empty() {
                    lines.push(Line::raw(""));
                }
            }
            Node::Columns { left, right } => {
                // Nested columns fall back to sequential flow.
                lines.extend(flat_lines(left));
                lines.extend(flat_lines(right));
            }
            Node::Work { title, date, desc } => {
                lines.push(Line::styled(title.clone(), Theme::work_title_style()));
                lines.push(Line::styled(date.clone(), Theme::work_date_style()));
                lines.push(Line::styled(desc.clone(), Theme::work_desc_style()));
                lines.push(Line::raw(""));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{ContentDocument, WorkItem};
    use crate::core::view::{self, Tab};

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn work_entries_are_three_text_rows_in_source_order() {
        let mut doc = ContentDocument::default();
        doc.work = vec![
            WorkItem {
                title: "A".into(),
                date: "2021".into(),
                desc: "x".into(),
            },
            WorkItem {
                title: "B".into(),
                date: "2022".into(),
                desc: "y".into(),
            },
        ];
        let lines = flat_lines(&view::build(Tab::Work, &doc));
        let texts: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(texts, ["A", "2021", "x", "", "B", "2022", "y", ""]);
    }

    #[test]
    fn intro_text_keeps_embedded_line_breaks() {
        let mut doc = ContentDocument::default();
        doc.intro.text = "one\ntwo\nthree".into();
        let lines = flat_lines(&view::build(Tab::Intro, &doc));
        assert_eq!(lines.len(), 3);
        assert_eq!(text_of(&lines[1]), "two");
    }

    #[test]
    fn empty_sections_still_occupy_the_stage() {
        // A missing list renders its section label, not nothing.
        let nodes = view::build(Tab::About, &ContentDocument::default());
        let Node::Columns { left, .. } = &nodes[0] else {
            panic!("about must be columns");
        };
        let texts: Vec<String> = flat_lines(left).iter().map(text_of).collect();
        assert!(texts.contains(&"Areas".to_string()));
        assert!(texts.contains(&"Programming".to_string()));
    }

    #[test]
    fn line_count_of_columns_is_the_taller_side() {
        let nodes = vec![Node::Columns {
            left: vec![Node::Text("a\nb\nc".into())],
            right: vec![Node::Text("a".into())],
        }];
        assert_eq!(line_count(&nodes), 3);
    }
}
