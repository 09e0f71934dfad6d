//! Markup-fragment rendering — parses the tagged fragments built by the
//! view builders into styled lines.
//!
//! The vocabulary is fixed: `<t>` title, `<m>` meta, `<d>` detail. Each tag
//! opens one styled line. Text content had its `&<>"'` characters escaped at
//! build time, so only builder-supplied tags read as structure; the five
//! entities decode back to literal characters on the way out. Anything
//! unrecognized (unknown tags, stray `<`, malformed entities) is emitted
//! literally.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::core::view::Markup;

use super::theme::Theme;

enum TagToken {
    Open(Style),
    Close,
    Unknown,
}

fn tag_token(tag: &str) -> TagToken {
    match tag {
        "t" => TagToken::Open(Theme::item_title_style()),
        "m" => TagToken::Open(Theme::item_meta_style()),
        "d" => TagToken::Open(Theme::item_detail_style()),
        "/t" | "/m" | "/d" => TagToken::Close,
        _ => TagToken::Unknown,
    }
}

/// Render a fragment into styled lines, one per structural tag.
pub fn fragment_lines(fragment: &Markup) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut style = Theme::text_style();
    let mut rest = fragment.as_str();

    while !rest.is_empty() {
        let Some(lt) = rest.find('<') else {
            push_text(&mut spans, rest, style);
            break;
        };
        if lt > 0 {
            push_text(&mut spans, &rest[..lt], style);
            rest = &rest[lt..];
        }

        let Some(gt) = rest[1..].find('>') else {
            // Unterminated `<` — literal.
            push_text(&mut spans, "<", style);
            rest = &rest[1..];
            continue;
        };

        match tag_token(&rest[1..1 + gt]) {
            TagToken::Open(tag_style) => {
                if !spans.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut spans)));
                }
                style = tag_style;
                rest = &rest[gt + 2..];
            }
            TagToken::Close => {
                if !spans.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut spans)));
                }
                style = Theme::text_style();
                rest = &rest[gt + 2..];
            }
            TagToken::Unknown => {
                // Not structure — emit the `<` literally and rescan the rest.
                push_text(&mut spans, "<", style);
                rest = &rest[1..];
            }
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

fn push_text(spans: &mut Vec<Span<'static>>, text: &str, style: Style) {
    if !text.is_empty() {
        spans.push(Span::styled(decode_entities(text), style));
    }
}

/// Decode the five escape entities back to literal characters; anything
/// else starting with `&` stays as-is.
fn decode_entities(s: &str) -> String {
    const ENTITIES: &[(&str, char)] = &[
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#039;", '\''),
    ];

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn one_line_per_structural_tag() {
        let fragment = Markup::new()
            .tagged("t", "KTH")
            .tagged("m", "M.Sc.")
            .tagged("d", "2020-2025");
        let lines = fragment_lines(&fragment);
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "KTH");
        assert_eq!(line_text(&lines[1]), "M.Sc.");
        assert_eq!(line_text(&lines[2]), "2020-2025");
        assert_eq!(lines[0].spans[0].style, Theme::item_title_style());
        assert_eq!(lines[1].spans[0].style, Theme::item_meta_style());
        assert_eq!(lines[2].spans[0].style, Theme::item_detail_style());
    }

    #[test]
    fn escaped_data_comes_back_as_literal_characters() {
        let fragment = Markup::new().tagged("t", "<b>&\"'</b>");
        let lines = fragment_lines(&fragment);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "<b>&\"'</b>");
    }

    #[test]
    fn data_that_spells_a_tag_is_not_structure() {
        // A title containing the literal text `<t>x</t>` must render as that
        // text on a single title line, not as an extra structural tag.
        let fragment = Markup::new().tagged("t", "<t>x</t>").tagged("d", "ok");
        let lines = fragment_lines(&fragment);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "<t>x</t>");
        assert_eq!(line_text(&lines[1]), "ok");
    }

    #[test]
    fn unknown_entities_stay_literal() {
        assert_eq!(decode_entities("fish &chips;"), "fish &chips;");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("a&"), "a&");
    }

    #[test]
    fn empty_fields_produce_no_line() {
        let fragment = Markup::new().tagged("t", "English").tagged("d", "");
        let lines = fragment_lines(&fragment);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "English");
    }
}
