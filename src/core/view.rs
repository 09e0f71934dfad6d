//! Display-node tree and the pure per-tab builders.
//!
//! Builders map a slice of the content document into [`Node`]s; nothing in
//! this module depends on any TUI or rendering crate, so every builder is
//! unit-testable without a terminal. A separate commit step in `ui::stage`
//! turns the nodes into terminal cells.

use super::content::{ContentDocument, Entry, EntryWithMeta};
use super::escape::escape;

// ───────────────────────────────────────── tabs ──────────────

/// One of the three mutually exclusive display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Intro,
    About,
    Work,
}

impl Tab {
    /// Ordered list of all tabs (tab-bar display order).
    pub const ALL: &[Tab] = &[Tab::Intro, Tab::About, Tab::Work];

    /// Label shown on the tab control.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Intro => "Intro",
            Tab::About => "About",
            Tab::Work => "Work",
        }
    }

    /// Digit key that activates this tab.
    pub fn digit(self) -> char {
        match self {
            Tab::Intro => '1',
            Tab::About => '2',
            Tab::Work => '3',
        }
    }

    /// Tab activated by a digit key, if any.
    pub fn from_digit(c: char) -> Option<Tab> {
        match c {
            '1' => Some(Tab::Intro),
            '2' => Some(Tab::About),
            '3' => Some(Tab::Work),
            _ => None,
        }
    }

    /// Parse a tab name (config / CLI), case-insensitive.
    pub fn parse(s: &str) -> Option<Tab> {
        match s.to_lowercase().as_str() {
            "intro" => Some(Tab::Intro),
            "about" => Some(Tab::About),
            "work" => Some(Tab::Work),
            _ => None,
        }
    }

    /// Next tab in display order; clamps at the last one.
    pub fn next(self) -> Tab {
        match self {
            Tab::Intro => Tab::About,
            Tab::About | Tab::Work => Tab::Work,
        }
    }

    /// Previous tab in display order; clamps at the first one.
    pub fn prev(self) -> Tab {
        match self {
            Tab::Work => Tab::About,
            Tab::About | Tab::Intro => Tab::Intro,
        }
    }
}

// ───────────────────────────────────────── markup ────────────

/// A markup fragment assembled by string concatenation.
///
/// The only way user text enters a fragment is through [`Markup::tagged`],
/// which escapes it first; the structural tags themselves come from trusted
/// `'static` literals supplied by the builders. The commit step parses the
/// fragment, so un-escaped data containing `<` or `&` would be read as
/// structure — the type makes that impossible to assemble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` wrapped in `<tag>…</tag>`, escaping the text.
    pub fn tagged(mut self, tag: &'static str, text: &str) -> Self {
        self.0.push('<');
        self.0.push_str(tag);
        self.0.push('>');
        self.0.push_str(&escape(text));
        self.0.push_str("</");
        self.0.push_str(tag);
        self.0.push('>');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ───────────────────────────────────────── node tree ─────────

/// One node of the built display tree.
///
/// `Text` and `Work` carry plain text committed verbatim; `Section` items
/// are markup fragments and pass through the escaper when built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Multi-line plain text block, embedded newlines preserved.
    Text(String),
    /// Top-level section heading.
    Heading(String),
    /// Labelled sub-section listing markup items.
    Section { label: String, items: Vec<Markup> },
    /// Two-column split (about tab).
    Columns { left: Vec<Node>, right: Vec<Node> },
    /// One work entry: title, date, description as three plain-text fields.
    Work {
        title: String,
        date: String,
        desc: String,
    },
}

// ───────────────────────────────────────── builders ──────────

/// Build the display nodes for `tab` from the document.
pub fn build(tab: Tab, doc: &ContentDocument) -> Vec<Node> {
    match tab {
        Tab::Intro => build_intro(doc),
        Tab::About => build_about(doc),
        Tab::Work => build_work(doc),
    }
}

fn build_intro(doc: &ContentDocument) -> Vec<Node> {
    vec![Node::Text(doc.intro.text.clone())]
}

fn build_about(doc: &ContentDocument) -> Vec<Node> {
    let skills = &doc.about.skills;
    let experience = &doc.about.experience;

    let left = vec![
        Node::Heading("Skills".into()),
        section("Areas", skills.areas.iter().map(entry_item).collect()),
        section(
            "Programming",
            skills.programming.iter().map(entry_item).collect(),
        ),
    ];

    // Languages live under `skills` in the document but are listed in the
    // experience column, matching the page this data was authored for.
    let right = vec![
        Node::Heading("Experience".into()),
        section(
            "Education",
            experience.education.iter().map(education_item).collect(),
        ),
        section("Languages", skills.languages.iter().map(entry_item).collect()),
    ];

    vec![Node::Columns { left, right }]
}

fn build_work(doc: &ContentDocument) -> Vec<Node> {
    doc.work
        .iter()
        .map(|item| Node::Work {
            title: item.title.clone(),
            date: item.date.clone(),
            desc: item.desc.clone(),
        })
        .collect()
}

/// A sub-section is always emitted, even with no items, so a document with
/// a missing list still shows the (empty) section container.
fn section(label: &str, items: Vec<Markup>) -> Node {
    Node::Section {
        label: label.into(),
        items,
    }
}

fn entry_item(e: &Entry) -> Markup {
    Markup::new().tagged("t", &e.title).tagged("d", &e.detail)
}

fn education_item(e: &EntryWithMeta) -> Markup {
    Markup::new()
        .tagged("t", &e.title)
        .tagged("m", &e.meta)
        .tagged("d", &e.detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{Entry, WorkItem};

    fn doc_with_work() -> ContentDocument {
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
        doc
    }

    #[test]
    fn work_items_keep_source_order() {
        let nodes = build(Tab::Work, &doc_with_work());
        assert_eq!(nodes.len(), 2);
        match (&nodes[0], &nodes[1]) {
            (
                Node::Work { title: a, date: da, .. },
                Node::Work { title: b, date: db, .. },
            ) => {
                // Order is the document's, not the dates'.
                assert_eq!((a.as_str(), da.as_str()), ("A", "2021"));
                assert_eq!((b.as_str(), db.as_str()), ("B", "2022"));
            }
            other => panic!("expected two work nodes, got {other:?}"),
        }
    }

    #[test]
    fn about_always_contains_all_sections() {
        // Entirely empty document: every sub-section is present but empty.
        let nodes = build(Tab::About, &ContentDocument::default());
        let Node::Columns { left, right } = &nodes[0] else {
            panic!("about must be a two-column node");
        };

        let labels: Vec<&str> = left
            .iter()
            .chain(right.iter())
            .filter_map(|n| match n {
                Node::Section { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["Areas", "Programming", "Education", "Languages"]);

        for node in left.iter().chain(right.iter()) {
            if let Node::Section { items, .. } = node {
                assert!(items.is_empty());
            }
        }
    }

    #[test]
    fn about_items_are_escaped_fragments() {
        let mut doc = ContentDocument::default();
        doc.about.skills.areas.push(Entry {
            title: "<b>&\"'</b>".into(),
            detail: "a & b".into(),
        });
        let nodes = build(Tab::About, &doc);
        let Node::Columns { left, .. } = &nodes[0] else {
            panic!("about must be a two-column node");
        };
        let Node::Section { items, .. } = &left[1] else {
            panic!("Areas section expected");
        };
        assert_eq!(
            items[0].as_str(),
            "<t>&lt;b&gt;&amp;&quot;&#039;&lt;/b&gt;</t><d>a &amp; b</d>"
        );
    }

    #[test]
    fn intro_defaults_to_an_empty_text_block() {
        let nodes = build(Tab::Intro, &ContentDocument::default());
        assert_eq!(nodes, vec![Node::Text(String::new())]);
    }

    #[test]
    fn tab_digits_round_trip() {
        for &tab in Tab::ALL {
            assert_eq!(Tab::from_digit(tab.digit()), Some(tab));
        }
        assert_eq!(Tab::from_digit('4'), None);
    }

    #[test]
    fn tab_cycling_clamps_at_the_ends() {
        assert_eq!(Tab::Intro.prev(), Tab::Intro);
        assert_eq!(Tab::Intro.next(), Tab::About);
        assert_eq!(Tab::Work.next(), Tab::Work);
        assert_eq!(Tab::Work.prev(), Tab::About);
    }
}
