//! The content document — the structured data driving all three tabs.
//!
//! Every field defaults: the external document may omit any key at any
//! nesting level and deserialization still succeeds, yielding empty strings
//! and empty lists. Once loaded the document is never mutated; rendering
//! always re-derives display nodes from it.

use serde::Deserialize;

/// Root of the content document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub intro: Intro,
    #[serde(default)]
    pub about: About,
    /// Work items in source order — rendering must not reorder them.
    #[serde(default)]
    pub work: Vec<WorkItem>,
}

/// Text block shown on the intro tab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Intro {
    #[serde(default)]
    pub text: String,
}

/// Skills and experience shown on the about tab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct About {
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub experience: Experience,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub areas: Vec<Entry>,
    #[serde(default)]
    pub programming: Vec<Entry>,
    #[serde(default)]
    pub languages: Vec<Entry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub education: Vec<EntryWithMeta>,
}

/// Title + detail listing item (skills, languages).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

/// Listing item with an extra meta line (education).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryWithMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta: String,
    #[serde(default)]
    pub detail: String,
}

/// One project entry on the work tab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_fully_defaulted_document() {
        let doc: ContentDocument = serde_json::from_str("{}").expect("parse");
        assert_eq!(doc.intro.text, "");
        assert!(doc.about.skills.areas.is_empty());
        assert!(doc.about.skills.programming.is_empty());
        assert!(doc.about.skills.languages.is_empty());
        assert!(doc.about.experience.education.is_empty());
        assert!(doc.work.is_empty());
    }

    #[test]
    fn partial_nesting_defaults_the_missing_leaves() {
        let json = r#"{
            "about": { "skills": { "programming": [ { "title": "Rust" } ] } },
            "work": [ { "title": "A" } ]
        }"#;
        let doc: ContentDocument = serde_json::from_str(json).expect("parse");
        assert!(doc.about.skills.areas.is_empty());
        assert_eq!(doc.about.skills.programming.len(), 1);
        assert_eq!(doc.about.skills.programming[0].title, "Rust");
        assert_eq!(doc.about.skills.programming[0].detail, "");
        assert_eq!(doc.work[0].title, "A");
        assert_eq!(doc.work[0].date, "");
    }

    #[test]
    fn full_document_parses() {
        let json = r#"{
            "intro": { "text": "line one\nline two" },
            "about": {
                "skills": {
                    "areas": [ { "title": "Design", "detail": "layouts" } ],
                    "programming": [ { "title": "Rust", "detail": "TUIs" } ],
                    "languages": [ { "title": "English", "detail": "Native" } ]
                },
                "experience": {
                    "education": [
                        { "title": "KTH", "meta": "M.Sc.", "detail": "2020-2025" }
                    ]
                }
            },
            "work": [
                { "title": "A", "date": "2021", "desc": "x" },
                { "title": "B", "date": "2022", "desc": "y" }
            ]
        }"#;
        let doc: ContentDocument = serde_json::from_str(json).expect("parse");
        assert_eq!(doc.intro.text, "line one\nline two");
        assert_eq!(doc.about.experience.education[0].meta, "M.Sc.");
        assert_eq!(doc.work.len(), 2);
        assert_eq!(doc.work[1].desc, "y");
    }
}
