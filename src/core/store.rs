//! Content loading — the one-shot fetch that feeds the whole session.
//!
//! The load runs exactly once at startup. On success the document is handed
//! to the application state and treated as read-only; on failure the session
//! enters the error view permanently, with no retry and no timeout beyond
//! what the transport imposes.

use std::path::PathBuf;

use reqwest::header::CACHE_CONTROL;
use thiserror::Error;

use super::content::ContentDocument;

/// Where the content document comes from.
#[derive(Debug, Clone)]
pub enum ContentSource {
    File(PathBuf),
    Url(String),
}

impl ContentSource {
    /// Interpret a CLI/config value: anything with an http(s) scheme is a
    /// URL, everything else a filesystem path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            ContentSource::Url(s.to_string())
        } else {
            ContentSource::File(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Why the content document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("content request failed with status {status}")]
    Status { status: u16 },

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch and parse the content document.
///
/// URL loads send `Cache-Control: no-cache` so a stale intermediary copy is
/// never served; a non-success status is a [`LoadError::Status`], not a
/// parse attempt on an error body.
pub async fn load(source: &ContentSource) -> Result<ContentDocument, LoadError> {
    let raw = match source {
        ContentSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        ContentSource::Url(url) => {
            let response = reqwest::Client::new()
                .get(url)
                .header(CACHE_CONTROL, "no-cache")
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    status: status.as_u16(),
                });
            }
            response.text().await?
        }
    };

    let doc: ContentDocument = serde_json::from_str(&raw)?;
    tracing::debug!("loaded content from {source}: {} work items", doc.work.len());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn loads_a_document_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "intro": {{ "text": "hello" }} }}"#).expect("write");

        let source = ContentSource::File(file.path().to_path_buf());
        let doc = load(&source).await.expect("load");
        assert_eq!(doc.intro.text, "hello");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = ContentSource::File(PathBuf::from("/nonexistent/content.json"));
        let err = load(&source).await.expect_err("must fail");
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write");

        let source = ContentSource::File(file.path().to_path_buf());
        let err = load(&source).await.expect_err("must fail");
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("malformed content document"));
    }

    #[test]
    fn source_parsing_distinguishes_urls_from_paths() {
        assert!(matches!(
            ContentSource::parse("https://example.com/content.json"),
            ContentSource::Url(_)
        ));
        assert!(matches!(
            ContentSource::parse("http://localhost:8080/c.json"),
            ContentSource::Url(_)
        ));
        assert!(matches!(
            ContentSource::parse("content.json"),
            ContentSource::File(_)
        ));
    }
}
