use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    error::{KbError, Result},
    kb::document::Document,
};

/// Shape of the knowledge-base file: `{"items": [...]}`
#[derive(Debug, Deserialize)]
struct KnowledgeBaseFile {
    #[serde(default)]
    items: Vec<Document>,
}

/// Parse knowledge-base JSON text.
/// Fails with [`KbError::EmptyKnowledgeBase`] when there are no items.
pub fn parse_kb(raw: &str) -> Result<Vec<Document>> {
    let file: KnowledgeBaseFile = serde_json::from_str(raw)?;
    if file.items.is_empty() {
        return Err(KbError::EmptyKnowledgeBase);
    }
    let unnamed = file.items.iter().filter(|d| d.id.is_empty()).count();
    if unnamed > 0 {
        warn!(count = unnamed, "items without id are indexed but cannot be referenced");
    }
    Ok(file.items)
}

/// Read and parse a knowledge-base file
pub fn load_kb(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| KbError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_kb(&raw).map_err(|err| match err {
        KbError::Json(source) => KbError::Parse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!(path = %path.display(), items = items.len(), "knowledge base loaded");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_items_in_order() {
        let items = parse_kb(
            r#"{"items": [{"id": "a", "title": "First"}, {"id": "b", "title": "Second"}]}"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].title, "Second");
    }

    #[test]
    fn empty_or_missing_items_is_a_configuration_error() {
        assert!(matches!(parse_kb(r#"{"items": []}"#), Err(KbError::EmptyKnowledgeBase)));
        assert!(matches!(parse_kb(r#"{}"#), Err(KbError::EmptyKnowledgeBase)));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(parse_kb("{ not json"), Err(KbError::Json(_))));
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"items": [{{"id": "mfa", "content": "Use MFA"}}]}}"#).unwrap();
        let items = load_kb(file.path()).unwrap();
        assert_eq!(items[0].id, "mfa");
    }

    #[test]
    fn load_errors_carry_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();
        match load_kb(file.path()) {
            Err(KbError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(load_kb("/no/such/kb.json"), Err(KbError::Io { .. })));
    }
}
