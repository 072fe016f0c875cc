use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One knowledge-base entry.
///
/// Every field is optional in the source file. Scalars of any JSON type are
/// accepted and stringified; absent or `null` fields become empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
}

impl Document {
    /// Text that gets indexed for this document: title, tags, content and
    /// source on separate lines.
    pub fn corpus_text(&self) -> String {
        format!(
            "{}\nTags: {}\n{}\nFonte: {}",
            self.title,
            self.tags.join(" "),
            self.content,
            self.source
        )
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

/// Array of scalars, a single scalar (one tag), or nothing
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(value_to_string).collect(),
        other => vec![value_to_string(&other)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record() {
        let doc: Document = serde_json::from_str(
            r#"{"id": "xss-01", "title": "XSS", "tags": ["owasp", "web"], "content": "Escape output.", "source": "OWASP"}"#,
        )
        .unwrap();
        assert_eq!(doc.id, "xss-01");
        assert_eq!(doc.tags, vec!["owasp", "web"]);
        assert_eq!(
            doc.corpus_text(),
            "XSS\nTags: owasp web\nEscape output.\nFonte: OWASP"
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let doc: Document = serde_json::from_str(r#"{"content": "only content"}"#).unwrap();
        assert_eq!(doc.id, "");
        assert_eq!(doc.title, "");
        assert!(doc.tags.is_empty());
        assert_eq!(doc.source, "");
        assert_eq!(doc.corpus_text(), "\nTags: \nonly content\nFonte: ");
    }

    #[test]
    fn scalars_are_stringified() {
        let doc: Document =
            serde_json::from_str(r#"{"id": 42, "title": null, "tags": [1, "mfa", true], "source": 2.5}"#).unwrap();
        assert_eq!(doc.id, "42");
        assert_eq!(doc.title, "");
        assert_eq!(doc.tags, vec!["1", "mfa", "true"]);
        assert_eq!(doc.source, "2.5");
    }

    #[test]
    fn single_tag_string_is_one_tag() {
        let doc: Document = serde_json::from_str(r#"{"tags": "gdpr"}"#).unwrap();
        assert_eq!(doc.tags, vec!["gdpr"]);
    }
}
