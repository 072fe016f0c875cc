use tracing::debug;

use crate::{
    config::{BotConfig, SearchConfig},
    error::{KbError, Result},
    kb::document::Document,
    vectorizer::TFIDFVectorizer,
};

/// Reply used when nothing in the knowledge base matches.
pub const NO_MATCH_REPLY: &str = "Não encontrei algo direto na base ainda.\n\
Tenta perguntar usando termos como: OWASP, ISO 27001, XSS, SQLi, MFA, GDPR.\n\
Ou adicione um novo item no kb.json 😄";

/// A document and its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedResult<'a> {
    pub document: &'a Document,
    pub score: f64,
}

/// Question answering over a fixed set of documents.
///
/// Owns the documents and the fitted vectorizer; both are immutable after
/// construction, so `&KnowledgeBot` can be shared across threads.
#[derive(Debug, Clone)]
pub struct KnowledgeBot {
    items: Vec<Document>,
    vectorizer: TFIDFVectorizer<f64>,
    search: SearchConfig,
}

impl KnowledgeBot {
    /// Index `items`.
    /// Fails when `items` is empty or the configuration is invalid.
    pub fn new(items: Vec<Document>, config: &BotConfig) -> Result<Self> {
        config.validate()?;
        if items.is_empty() {
            return Err(KbError::EmptyKnowledgeBase);
        }
        let corpus: Vec<String> = items.iter().map(Document::corpus_text).collect();
        let vectorizer = TFIDFVectorizer::fit(&corpus, &config.vectorizer)?;
        Ok(Self {
            items,
            vectorizer,
            search: config.search.clone(),
        })
    }

    pub fn items(&self) -> &[Document] {
        &self.items
    }

    pub fn vectorizer(&self) -> &TFIDFVectorizer<f64> {
        &self.vectorizer
    }

    /// Up to `top_k` documents with positive similarity, best first
    pub fn search(&self, query: &str, top_k: usize) -> Vec<RankedResult<'_>> {
        self.vectorizer
            .search(query, top_k)
            .into_iter()
            .filter_map(|hit| {
                self.items.get(hit.doc_idx).map(|document| RankedResult {
                    document,
                    score: hit.score,
                })
            })
            .collect()
    }

    /// Human-readable reply for `query`, using the configured `top_k`
    pub fn answer(&self, query: &str) -> String {
        let results = self.search(query, self.search.top_k);
        debug!(query, results = results.len(), "answering");
        format_answer(&results)
    }
}

/// Best match in full, then the other matches as a related list.
pub fn format_answer(results: &[RankedResult<'_>]) -> String {
    let Some((best, related)) = results.split_first() else {
        return NO_MATCH_REPLY.to_string();
    };

    let mut lines = vec![
        format!("📌 {}", best.document.title),
        best.document.content.trim().to_string(),
        String::new(),
        format!(
            "🔎 Fonte: {} | ID: {} | Relevância: {:.2}",
            best.document.source, best.document.id, best.score
        ),
    ];

    if !related.is_empty() {
        lines.push(String::new());
        lines.push("➡️ Relacionados:".to_string());
        for result in related {
            lines.push(format!(
                "- {} (ID: {}, {:.2})",
                result.document.title, result.document.id, result.score
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, title: &str, content: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            tags: Vec::new(),
            content: content.to_string(),
            source: "test".to_string(),
        }
    }

    fn bot() -> KnowledgeBot {
        KnowledgeBot::new(
            vec![
                doc("xss", "Cross Site Scripting", "Cross site scripting injects scripts into pages."),
                doc("dos", "Denial of Service", "Denial of service attack floods a service."),
                doc("sqli", "SQL Injection", "SQL injection abuses unescaped queries."),
            ],
            &BotConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn empty_items_fail() {
        let err = KnowledgeBot::new(Vec::new(), &BotConfig::default()).unwrap_err();
        assert!(matches!(err, KbError::EmptyKnowledgeBase));
    }

    #[test]
    fn search_returns_documents() {
        let bot = bot();
        let results = bot.search("cross site scripting", 3);
        assert_eq!(results[0].document.id, "xss");
        assert!(results.iter().all(|r| r.score > 0.0 && r.score <= 1.0));
    }

    #[test]
    fn answer_without_match_uses_guidance() {
        assert_eq!(bot().answer("qwzx"), NO_MATCH_REPLY);
    }

    #[test]
    fn answer_shows_best_match() {
        let reply = bot().answer("sql injection");
        let mut lines = reply.lines();
        assert_eq!(lines.next(), Some("📌 SQL Injection"));
        assert_eq!(lines.next(), Some("SQL injection abuses unescaped queries."));
        assert_eq!(lines.next(), Some(""));
        assert!(lines.next().unwrap().starts_with("🔎 Fonte: test | ID: sqli | Relevância: "));
    }

    #[test]
    fn format_lists_related_results() {
        let a = doc("a", "Alpha", "  alpha body \n");
        let b = doc("b", "Beta", "beta body");
        let results = [
            RankedResult { document: &a, score: 0.876 },
            RankedResult { document: &b, score: 0.1234 },
        ];
        assert_eq!(
            format_answer(&results),
            "📌 Alpha\nalpha body\n\n🔎 Fonte: test | ID: a | Relevância: 0.88\n\n➡️ Relacionados:\n- Beta (ID: b, 0.12)"
        );
    }

    #[test]
    fn format_single_result_has_no_related_section() {
        let a = doc("a", "Alpha", "body");
        let reply = format_answer(&[RankedResult { document: &a, score: 1.0 }]);
        assert_eq!(reply, "📌 Alpha\nbody\n\n🔎 Fonte: test | ID: a | Relevância: 1.00");
    }
}
