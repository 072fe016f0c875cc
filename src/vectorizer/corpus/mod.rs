use indexmap::IndexMap;

use crate::TermFrequency;

/// Keeps the document count and, for every token, the number of documents
/// containing it (document frequency).
///
/// It does not store document text or keys; it is the base data for the
/// IDF calculation.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    doc_num: u64,
    /// token -> number of documents containing it
    token_doc_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's distinct tokens to the corpus
    pub fn add_set<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for token in tokens {
            let token = token.as_ref();
            match self.token_doc_counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.token_doc_counts.insert(token.into(), 1);
                }
            }
        }
    }

    /// Add one document given its term frequency
    #[inline]
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.add_set(freq.term_set_iter());
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `token`
    #[inline]
    pub fn get_doc_freq(&self, token: &str) -> u64 {
        self.token_doc_counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens seen
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.token_doc_counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let mut corpus = Corpus::new();
        let d1: TermFrequency = ["attack", "attack", "xss"].into_iter().collect();
        let d2: TermFrequency = ["attack", "dos"].into_iter().collect();
        corpus.add_doc(&d1);
        corpus.add_doc(&d2);

        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_doc_freq("attack"), 2);
        assert_eq!(corpus.get_doc_freq("xss"), 1);
        assert_eq!(corpus.get_doc_freq("missing"), 0);
        assert_eq!(corpus.vocab_size(), 3);
    }

    #[test]
    fn empty_document_still_counts() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&TermFrequency::new());
        assert_eq!(corpus.get_doc_num(), 1);
        assert_eq!(corpus.vocab_size(), 0);
    }
}
