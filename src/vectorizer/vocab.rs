use indexmap::IndexSet;
use rayon::prelude::*;
use tracing::debug;

use crate::vectorizer::{corpus::Corpus, term::TermFrequency, token::Tokenizer};

/// Fixed token -> feature index mapping.
/// Indices are contiguous from 0 and follow the selection ranking.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tokens: IndexSet<Box<str>>,
}

impl Vocabulary {
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Feature index of `token`, if it was retained
    #[inline]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.tokens.get_index_of(token)
    }

    /// Token stored at feature index `index`
    #[inline]
    pub fn token_at(&self, index: usize) -> Option<&str> {
        self.tokens.get_index(index).map(|t| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Tokens in feature index order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_ref())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(|t| Box::from(t.as_ref())).collect(),
        }
    }
}

/// Everything the vocabulary pass learns about the corpus
#[derive(Debug, Clone)]
pub struct CorpusStats {
    pub vocabulary: Vocabulary,
    /// Raw term counts per document, in document order
    pub term_freqs: Vec<TermFrequency>,
    /// Document frequencies
    pub corpus: Corpus,
}

/// Scans the corpus and selects the bounded feature set.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder<'a> {
    tokenizer: &'a Tokenizer,
    max_features: usize,
}

impl<'a> VocabularyBuilder<'a> {
    pub fn new(tokenizer: &'a Tokenizer, max_features: usize) -> Self {
        Self {
            tokenizer,
            max_features,
        }
    }

    /// Count every document and keep at most `max_features` tokens,
    /// ranked by total corpus frequency (ties in lexicographic order).
    pub fn build<S>(&self, texts: &[S]) -> CorpusStats
    where
        S: AsRef<str> + Sync,
    {
        // per-document counting is independent
        let term_freqs: Vec<TermFrequency> = texts
            .par_iter()
            .map(|text| {
                let stream = self.tokenizer.tokenize(text.as_ref());
                stream.iter().collect::<TermFrequency>()
            })
            .collect();

        // reduce in document order
        let mut corpus = Corpus::new();
        let mut totals = TermFrequency::new();
        for freq in &term_freqs {
            corpus.add_doc(freq);
            totals.add_terms_from_freq(freq);
        }

        let vocabulary: Vocabulary = totals
            .sorted_frequency_vector()
            .into_iter()
            .take(self.max_features)
            .map(|(token, _)| token)
            .collect();

        debug!(
            distinct = totals.term_num(),
            retained = vocabulary.len(),
            max_features = self.max_features,
            "vocabulary selected"
        );

        CorpusStats {
            vocabulary,
            term_freqs,
            corpus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_frequency_then_lexicographic_order() {
        let tokenizer = Tokenizer::default();
        let stats = VocabularyBuilder::new(&tokenizer, 100).build(&["bb aa bb", "cc aa bb"]);
        let vocab = &stats.vocabulary;
        // bb:3, aa:2, then count-1 tokens in lexicographic order
        let expected = ["bb", "aa", "aa bb", "bb aa", "cc", "cc aa"];
        assert_eq!(vocab.iter().collect::<Vec<_>>(), expected);
        for (i, token) in expected.iter().enumerate() {
            assert_eq!(vocab.index_of(token), Some(i));
            assert_eq!(vocab.token_at(i), Some(*token));
        }
        assert_eq!(stats.corpus.get_doc_num(), 2);
        assert_eq!(stats.corpus.get_doc_freq("bb"), 2);
        assert_eq!(stats.term_freqs[0].term_count("bb"), 2);
    }

    #[test]
    fn feature_cap_is_respected() {
        let tokenizer = Tokenizer::default();
        let stats = VocabularyBuilder::new(&tokenizer, 2).build(&["bb aa bb", "cc aa bb"]);
        assert_eq!(stats.vocabulary.iter().collect::<Vec<_>>(), vec!["bb", "aa"]);
        assert!(!stats.vocabulary.contains("cc"));
        // document frequencies still cover every token
        assert_eq!(stats.corpus.get_doc_freq("cc"), 1);
    }

    #[test]
    fn empty_documents_give_empty_vocabulary() {
        let tokenizer = Tokenizer::default();
        let stats = VocabularyBuilder::new(&tokenizer, 10).build(&["", " . "]);
        assert!(stats.vocabulary.is_empty());
        assert_eq!(stats.term_freqs.len(), 2);
        assert_eq!(stats.corpus.get_doc_num(), 2);
    }

    #[test]
    fn build_is_deterministic() {
        let tokenizer = Tokenizer::default();
        let texts = ["zeta alpha", "alpha beta gamma", "gamma zeta"];
        let a = VocabularyBuilder::new(&tokenizer, 50).build(&texts);
        let b = VocabularyBuilder::new(&tokenizer, 50).build(&texts);
        assert_eq!(
            a.vocabulary.iter().collect::<Vec<_>>(),
            b.vocabulary.iter().collect::<Vec<_>>()
        );
    }
}
