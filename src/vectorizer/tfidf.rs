use num::Float;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::Corpus, term::TermFrequency, vocab::Vocabulary, IDFVector},
};

/// TF-IDF calculation engine.
/// Implement this trait to plug a different weighting scheme into
/// `TFIDFVectorizer<N, E>`.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Build the IDF vector, one weight per vocabulary index
    /// # Arguments
    /// * `corpus` - document frequencies
    /// * `vocabulary` - retained tokens
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> IDFVector<N>;

    /// Build the TF vector of one text.
    /// Tokens missing from `vocabulary` are dropped.
    fn tf_vec(freq: &TermFrequency, vocabulary: &Vocabulary) -> ZeroSpVec<N>;

    /// tf * idf, then L2-normalized.
    /// A vector with no known tokens stays all-zero.
    fn tfidf_vec(freq: &TermFrequency, vocabulary: &Vocabulary, idf: &IDFVector<N>) -> ZeroSpVec<N> {
        let mut vec = Self::tf_vec(freq, vocabulary);
        vec.hadamard_dense(&idf.idf_vec);
        vec.l2_normalize();
        vec.shrink_to_fit();
        vec
    }
}

/// Default TF-IDF engine
///
/// - tf: raw count, no sublinear scaling
/// - idf: smoothed, `ln((1 + n) / (1 + df)) + 1`
///
/// Tokens present in every document get the smallest positive IDF (1.0);
/// tokens outside the vocabulary get no weight at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> IDFVector<N> {
        let doc_num = corpus.get_doc_num();
        let idf_vec = vocabulary
            .iter()
            .map(|token| {
                let idf = Self::idf_calc(doc_num, corpus.get_doc_freq(token));
                N::from(idf).unwrap_or_else(N::zero)
            })
            .collect();
        IDFVector { idf_vec, doc_num }
    }

    fn tf_vec(freq: &TermFrequency, vocabulary: &Vocabulary) -> ZeroSpVec<N> {
        let pairs = freq.iter().filter_map(|(token, count)| {
            let idx = vocabulary.index_of(token)?;
            Some((idx, N::from(count).unwrap_or_else(N::zero)))
        });
        ZeroSpVec::from_pairs(vocabulary.len(), pairs)
    }
}
