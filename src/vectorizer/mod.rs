pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;
pub mod token;
pub mod vocab;

use std::marker::PhantomData;
use std::time::Instant;

use num::Float;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    config::VectorizerConfig,
    error::{KbError, Result},
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::Tokenizer,
        vocab::{CorpusStats, Vocabulary, VocabularyBuilder},
    },
};

/// Fitted TF-IDF model over a fixed set of texts.
///
/// Everything is computed once by [`TFIDFVectorizer::fit`] and never changes
/// afterwards, so a fitted vectorizer can be shared between threads and
/// queried concurrently through `&self`.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine (e.g. `DefaultTFIDFEngine`)
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    tokenizer: Tokenizer,
    vocabulary: Vocabulary,
    idf: IDFVector<N>,
    /// One vector per document, indexed by document position
    documents: Vec<TFVector<N>>,
    _marker: PhantomData<E>,
}

/// Weighted vector of one document
#[derive(Debug, Clone)]
pub struct TFVector<N>
where
    N: Float,
{
    /// L2-normalized TF-IDF weights, sparse
    pub tfidf_vec: ZeroSpVec<N>,
    /// Number of tokens in the document before vocabulary filtering
    pub token_sum: u64,
}

#[derive(Debug, Clone)]
pub struct IDFVector<N> {
    /// IDF Vector, dense because every vocabulary entry has a weight
    pub idf_vec: Vec<N>,
    /// document count
    pub doc_num: u64,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Fit vocabulary, IDF weights and document vectors.
    ///
    /// Fails with [`KbError::EmptyKnowledgeBase`] when `texts` is empty.
    /// A corpus without any usable token is accepted; every query against it
    /// returns no hits.
    pub fn fit<S>(texts: &[S], config: &VectorizerConfig) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        config.validate()?;
        if texts.is_empty() {
            return Err(KbError::EmptyKnowledgeBase);
        }
        let start = Instant::now();

        let tokenizer = Tokenizer::from_config(config);
        let CorpusStats {
            vocabulary,
            term_freqs,
            corpus,
        } = VocabularyBuilder::new(&tokenizer, config.max_features).build(texts);

        // IDF must be complete before any document vector is weighted
        let idf = E::idf_vec(&corpus, &vocabulary);

        let documents: Vec<TFVector<N>> = term_freqs
            .par_iter()
            .map(|freq| TFVector {
                tfidf_vec: E::tfidf_vec(freq, &vocabulary, &idf),
                token_sum: freq.term_sum(),
            })
            .collect();

        if vocabulary.is_empty() {
            warn!(documents = documents.len(), "corpus has no usable tokens; every query will return no hits");
        }
        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "tf-idf index fitted"
        );

        Ok(Self {
            tokenizer,
            vocabulary,
            idf,
            documents,
            _marker: PhantomData,
        })
    }

    /// Vectorize an arbitrary text with the fitted vocabulary and IDF weights.
    /// Unknown tokens are ignored; the result has the vocabulary's dimension.
    pub fn transform(&self, text: &str) -> ZeroSpVec<N> {
        let freq = self.tokenizer.tokenize(text).iter().collect();
        E::tfidf_vec(&freq, &self.vocabulary, &self.idf)
    }
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &IDFVector<N> {
        &self.idf
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Vector of the document at position `doc_idx`
    pub fn get_doc(&self, doc_idx: usize) -> Option<&TFVector<N>> {
        self.documents.get(doc_idx)
    }

    pub fn documents(&self) -> &[TFVector<N>] {
        &self.documents
    }
}
