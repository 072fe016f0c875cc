//! This crate answers free-text questions against a small, static knowledge
//! base, ranking entries with a TF-IDF vector space model and cosine similarity.

pub mod config;
pub mod error;
pub mod kb;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Vectorizer
/// The fitted retrieval engine of this crate.
/// It converts a document collection into L2-normalized TF-IDF vectors once,
/// then vectorizes and ranks queries against them.
///
/// Internally, it holds:
/// - The tokenizer used at fit time
/// - The bounded vocabulary (token -> feature index)
/// - The IDF weight of every feature
/// - One sparse vector per document
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine type (e.g., `DefaultTFIDFEngine`)
///
/// Nothing changes after `fit`; there is no incremental update.
pub use vectorizer::TFIDFVectorizer;

/// Corpus statistics for the IDF calculation
/// Keeps the number of documents and, for every token, the number of
/// documents in which it appears. It does not store document text or keys.
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// Raw occurrence counts of every token of one text.
pub use vectorizer::term::TermFrequency;

/// Tokenizer
/// Lowercased unigram and bigram tokens over word-character runs.
pub use vectorizer::token::{NGrams, TokenStream, Tokenizer};

/// Vocabulary
/// The retained tokens and their feature indices, plus the builder that
/// selects them.
pub use vectorizer::vocab::{Vocabulary, VocabularyBuilder};

/// TF IDF Calculation Engine Trait
/// Defines how TF, IDF and the final document weights are computed.
/// `DefaultTFIDFEngine` uses raw term counts and smoothed IDF,
/// `ln((1 + n) / (1 + df)) + 1`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Search Hits and Hit Entry structures
/// - `Hits`: ranked list of results
/// - `HitEntry`: a document position and its cosine similarity
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

/// Sparse vector used for documents and queries
pub use utils::math::vector::ZeroSpVec;

pub use config::{BotConfig, SearchConfig, VectorizerConfig};
pub use error::{KbError, Result};
pub use kb::{load_kb, parse_kb, Document, KnowledgeBot, RankedResult};
