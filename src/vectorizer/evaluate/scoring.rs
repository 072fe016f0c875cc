use std::fmt::{self, Debug, Display};
use std::time::Instant;

use num::Float;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{tfidf::TFIDFEngine, TFIDFVectorizer},
};

/// One ranked document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    /// Position of the document in the fitted corpus
    pub doc_idx: usize,
    /// Cosine similarity, in [0, 1]
    pub score: f64,
}

/// Structure to store search results
#[derive(Clone, Default, PartialEq)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score.
    /// The sort is stable: equal scores keep corpus order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|hit| !hit.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Drop every hit whose score is not strictly positive
    pub fn retain_positive(&mut self) -> &mut Self {
        self.list.retain(|hit| hit.score > 0.0);
        self
    }

    /// Keep the first `k` hits
    pub fn truncate(&mut self, k: usize) -> &mut Self {
        self.list.truncate(k);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry> {
        self.list.iter()
    }
}

impl IntoIterator for Hits {
    type Item = HitEntry;
    type IntoIter = std::vec::IntoIter<HitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // each hit on a new line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    #{}: {:.6}", hit.doc_idx, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{}\t{:.6}\t#{}", rank + 1, hit.score, hit.doc_idx)?;
        }
        Ok(())
    }
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Cosine similarity between `query_vec` and every document, in corpus order.
    ///
    /// Both sides are unit-normalized, so the cosine is the dot product.
    /// Scores are clamped to 1.0 to absorb rounding.
    pub fn similarity(&self, query_vec: &ZeroSpVec<N>) -> Hits {
        if query_vec.is_zero() {
            return Hits::new(
                (0..self.doc_num())
                    .map(|doc_idx| HitEntry { doc_idx, score: 0.0 })
                    .collect(),
            );
        }
        let list = self
            .documents()
            .par_iter()
            .enumerate()
            .map(|(doc_idx, doc)| {
                let dot: f64 = query_vec.dot(&doc.tfidf_vec);
                HitEntry {
                    doc_idx,
                    score: dot.clamp(0.0, 1.0),
                }
            })
            .collect();
        Hits::new(list)
    }

    /// Rank documents against `query`.
    ///
    /// Returns at most `top_k` hits with a strictly positive score, best
    /// first; equal scores keep corpus order. An empty result is a normal
    /// outcome (no shared tokens), not an error.
    pub fn search(&self, query: &str, top_k: usize) -> Hits {
        let start = Instant::now();
        let query_vec = self.transform(query);
        if query_vec.is_zero() {
            debug!(query, "no known tokens in query");
            return Hits::default();
        }

        let mut hits = self.similarity(&query_vec);
        hits.sort_by_score_desc().truncate(top_k).retain_positive();

        debug!(
            query,
            features = query_vec.nnz(),
            hits = hits.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "search done"
        );
        hits
    }
}
