use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency struct
/// Counts raw occurrences of each term in one text (or in a merged set of texts).
/// Terms keep the order in which they were first seen, so iteration is deterministic.
///
/// # Examples
/// ```
/// use tfidf_kb::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("xss");
/// term_freq.add_term("csrf");
/// term_freq.add_term("xss");
///
/// assert_eq!(term_freq.term_count("xss"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        match self.term_count.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.term_count.insert(term.to_string(), 1);
            }
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - terms to add
    #[inline]
    pub fn add_terms<I, T>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Merge with another TermFrequency
    /// # Arguments
    /// * `other` - Another TermFrequency to merge with
    pub fn add_terms_from_freq(&mut self, other: &TermFrequency) -> &mut Self {
        for (term, &count) in &other.term_count {
            match self.term_count.get_mut(term.as_str()) {
                Some(entry) => *entry += count,
                None => {
                    self.term_count.insert(term.clone(), count);
                }
            }
            self.total_term_count += count;
        }
        self
    }
}

impl<T> FromIterator<T> for TermFrequency
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(iter);
        tf
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Iterate over all terms and their counts, in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Iterate over the set of distinct terms
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|s| s.as_str())
    }

    /// Get the total count of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Get the occurrence count for a specific term
    ///
    /// # Arguments
    /// * `term` - term
    ///
    /// # Returns
    /// * `u64` - Occurrence count for the term, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Check if a term exists
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Get the number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Terms sorted by frequency (descending).
    /// Equal counts are ordered lexicographically so the result does not
    /// depend on insertion order.
    ///
    /// # Returns
    /// * `Vec<(&str, u64)>` - terms sorted by frequency
    pub fn sorted_frequency_vector(&self) -> Vec<(&str, u64)> {
        let mut term_list: Vec<(&str, u64)> = self.iter().collect();
        term_list.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        term_list
    }
}
