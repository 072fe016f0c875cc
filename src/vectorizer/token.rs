use std::collections::HashSet;
use std::ops::Range;

use crate::config::VectorizerConfig;

/// Splits text into lowercase unigram and bigram tokens.
///
/// A word is a maximal run of alphanumeric characters or `_`. Every other
/// character is a boundary. Words shorter than `min_token_len` characters and
/// words found in the stop word set are dropped before n-grams are formed.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lowercase: bool,
    min_token_len: usize,
    stop_words: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::from_config(&VectorizerConfig::default())
    }
}

impl Tokenizer {
    pub fn from_config(config: &VectorizerConfig) -> Self {
        Self {
            lowercase: config.lowercase,
            min_token_len: config.min_token_len,
            stop_words: config
                .stop_words
                .iter()
                .map(|w| if config.lowercase { w.to_lowercase() } else { w.clone() })
                .collect(),
        }
    }

    #[inline]
    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    /// Tokenize `text`.
    /// The returned stream owns the normalized buffer; iterate it with
    /// [`TokenStream::iter`] as many times as needed.
    pub fn tokenize(&self, text: &str) -> TokenStream {
        let buffer = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut words = Vec::new();
        let mut start: Option<usize> = None;
        let mut chars = 0usize;
        for (i, c) in buffer.char_indices() {
            if Self::is_word_char(c) {
                if start.is_none() {
                    start = Some(i);
                    chars = 0;
                }
                chars += 1;
            } else if let Some(s) = start.take() {
                self.push_word(&buffer, s..i, chars, &mut words);
            }
        }
        // trailing word without separator
        if let Some(s) = start {
            self.push_word(&buffer, s..buffer.len(), chars, &mut words);
        }

        TokenStream { buffer, words }
    }

    #[inline]
    fn push_word(&self, buffer: &str, span: Range<usize>, chars: usize, words: &mut Vec<Range<usize>>) {
        if chars < self.min_token_len {
            return;
        }
        if !self.stop_words.is_empty() && self.stop_words.contains(&buffer[span.clone()]) {
            return;
        }
        words.push(span);
    }
}

/// Normalized text plus the byte spans of its surviving words.
#[derive(Debug, Clone)]
pub struct TokenStream {
    buffer: String,
    words: Vec<Range<usize>>,
}

impl TokenStream {
    /// Lazy iterator over unigrams, then bigrams
    #[inline]
    pub fn iter(&self) -> NGrams<'_> {
        NGrams {
            stream: self,
            n: 1,
            pos: 0,
        }
    }

    /// Number of words (unigrams)
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    fn word(&self, i: usize) -> &str {
        &self.buffer[self.words[i].clone()]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = String;
    type IntoIter = NGrams<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the n-grams of a [`TokenStream`].
/// Yields every unigram in input order, then every bigram in input order.
#[derive(Debug, Clone)]
pub struct NGrams<'a> {
    stream: &'a TokenStream,
    n: usize,
    pos: usize,
}

impl Iterator for NGrams<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.stream.words.len();
        if self.n == 1 {
            if self.pos < len {
                let word = self.stream.word(self.pos).to_string();
                self.pos += 1;
                return Some(word);
            }
            self.n = 2;
            self.pos = 0;
        }
        if self.n == 2 && self.pos + 1 < len {
            let first = self.stream.word(self.pos);
            let second = self.stream.word(self.pos + 1);
            let mut gram = String::with_capacity(first.len() + second.len() + 1);
            gram.push_str(first);
            gram.push(' ');
            gram.push_str(second);
            self.pos += 1;
            return Some(gram);
        }
        self.n = 3;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stream.words.len();
        let bigrams = len.saturating_sub(1);
        let remaining = match self.n {
            1 => (len - self.pos) + bigrams,
            2 => bigrams.saturating_sub(self.pos),
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NGrams<'_> {}

impl std::iter::FusedIterator for NGrams<'_> {}
