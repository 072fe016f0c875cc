//! Configuration for the vectorizer and the bot.
//!
//! Defaults reproduce the reference behavior; a JSON file can override any
//! subset of fields (missing fields keep their defaults).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{KbError, Result};

/// Knowledge-base file used when no path is given.
pub const DEFAULT_KB_PATH: &str = "kb.json";

/// Number of ranked results returned per query.
pub const DEFAULT_TOP_K: usize = 3;

/// Upper bound on vocabulary size.
pub const DEFAULT_MAX_FEATURES: usize = 12_000;

/// Minimum word length in characters; shorter words are not tokens.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Inputs that end the interactive loop (compared case-insensitively).
pub const EXIT_KEYWORDS: [&str; 3] = ["sair", "exit", "quit"];

/// Tokenization and vocabulary settings, fixed at fit time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    pub max_features: usize,
    pub min_token_len: usize,
    pub lowercase: bool,
    /// Empty by default
    pub stop_words: Vec<String>,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            lowercase: true,
            stop_words: Vec::new(),
        }
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(KbError::InvalidConfig("max_features must be at least 1".into()));
        }
        if self.min_token_len == 0 {
            return Err(KbError::InvalidConfig("min_token_len must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(KbError::InvalidConfig("top_k must be at least 1".into()));
        }
        Ok(())
    }
}

/// Complete bot configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub vectorizer: VectorizerConfig,
    pub search: SearchConfig,
}

impl BotConfig {
    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| KbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BotConfig = serde_json::from_str(&raw).map_err(|source| KbError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        self.search.validate()
    }
}

/// True when `input` is one of [`EXIT_KEYWORDS`], ignoring case and
/// surrounding whitespace.
pub fn is_exit_keyword(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    EXIT_KEYWORDS.iter().any(|k| *k == input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = BotConfig::default();
        assert_eq!(config.vectorizer.max_features, 12_000);
        assert_eq!(config.vectorizer.min_token_len, 2);
        assert!(config.vectorizer.lowercase);
        assert!(config.vectorizer.stop_words.is_empty());
        assert_eq!(config.search.top_k, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: BotConfig = serde_json::from_str(r#"{"search": {"top_k": 5}}"#).unwrap();
        assert_eq!(config.search.top_k, 5);
        assert_eq!(config.vectorizer, VectorizerConfig::default());
    }

    #[test]
    fn zero_values_are_rejected() {
        let mut config = BotConfig::default();
        config.search.top_k = 0;
        assert!(matches!(config.validate(), Err(KbError::InvalidConfig(_))));

        let mut config = BotConfig::default();
        config.vectorizer.max_features = 0;
        assert!(matches!(config.validate(), Err(KbError::InvalidConfig(_))));
    }

    #[test]
    fn exit_keywords_ignore_case() {
        assert!(is_exit_keyword("SAIR"));
        assert!(is_exit_keyword(" Quit "));
        assert!(is_exit_keyword("exit"));
        assert!(!is_exit_keyword("exit now"));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = BotConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, KbError::Io { .. }));
    }
}
