//! Error type shared by the loader, the vectorizer and the bot.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KbError>;

#[derive(Debug, Error)]
pub enum KbError {
    /// No documents to index
    #[error("knowledge base is empty: add items to the knowledge base file")]
    EmptyKnowledgeBase,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid knowledge base JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl KbError {
    /// True for errors caused by the input data or settings rather than I/O
    pub fn is_configuration(&self) -> bool {
        matches!(self, KbError::EmptyKnowledgeBase | KbError::InvalidConfig(_))
    }
}
