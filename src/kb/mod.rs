//! Knowledge-base records, the JSON loader and the question-answering bot
//! built on top of the vectorizer.

pub mod bot;
pub mod document;
pub mod loader;
pub mod session;

pub use bot::{format_answer, KnowledgeBot, RankedResult, NO_MATCH_REPLY};
pub use document::Document;
pub use loader::{load_kb, parse_kb};
pub use session::run_session;
