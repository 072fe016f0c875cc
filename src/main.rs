//! Local security knowledge bot.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session over ./kb.json
//! tfidf-kb
//!
//! # Another knowledge base, five results per answer
//! tfidf-kb data/kb.json --top-k 5
//!
//! # One question, then exit
//! tfidf-kb --query "o que é xss"
//! ```

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tfidf_kb::{
    config::{BotConfig, DEFAULT_KB_PATH},
    kb::{load_kb, run_session, KnowledgeBot},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Answer questions from a local JSON knowledge base.
#[derive(Parser)]
#[command(name = "tfidf-kb", version, about)]
struct Cli {
    /// Knowledge-base file
    #[arg(default_value = DEFAULT_KB_PATH)]
    kb_path: PathBuf,

    /// Results per answer (best match plus related)
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Upper bound on vocabulary size
    #[arg(long)]
    max_features: Option<usize>,

    /// JSON file with vectorizer/search settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Answer a single question and exit
    #[arg(short, long)]
    query: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn bot_config(&self) -> Result<BotConfig> {
        let mut config = match &self.config {
            Some(path) => BotConfig::from_file(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => BotConfig::default(),
        };
        if let Some(top_k) = self.top_k {
            config.search.top_k = top_k;
        }
        if let Some(max_features) = self.max_features {
            config.vectorizer.max_features = max_features;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = cli.bot_config()?;

    let start = Instant::now();
    let items = load_kb(&cli.kb_path)
        .with_context(|| format!("loading knowledge base {}", cli.kb_path.display()))?;
    let bot = KnowledgeBot::new(items, &config).context("building the search index")?;
    info!(
        items = bot.items().len(),
        vocabulary = bot.vectorizer().vocabulary().len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "ready"
    );

    match cli.query.as_deref().map(str::trim) {
        Some(question) if !question.is_empty() => println!("{}", bot.answer(question)),
        Some(_) => anyhow::bail!("empty query"),
        None => run_session(&bot, io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}
