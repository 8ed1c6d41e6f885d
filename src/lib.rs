//! # Interlineal
//!
//! Hebrew Old Testament text with a word-by-word Spanish interlinear.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Parsers → Merge → Store → UI
//! ```
//!
//! Three sources feed each book: a shared Spanish markup file (glosses and
//! full verse text for every book), and per book either Hebrew markup or a
//! structured per-word JSON file that already carries glosses.
//!
//! ## Quick Start
//!
//! ```bash
//! # List books
//! interlineal books
//!
//! # Show Genesis 1:1 from a local data directory
//! interlineal --source ./data/bible show Genesis 1 1
//! ```

/// Application context and error types.
///
/// The [`AppContext`](app::AppContext) struct wires together fetcher,
/// store and loader.
pub mod app;

/// Command-line interface using clap.
///
/// - `books` - List the book catalog
/// - `show <book> <chapter> [verse]` - Print the interlinear text
pub mod cli;

/// Configuration loaded from `~/.config/interlineal/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Word`](domain::Word): Hebrew token with its Spanish gloss
/// - [`Verse`](domain::Verse), [`Chapter`](domain::Chapter), [`Book`](domain::Book)
/// - [`catalog`](domain::catalog): Old Testament book metadata
pub mod domain;

/// Raw source access.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait returning raw bytes
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`FileFetcher`](fetcher::FileFetcher): local data directory
/// - [`SourceReader`](fetcher::SourceReader): convention paths per source
pub mod fetcher;

/// Book loading: strategy selection, fetch, parse, merge and caching.
pub mod loader;

/// Positional alignment of Hebrew words with Spanish glosses.
pub mod merge;

/// Hebrew markup, structured JSON and Spanish markup parsers.
pub mod parser;

/// Session cache of loaded books.
///
/// - [`Store`](store::Store): Trait defining cache operations
/// - [`MemoryStore`](store::MemoryStore): In-memory implementation
pub mod store;
