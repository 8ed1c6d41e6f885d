pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "interlineal")]
#[command(about = "Hebrew Old Testament with word-by-word Spanish glosses", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/interlineal/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the source location (base URL or local directory)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available books
    Books,
    /// Show a chapter or a single verse
    Show {
        /// Book identifier, e.g. Genesis or 1Samuel
        book: String,
        /// Chapter number
        chapter: u32,
        /// Verse number (default: whole chapter)
        verse: Option<u32>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
