pub mod catalog;
pub mod verse;
pub mod word;

pub use catalog::BookInfo;
pub use verse::{Book, Chapter, Verse, FULL_TEXT_UNAVAILABLE};
pub use word::{Word, PLACEHOLDER_TRANSLATION};
