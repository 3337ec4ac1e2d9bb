//! Fuzzy matching of technical vocabulary for µCore diagnostics.
//!
//! Resolves a single lowercase-normalized token to the technical concept it
//! most likely denotes, tolerating misspellings via Levenshtein similarity.
//! Resolution never fails — an absent match is a normal outcome.

pub mod distance;
pub mod engine;
pub mod vocabulary;

pub use engine::{DEFAULT_THRESHOLD, MatchEngine};
pub use vocabulary::VocabularyEntry;
