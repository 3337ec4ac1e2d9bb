use serde::{Deserialize, Serialize};

/// Result of resolving a single input token against the technical vocabulary.
///
/// `PartialEq` is derived so callers (and the match cache tests) can assert
/// that repeated resolutions of the same token are bit-identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Canonical technical term the token resolved to (e.g., "hardware").
    pub canonical: String,
    /// The vocabulary string the token actually matched (the input itself
    /// for exact matches, the closest candidate for approximate ones).
    pub matched_alias: String,
    /// Similarity score in [0.0, 1.0]; 1.0 for exact matches.
    pub confidence: f64,
    /// Follow-up actions associated with the term, in recommended order.
    pub actions: Vec<String>,
}

impl MatchResult {
    /// True when the token matched a vocabulary string verbatim.
    pub fn is_exact(&self) -> bool {
        self.confidence >= 1.0
    }
}
