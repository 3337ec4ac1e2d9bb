//! The match engine: exact lookup, similarity fallback, memoizing cache.

use std::collections::HashMap;
use std::sync::Mutex;

use uc_protocol::MatchResult;

use crate::distance::similarity;
use crate::vocabulary::{BUILTIN_VOCABULARY, VocabularyEntry};

/// Minimum similarity an approximate match must clear.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Resolves single tokens to technical concepts.
///
/// The vocabulary is fixed for the engine's lifetime, so the memo cache is
/// never invalidated. Absent results are cached too — a token that matched
/// nothing yesterday matches nothing today.
pub struct MatchEngine {
    vocabulary: &'static [VocabularyEntry],
    cache: Mutex<HashMap<String, Option<MatchResult>>>,
}

impl MatchEngine {
    /// Engine over the built-in vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(BUILTIN_VOCABULARY)
    }

    /// Engine over a caller-supplied vocabulary (tests).
    pub fn with_vocabulary(vocabulary: &'static [VocabularyEntry]) -> Self {
        Self {
            vocabulary,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a token at the default threshold.
    pub fn resolve(&self, word: &str) -> Option<MatchResult> {
        self.resolve_with_threshold(word, DEFAULT_THRESHOLD)
    }

    /// Resolve a token, accepting approximate matches at `similarity >= threshold`.
    ///
    /// Never fails; `None` means no vocabulary entry came close enough.
    /// The memo cache is keyed by the normalized token alone — mixing
    /// thresholds on one engine returns whatever the first lookup stored.
    pub fn resolve_with_threshold(&self, word: &str, threshold: f64) -> Option<MatchResult> {
        let normalized = word.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        if let Some(cached) = self.cache.lock().unwrap().get(&normalized) {
            return cached.clone();
        }

        let result = self.lookup(&normalized, threshold);
        if let Some(m) = &result {
            tracing::debug!(
                token = %normalized,
                canonical = %m.canonical,
                confidence = m.confidence,
                "vocabulary match"
            );
        }

        self.cache
            .lock()
            .unwrap()
            .insert(normalized, result.clone());
        result
    }

    fn lookup(&self, normalized: &str, threshold: f64) -> Option<MatchResult> {
        // Exact pass — declaration order, first entry wins.
        for entry in self.vocabulary {
            if normalized == entry.canonical || entry.aliases.contains(&normalized) {
                return Some(MatchResult {
                    canonical: entry.canonical.to_string(),
                    matched_alias: normalized.to_string(),
                    confidence: 1.0,
                    actions: entry.actions.iter().map(|a| a.to_string()).collect(),
                });
            }
        }

        // Approximate pass — single best candidate over all entries.
        let mut best: Option<MatchResult> = None;
        let mut best_score = 0.0;
        for entry in self.vocabulary {
            for candidate in entry.similarity_candidates() {
                let score = similarity(normalized, candidate);
                if score >= threshold && score > best_score {
                    best_score = score;
                    best = Some(MatchResult {
                        canonical: entry.canonical.to_string(),
                        matched_alias: candidate.to_string(),
                        confidence: score,
                        actions: entry.actions.iter().map(|a| a.to_string()).collect(),
                    });
                }
            }
        }
        best
    }

    /// Number of memoized tokens (including cached misses).
    pub fn cache_len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_canonical_match() {
        let engine = MatchEngine::new();
        let m = engine.resolve("hardware").unwrap();
        assert_eq!(m.canonical, "hardware");
        assert_eq!(m.matched_alias, "hardware");
        assert_eq!(m.confidence, 1.0);
        assert_eq!(m.actions[0], "leer_estado");
    }

    #[test]
    fn exact_alias_match() {
        let engine = MatchEngine::new();
        let m = engine.resolve("hazguar").unwrap();
        assert_eq!(m.canonical, "hardware");
        assert_eq!(m.confidence, 1.0);
    }

    #[test]
    fn legacy_key_resolves_through_similarity() {
        // "hasguar" is a key, not an alias — it skips the exact pass but
        // scores 1.0 against itself in the similarity pass.
        let engine = MatchEngine::new();
        let m = engine.resolve("hasguar").unwrap();
        assert_eq!(m.canonical, "hardware");
        assert_eq!(m.matched_alias, "hasguar");
        assert_eq!(m.confidence, 1.0);
    }

    #[test]
    fn misspelling_within_threshold() {
        let engine = MatchEngine::new();
        let m = engine.resolve("hasuarr").unwrap();
        assert_eq!(m.canonical, "hardware");
        assert!(m.confidence >= 0.7);
        assert!(m.confidence < 1.0);
    }

    #[test]
    fn garbage_returns_none() {
        let engine = MatchEngine::new();
        assert!(engine.resolve("xyzzyplugh").is_none());
    }

    #[test]
    fn empty_and_whitespace_return_none() {
        let engine = MatchEngine::new();
        assert!(engine.resolve("").is_none());
        assert!(engine.resolve("   ").is_none());
        // Empty input is not cached.
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        let engine = MatchEngine::new();
        let m = engine.resolve("  SENSOR  ").unwrap();
        assert_eq!(m.canonical, "sensor");
        assert_eq!(m.confidence, 1.0);
    }

    #[test]
    fn cache_returns_identical_results() {
        let engine = MatchEngine::new();
        let first = engine.resolve("valvla");
        let second = engine.resolve("valvla");
        assert_eq!(first, second);
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    fn misses_are_cached_too() {
        let engine = MatchEngine::new();
        assert!(engine.resolve("xyzzyplugh").is_none());
        assert_eq!(engine.cache_len(), 1);
        assert!(engine.resolve("xyzzyplugh").is_none());
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    fn threshold_is_respected() {
        let engine = MatchEngine::new();
        // "sanzo" is 2 edits from "senso" (len 5): similarity 0.6.
        assert!(engine.resolve_with_threshold("sanzo", 0.7).is_none());
        // Fresh engine: the cache is keyed by token, so a lower threshold
        // needs an uncached lookup.
        let engine = MatchEngine::new();
        let m = engine.resolve_with_threshold("sanzo", 0.55).unwrap();
        assert_eq!(m.canonical, "sensor");
    }

    #[test]
    fn first_entry_wins_on_overlapping_aliases() {
        static OVERLAP: &[VocabularyEntry] = &[
            VocabularyEntry {
                key: "alpha",
                canonical: "alpha",
                aliases: &["shared"],
                actions: &["accion_alpha"],
            },
            VocabularyEntry {
                key: "beta",
                canonical: "beta",
                aliases: &["shared"],
                actions: &["accion_beta"],
            },
        ];
        let engine = MatchEngine::with_vocabulary(OVERLAP);
        let m = engine.resolve("shared").unwrap();
        assert_eq!(m.canonical, "alpha");
    }
}
