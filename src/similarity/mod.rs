//! String Similarity
//!
//! Approximate similarity of two short labels based on the Sørensen–Dice
//! index over adjacent-character bigrams, plus a strict threshold test.
//!
//! Inputs are handled as single-byte code units: case folding and whitespace
//! detection are ASCII-only, multi-byte text is compared byte by byte.

pub mod bigram;
pub mod matcher;

use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;
use tracing::trace;

pub use bigram::{Bigram, BigramSequence};
pub use matcher::{count_matches, dice_coefficient};

/// Similarity in `[0.0, 1.0]` between `s1` and `s2` (Sørensen–Dice on bigrams)
///
/// - either input empty: 0.0
/// - byte-equal inputs: 1.0
/// - a differing single character: 0.0
pub fn similarity(s1: &str, s2: &str) -> f64 {
    if let Some(score) = degenerate_score(s1, s2) {
        return score;
    }

    let bigrams1 = BigramSequence::extract(s1);
    let bigrams2 = BigramSequence::extract(s2);
    let score = dice_coefficient(&bigrams1, &bigrams2);
    trace!(
        "similarity({:?}, {:?}) = {} ({} vs {} bigrams)",
        s1,
        s2,
        score,
        bigrams1.len(),
        bigrams2.len()
    );
    score
}

/// True when `similarity(s1, s2)` is strictly greater than `threshold`.
///
/// The threshold is not validated: values outside `[0.0, 1.0]` make the
/// result constant.
pub fn is_similar(s1: &str, s2: &str, threshold: f64) -> bool {
    similarity(s1, s2) > threshold
}

/// True when both strings are at least `n` bytes long and share their first `n` bytes
pub fn have_same_prefix(s1: &str, s2: &str, n: usize) -> bool {
    match (s1.as_bytes().get(..n), s2.as_bytes().get(..n)) {
        (Some(p1), Some(p2)) => p1 == p2,
        _ => false,
    }
}

/// Scores shared by every metric, before any per-metric work is done
fn degenerate_score(s1: &str, s2: &str) -> Option<f64> {
    if s1.is_empty() || s2.is_empty() {
        Some(0.0)
    } else if s1 == s2 {
        Some(1.0)
    } else if s1.len() == 1 || s2.len() == 1 {
        Some(0.0)
    } else {
        None
    }
}

/// Available scoring metrics
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Sørensen–Dice index over bigrams
    #[default]
    #[value(alias = "dice")]
    SorensenDice,
    /// Normalized edit distance over ASCII-lowercased input
    #[value(alias = "lev")]
    Levenshtein,
}

impl Metric {
    /// Score `s1` against `s2` with this metric
    pub fn score(self, s1: &str, s2: &str) -> f64 {
        match self {
            Metric::SorensenDice => similarity(s1, s2),
            Metric::Levenshtein => degenerate_score(s1, s2).unwrap_or_else(|| {
                normalized_levenshtein(&s1.to_ascii_lowercase(), &s2.to_ascii_lowercase())
            }),
        }
    }

    /// True when the score is strictly greater than `threshold`
    pub fn is_similar(self, s1: &str, s2: &str, threshold: f64) -> bool {
        match self {
            Metric::SorensenDice => is_similar(s1, s2, threshold),
            Metric::Levenshtein => self.score(s1, s2) > threshold,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::SorensenDice => "sorensen-dice",
            Metric::Levenshtein => "levenshtein",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_similarity_trivial_cases() {
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("a", "a"), 1.0);
        assert_eq!(similarity("a", "b"), 0.0);
        assert_eq!(similarity("a", "abc"), 0.0);
    }

    #[test]
    fn test_similarity_scores() {
        assert_eq!(similarity("healed", "sealed"), 0.8);
        assert_eq!(similarity("abc", "abd"), 0.5);
        assert!(approx(similarity("abcdefghi", "abcdefghj"), 0.87));
        assert!(approx(similarity("vnHighWidth", "vqHighWidth"), 0.80));
        assert!(approx(similarity("vnHighWidth", "vnLowWidth"), 0.53));
        assert!(approx(similarity("vnWidth", "vnWidth2"), 0.92));
    }

    #[test]
    fn test_similarity_ignores_case_but_equality_is_exact() {
        // Same bigrams after folding, but not byte-equal
        assert_eq!(similarity("Speed", "speed"), 1.0);
        assert_eq!(similarity("A", "a"), 0.0);
    }

    #[test]
    fn test_similarity_single_char_words() {
        assert_eq!(similarity("a b", "ab"), 0.0);
        assert_eq!(similarity("a b", "c d"), 0.0);
        assert_eq!(similarity("x feed", "y feed"), 1.0);
    }

    #[test]
    fn test_is_similar() {
        assert!(is_similar("abc", "abc", 0.5));
        assert!(is_similar("abcd", "abce", 0.5));
        assert!(!is_similar("abcd", "abce", 0.9));
        assert!(!is_similar("vnHighWidth", "vqHighWidth", 0.9));
        assert!(!is_similar("vnHighWidth", "vnLowWidth", 0.9));
        assert!(is_similar("vnWidth", "vnWidth2", 0.9));
    }

    #[test]
    fn test_is_similar_is_strict() {
        // co,on,nt shared out of six bigrams each
        assert_eq!(similarity("context", "contact"), 0.5);
        assert!(!is_similar("context", "contact", 0.5));
        assert!(is_similar("context", "contact", 0.49));
        assert!(!is_similar("same", "same", 1.0));
    }

    #[test]
    fn test_is_similar_out_of_range_threshold() {
        assert!(is_similar("", "", -0.1));
        assert!(!is_similar("same", "same", 1.5));
    }

    #[test]
    fn test_have_same_prefix() {
        for n in 0..=3 {
            assert!(have_same_prefix("abcdef", "abc1234", n));
        }
        for n in 4..=8 {
            assert!(!have_same_prefix("abcdef", "abc1234", n));
        }

        assert!(have_same_prefix("abc", "1234", 0));
        for n in 1..=6 {
            assert!(!have_same_prefix("abc", "1234", n));
        }

        assert!(have_same_prefix("", "", 0));
        assert!(!have_same_prefix("", "", 1));
        assert!(!have_same_prefix("", "", 2));
    }

    #[test]
    fn test_have_same_prefix_is_case_sensitive() {
        assert!(!have_same_prefix("Abc", "abc", 1));
    }

    #[test]
    fn test_metric_levenshtein() {
        assert_eq!(Metric::Levenshtein.score("", "abc"), 0.0);
        assert_eq!(Metric::Levenshtein.score("abc", "abc"), 1.0);
        assert_eq!(Metric::Levenshtein.score("a", "b"), 0.0);
        assert_eq!(Metric::Levenshtein.score("ABCD", "abce"), 0.75);
    }

    #[test]
    fn test_metric_is_similar() {
        assert!(!Metric::SorensenDice.is_similar("context", "contact", 0.5));
        assert!(Metric::Levenshtein.is_similar("ABCD", "abce", 0.7));
        assert!(!Metric::Levenshtein.is_similar("ABCD", "abce", 0.75));
    }

    #[test]
    fn test_metric_default_is_dice() {
        assert_eq!(Metric::default(), Metric::SorensenDice);
        assert_eq!(
            Metric::SorensenDice.score("healed", "sealed"),
            similarity("healed", "sealed")
        );
    }

    #[test]
    fn test_metric_serde_names() {
        let json = serde_json::to_string(&Metric::SorensenDice).expect("serialize");
        assert_eq!(json, "\"sorensen-dice\"");
        let metric: Metric = serde_json::from_str("\"levenshtein\"").expect("deserialize");
        assert_eq!(metric, Metric::Levenshtein);
        assert_eq!(Metric::Levenshtein.name(), "levenshtein");
    }
}
