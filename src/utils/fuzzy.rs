//! Candidate lookup
//!
//! Scores a search term against a list of candidate labels. Candidates keep
//! their input order; nothing here ranks or sorts them.

use tracing::debug;

use crate::similarity::Metric;

/// Result of a fuzzy match with the candidate position, value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub index: usize,
    pub value: String,
    pub score: f64,
}

/// Score every candidate against `term`, in input order
pub fn scores<S: AsRef<str>>(term: &str, candidates: &[S], metric: Metric) -> Vec<FuzzyMatch> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let candidate = candidate.as_ref();
            FuzzyMatch {
                index,
                value: candidate.to_string(),
                score: metric.score(term, candidate),
            }
        })
        .collect()
}

/// First candidate scoring strictly above `threshold`
///
/// Returns None if no candidate passes
pub fn find_first_similar<S: AsRef<str>>(
    term: &str,
    candidates: &[S],
    threshold: f64,
    metric: Metric,
) -> Option<FuzzyMatch> {
    for (index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        let score = metric.score(term, candidate);
        if score > threshold {
            debug!(
                "🔍 '{}' matched '{}' at {} ({} = {:.3})",
                term,
                candidate,
                index,
                metric.name(),
                score
            );
            return Some(FuzzyMatch {
                index,
                value: candidate.to_string(),
                score,
            });
        }
    }
    debug!("🔍 No candidate for '{}' above {}", term, threshold);
    None
}

/// Like [`find_first_similar`], but the threshold for each candidate grows
/// with its distance from `expected_index` (see [`scaled_threshold`]).
pub fn find_first_similar_near<S: AsRef<str>>(
    term: &str,
    candidates: &[S],
    base_threshold: f64,
    expected_index: usize,
    metric: Metric,
) -> Option<FuzzyMatch> {
    let found = candidates
        .iter()
        .enumerate()
        .find_map(|(index, candidate)| {
            let candidate = candidate.as_ref();
            let distance = index.abs_diff(expected_index) as f64;
            let threshold = scaled_threshold(base_threshold, distance);
            let score = metric.score(term, candidate);
            (score > threshold).then(|| FuzzyMatch {
                index,
                value: candidate.to_string(),
                score,
            })
        });
    if let Some(m) = &found {
        debug!(
            "🔍 '{}' matched '{}' at {} (expected near {})",
            term, m.value, m.index, expected_index
        );
    }
    found
}

/// Threshold equal to `base` at distance 1, tending to 1.0 as `distance` grows.
///
/// At distance 0 it is slightly below `base`.
///
/// Used when two labels are also compared by position: far apart labels
/// must be more alike to be considered the same.
pub fn scaled_threshold(base: f64, distance: f64) -> f64 {
    1.0 - (1.0 - base) / (1.0 + 0.05 * (distance - 1.0))
}
