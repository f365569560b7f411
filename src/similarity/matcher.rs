//! Bigram Matching
//!
//! Multiset intersection of two bigram sequences and the Sørensen–Dice
//! coefficient derived from it.

use std::collections::HashMap;

use super::bigram::{Bigram, BigramSequence};

/// Number of bigrams shared by `a` and `b`, counting each occurrence once.
///
/// Equals `Σ min(count_a(x), count_b(x))` over every distinct bigram `x`,
/// which is what a greedy scan consuming matched entries of `b` produces.
pub fn count_matches(a: &BigramSequence, b: &BigramSequence) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut available: HashMap<Bigram, usize> = HashMap::with_capacity(b.len());
    for bigram in b {
        *available.entry(*bigram).or_insert(0) += 1;
    }

    let mut matched = 0;
    for bigram in a {
        if let Some(count) = available.get_mut(bigram) {
            if *count > 0 {
                *count -= 1;
                matched += 1;
            }
        }
    }
    matched
}

/// Sørensen–Dice coefficient `2·M / (nA + nB)` in `[0.0, 1.0]`.
///
/// Two empty sequences score 0.0.
pub fn dice_coefficient(a: &BigramSequence, b: &BigramSequence) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }

    let matched = count_matches(a, b);
    (2 * matched) as f64 / total as f64
}
