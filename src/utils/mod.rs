//! Utility modules

pub mod fuzzy;
pub mod split;

pub use fuzzy::{find_first_similar, find_first_similar_near, scaled_threshold, scores, FuzzyMatch};
pub use split::{split_fields, Splitter};
