//! Label Similarity Library
//!
//! Sørensen–Dice similarity between short labels, with the delimited-field
//! splitter and candidate lookup helpers used around it.

pub mod config;
pub mod error;
pub mod similarity;
pub mod utils;

pub use error::{SimError, SimResult};
pub use similarity::{have_same_prefix, is_similar, similarity, Metric};
