//! Bigram Extraction
//!
//! Turns a string into the ordered sequence of adjacent byte pairs used by the
//! Sørensen–Dice scorer. Single-character words never contribute a pair.

use std::fmt;

/// Whitespace as classified by the C locale: space, `\t`, `\n`, `\v`, `\f`, `\r`
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// An ordered pair of adjacent, case-folded bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bigram(u8, u8);

impl Bigram {
    /// Build a bigram, folding both bytes to ASCII lowercase
    pub fn new(first: u8, second: u8) -> Self {
        Self(first.to_ascii_lowercase(), second.to_ascii_lowercase())
    }

    pub fn first(&self) -> u8 {
        self.0
    }

    pub fn second(&self) -> u8 {
        self.1
    }
}

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0 as char, self.1 as char)
    }
}

/// Bigrams of one input string, in insertion order, duplicates kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigramSequence(Vec<Bigram>);

impl BigramSequence {
    /// Extract the bigrams of `text`.
    ///
    /// Walks the bytes pairwise: a whitespace byte is skipped, a byte followed
    /// by whitespace is skipped together with that whitespace (so a lone
    /// character between spaces yields nothing), otherwise the pair is kept.
    pub fn extract(text: &str) -> Self {
        let bytes = text.as_bytes();
        if bytes.len() < 2 {
            return Self::default();
        }

        let last = bytes.len() - 1;
        let mut pairs = Vec::with_capacity(last);
        let mut i = 0;
        while i < last {
            if is_space(bytes[i]) {
                i += 1;
            } else if is_space(bytes[i + 1]) {
                i += 2;
            } else {
                pairs.push(Bigram::new(bytes[i], bytes[i + 1]));
                i += 1;
            }
        }

        Self(pairs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bigram> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Bigram] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a BigramSequence {
    type Item = &'a Bigram;
    type IntoIter = std::slice::Iter<'a, Bigram>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
