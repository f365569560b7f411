//! Delimited field splitting
//!
//! Splits a single line into fields on a one-byte delimiter, trimming
//! whitespace around each field.

use crate::similarity::bigram::is_space;

/// Iterates the trimmed fields of a delimited string
#[derive(Debug, Clone)]
pub struct Splitter<'a> {
    buf: &'a str,
    delim: u8,
    pos: usize,
}

impl<'a> Splitter<'a> {
    pub fn new(buf: &'a str, delim: u8) -> Self {
        Self { buf, delim, pos: 0 }
    }

    /// True while there are bytes left to consume
    pub fn has_data(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// The whole string being split
    pub fn buffer(&self) -> &'a str {
        self.buf
    }

    /// Next field with surrounding whitespace removed.
    ///
    /// Past the end this returns an empty field; use [`Splitter::has_data`]
    /// or the iterator to know when to stop.
    pub fn next_token(&mut self) -> &'a str {
        let bytes = self.buf.as_bytes();

        while self.pos < bytes.len() && is_space(bytes[self.pos]) {
            self.pos += 1;
        }

        if self.pos >= bytes.len() {
            return "";
        }
        if bytes[self.pos] == self.delim {
            self.pos += 1;
            return "";
        }

        let start = self.pos;
        let mut end = self.pos;
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            self.pos += 1;
            if b == self.delim {
                break;
            }
            if !is_space(b) {
                end = self.pos;
            }
        }

        // Only ASCII bytes bound the field, so the slice stays on char boundaries
        &self.buf[start..end]
    }
}

impl<'a> Iterator for Splitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_data() {
            Some(self.next_token())
        } else {
            None
        }
    }
}

/// Convenience: collect all fields of `text`
pub fn split_fields(text: &str, delim: u8) -> Vec<&str> {
    Splitter::new(text, delim).collect()
}
