use std::ops::Range;

use super::class::is_blank;

/// One token of a split: a slice of the source with its byte offsets.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the first character in the source.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(source: &'a str, start: usize, end: usize) -> Self {
        Self {
            text: &source[start..end],
            start,
            end,
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub(crate) fn trim(self) -> Self {
        let text = self.text.trim_start_matches(is_blank);
        let start = self.end - text.len();
        let text = text.trim_end_matches(is_blank);
        Self {
            text,
            start,
            end: start + text.len(),
        }
    }

    pub(crate) fn trim_end(self) -> Self {
        let text = self.text.trim_end_matches(is_blank);
        Self {
            text,
            start: self.start,
            end: self.start + text.len(),
        }
    }
}

impl From<Token<'_>> for String {
    fn from(token: Token<'_>) -> Self {
        token.text.to_string()
    }
}
