use super::delimiter::Delimiter;
use super::options::SplitOptions;
use super::token::Token;
use crate::engine::config::SplitConfig;
use crate::engine::range::{char_to_byte, clamp_range};

/// Raw pieces between delimiter matches, before any trimming or filtering.
///
/// The piece after the last match is always produced, so `n` matches give
/// `n + 1` pieces and an empty source gives one empty piece.
#[derive(Debug, Clone)]
pub(crate) struct Pieces<'a, 'd> {
    source: &'a str,
    delimiter: &'d Delimiter,
    camel_case: bool,
    /// Pieces left before the remainder is taken whole.
    remaining: Option<usize>,
    position: usize,
    finished: bool,
}

impl<'a, 'd> Pieces<'a, 'd> {
    pub(crate) fn new(
        source: Option<&'a str>,
        delimiter: &'d Delimiter,
        camel_case: bool,
        limit: Option<usize>,
    ) -> Self {
        Self {
            source: source.unwrap_or_default(),
            delimiter,
            camel_case,
            remaining: limit,
            position: 0,
            finished: source.is_none(),
        }
    }

    /// True once the final piece has been handed out.
    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<'a> Iterator for Pieces<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let start = self.position;
        let found = match self.remaining {
            Some(1) => None,
            _ => self.delimiter.find(self.source, start, self.camel_case),
        };

        match found {
            Some(delim) => {
                self.position = delim.end();
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                Some(Token::new(self.source, start, delim.start))
            }
            None => {
                self.finished = true;
                Some(Token::new(self.source, start, self.source.len()))
            }
        }
    }
}

/// Lazy split: yields tokens with TRIM and IGNORE_EMPTY already applied.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 'd> {
    pieces: Pieces<'a, 'd>,
    options: SplitOptions,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for piece in self.pieces.by_ref() {
            let token = if self.options.contains(SplitOptions::TRIM) {
                piece.trim()
            } else {
                piece
            };
            if self.options.contains(SplitOptions::IGNORE_EMPTY) && token.is_empty() {
                continue;
            }
            return Some(token);
        }
        None
    }
}

pub fn tokens<'a, 'd>(
    source: Option<&'a str>,
    delimiter: &'d Delimiter,
    options: SplitOptions,
) -> Tokens<'a, 'd> {
    tokens_with(source, delimiter, &SplitConfig::new(options))
}

pub fn tokens_with<'a, 'd>(
    source: Option<&'a str>,
    delimiter: &'d Delimiter,
    config: &SplitConfig,
) -> Tokens<'a, 'd> {
    let camel_case = config.options.contains(SplitOptions::CAMEL_CASE);
    Tokens {
        pieces: Pieces::new(source, delimiter, camel_case, config.limit()),
        options: config.options,
    }
}

/// Splits `source` at every match of `delimiter`.
///
/// `None` gives an empty vector; `Some("")` gives one empty token unless
/// IGNORE_EMPTY is set.
pub fn split(source: Option<&str>, delimiter: &Delimiter, options: SplitOptions) -> Vec<String> {
    tokens(source, delimiter, options).map(String::from).collect()
}

pub fn split_with(
    source: Option<&str>,
    delimiter: &Delimiter,
    config: &SplitConfig,
) -> Vec<String> {
    tokens_with(source, delimiter, config)
        .map(String::from)
        .collect()
}

/// Appends the tokens to `out` and returns how many were added.
pub fn split_into(
    out: &mut Vec<String>,
    source: Option<&str>,
    delimiter: &Delimiter,
    options: SplitOptions,
) -> usize {
    let before = out.len();
    out.extend(tokens(source, delimiter, options).map(String::from));
    out.len() - before
}

/// Splits the code points `[from, to)` of `source`.
///
/// The range is clamped to the source; an empty or inverted range gives an
/// empty vector.
pub fn split_range(
    source: Option<&str>,
    from: isize,
    to: isize,
    delimiter: &Delimiter,
    options: SplitOptions,
) -> Vec<String> {
    let Some(source) = source else {
        return Vec::new();
    };
    let Some(range) = clamp_range(source.chars().count(), from, to) else {
        return Vec::new();
    };

    let start = char_to_byte(source, range.start);
    let end = start + char_to_byte(&source[start..], range.end - range.start);
    split(Some(&source[start..end]), delimiter, options)
}

pub fn split_char(source: Option<&str>, delimiter: char, options: SplitOptions) -> Vec<String> {
    split(source, &Delimiter::Char(delimiter), options)
}

/// Splits at any of the characters in `delimiters`.
pub fn split_chars(source: Option<&str>, delimiters: &str, options: SplitOptions) -> Vec<String> {
    split(source, &Delimiter::chars(delimiters), options)
}

pub fn split_literal(source: Option<&str>, needle: &str, options: SplitOptions) -> Vec<String> {
    split(source, &Delimiter::literal(needle), options)
}

pub fn split_whitespace(source: Option<&str>, options: SplitOptions) -> Vec<String> {
    split(source, &Delimiter::whitespace(), options)
}

/// Splits into runs of upper case, lower case and digits; every other
/// character is a token of its own. CAMEL_CASE keeps a capital with the
/// lower-case word that follows it.
pub fn split_by_char_type(source: Option<&str>, options: SplitOptions) -> Vec<String> {
    split(source, &Delimiter::char_type(options), options)
}
