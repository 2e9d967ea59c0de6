use super::delimiter::Delimiter;
use super::token::Token;
use super::tokenizer::Pieces;
use crate::engine::config::LineConfig;

static LINE_BREAK: Delimiter = Delimiter::LineBreak;

/// Lazy line splitter over `\r\n`, `\n` and `\r` terminators.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    pieces: Pieces<'a, 'static>,
    config: LineConfig,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let piece = self.pieces.next()?;
        let line = if self.config.trim {
            piece.trim_end()
        } else {
            piece
        };

        if self.config.trim_trailing_empty_line && self.pieces.is_finished() && line.is_empty() {
            return None;
        }
        Some(line)
    }
}

pub fn lines(source: Option<&str>, config: LineConfig) -> Lines<'_> {
    Lines {
        pieces: Pieces::new(source, &LINE_BREAK, false, None),
        config,
    }
}

/// Splits `source` into lines.
///
/// With `trim` each line loses its trailing blanks; with
/// `trim_trailing_empty_line` a source ending on a terminator does not
/// produce a final empty line.
pub fn split_lines(source: Option<&str>, config: LineConfig) -> Vec<String> {
    lines(source, config).map(String::from).collect()
}
