pub mod class;
pub mod delimiter;
pub mod lines;
pub mod options;
pub mod token;
pub mod tokenizer;

pub use class::{is_blank, is_graph, CharClass};
pub use delimiter::{Alternation, CharSet, Delimiter, Match};
pub use lines::{lines, split_lines, Lines};
pub use options::SplitOptions;
pub use token::Token;
pub use tokenizer::{
    split, split_by_char_type, split_char, split_chars, split_into, split_literal, split_range,
    split_whitespace, split_with, tokens, tokens_with, Tokens,
};
