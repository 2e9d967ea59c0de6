//! String tokenization: split a string on a character, a character set, a
//! literal substring or character-class transitions, split it into lines,
//! and join tokens back together.
//!
//! ```
//! use textsplit::{join_strs, split_char, split_by_char_type, SplitOptions};
//!
//! let parts = split_char(Some("a.b.. c  "), '.', SplitOptions::TRIM | SplitOptions::IGNORE_EMPTY);
//! assert_eq!(parts, vec!["a", "b", "c"]);
//!
//! let words = split_by_char_type(Some("ASFRules"), SplitOptions::CAMEL_CASE);
//! assert_eq!(words, vec!["ASF", "Rules"]);
//!
//! let raw = split_char(Some("x,,y"), ',', SplitOptions::NONE);
//! assert_eq!(join_strs(',', Some(raw.as_slice())), Some("x,,y".to_string()));
//! ```

pub mod engine;
pub mod join;
pub mod split;

pub use engine::{Config, LineConfig, SplitConfig, SplitError};
pub use join::{join, join_iter, join_range, join_strs, Joiner, Separator};
pub use split::{
    lines, split, split_by_char_type, split_char, split_chars, split_into, split_lines,
    split_literal, split_range, split_whitespace, split_with, tokens, tokens_with, CharClass,
    CharSet, Delimiter, Lines, SplitOptions, Token, Tokens,
};
