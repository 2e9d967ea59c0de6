use aho_corasick::{AhoCorasick, MatchKind};
use rustc_hash::FxHashSet;

use super::class::is_class_boundary;
use super::options::SplitOptions;
use crate::engine::error::SplitError;

/// Unordered set of delimiter characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: FxHashSet<char>,
}

impl CharSet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        Self::new(chars.chars())
    }
}

impl From<&[char]> for CharSet {
    fn from(chars: &[char]) -> Self {
        Self::new(chars.iter().copied())
    }
}

/// Several literal needles matched leftmost-first.
///
/// When two needles match at the same position the one listed first wins:
/// `["ab", "abc"]` consumes only `ab` out of `"abcd"`.
#[derive(Debug, Clone)]
pub struct Alternation {
    needles: Vec<String>,
    matcher: Option<AhoCorasick>,
}

impl Alternation {
    pub fn new<I, S>(needles: I) -> Result<Self, SplitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let needles: Vec<String> = needles
            .into_iter()
            .map(Into::into)
            .filter(|needle| !needle.is_empty())
            .collect();

        let matcher = if needles.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::LeftmostFirst)
                    .build(&needles)?,
            )
        };

        Ok(Self { needles, matcher })
    }

    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    fn match_at(&self, rest: &str) -> Option<usize> {
        self.needles
            .iter()
            .find(|needle| rest.starts_with(needle.as_str()))
            .map(String::len)
    }

    fn find(&self, rest: &str) -> Option<(usize, usize)> {
        let found = self.matcher.as_ref()?.find(rest)?;
        Some((found.start(), found.len()))
    }
}

impl PartialEq for Alternation {
    fn eq(&self, other: &Self) -> bool {
        self.needles == other.needles
    }
}

impl Eq for Alternation {}

/// A delimiter occurrence inside the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    /// Bytes consumed; zero for a character-type boundary.
    pub len: usize,
}

impl Match {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// How a source string is cut into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimiter {
    /// A single character.
    Char(char),
    /// Any member of a set. An empty set never matches.
    CharSet(CharSet),
    /// An exact substring. An empty needle never matches, leaving the whole
    /// source as one token.
    Literal(String),
    /// Several substrings, first listed wins on ties.
    AnyLiteral(Alternation),
    /// `\r\n`, `\n` or `\r`, tried in that order.
    LineBreak,
    /// Zero-width boundaries between runs of upper case, lower case, digits,
    /// and around every other character.
    CharType { camel_case: bool },
}

impl Delimiter {
    pub fn literal(needle: impl Into<String>) -> Self {
        Delimiter::Literal(needle.into())
    }

    pub fn chars(chars: impl Into<CharSet>) -> Self {
        Delimiter::CharSet(chars.into())
    }

    pub fn any_literal<I, S>(needles: I) -> Result<Self, SplitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Delimiter::AnyLiteral(Alternation::new(needles)?))
    }

    /// Character-type delimiter honouring the CAMEL_CASE flag of `options`.
    pub fn char_type(options: SplitOptions) -> Self {
        Delimiter::CharType {
            camel_case: options.contains(SplitOptions::CAMEL_CASE),
        }
    }

    /// The ASCII blanks: space, tab, line feed, carriage return, vertical
    /// tab and form feed.
    pub fn whitespace() -> Self {
        Delimiter::chars(" \t\n\r\u{0B}\u{0C}")
    }

    /// Width of the delimiter occurrence starting at byte `pos`, if any.
    ///
    /// For [`Delimiter::CharType`] a boundary before `pos` reports width 0;
    /// the CAMEL_CASE flag of `options` is combined with the variant's own.
    /// Positions out of range or inside a character never match.
    pub fn match_at(&self, source: &str, pos: usize, options: SplitOptions) -> Option<usize> {
        let rest = source.get(pos..)?;

        match self {
            Delimiter::Char(delim) => rest
                .chars()
                .next()
                .filter(|c| c == delim)
                .map(char::len_utf8),
            Delimiter::CharSet(set) => rest
                .chars()
                .next()
                .filter(|&c| set.contains(c))
                .map(char::len_utf8),
            Delimiter::Literal(needle) => {
                (!needle.is_empty() && rest.starts_with(needle.as_str())).then(|| needle.len())
            }
            Delimiter::AnyLiteral(alternation) => alternation.match_at(rest),
            Delimiter::LineBreak => line_break_at(rest),
            Delimiter::CharType { .. } => {
                let camel_case = self.camel_case(options.contains(SplitOptions::CAMEL_CASE));
                let prev = source[..pos].chars().next_back()?;
                char_type_boundary(prev, rest, camel_case).then_some(0)
            }
        }
    }

    /// Effective camel-case flag: the variant's own OR-ed with `requested`.
    fn camel_case(&self, requested: bool) -> bool {
        match self {
            Delimiter::CharType { camel_case } => *camel_case || requested,
            _ => requested,
        }
    }

    /// The first occurrence at or after byte `from`.
    ///
    /// Zero-width boundaries are only reported strictly after `from`, so a
    /// token never ends where it starts.
    pub(crate) fn find(&self, source: &str, from: usize, camel_case: bool) -> Option<Match> {
        let rest = source.get(from..)?;
        let at = |offset: usize, len: usize| Match {
            start: from + offset,
            len,
        };

        match self {
            Delimiter::Char(delim) => rest.find(*delim).map(|i| at(i, delim.len_utf8())),
            Delimiter::CharSet(set) => {
                if set.is_empty() {
                    return None;
                }
                rest.char_indices()
                    .find(|&(_, c)| set.contains(c))
                    .map(|(i, c)| at(i, c.len_utf8()))
            }
            Delimiter::Literal(needle) => {
                if needle.is_empty() {
                    return None;
                }
                rest.find(needle.as_str()).map(|i| at(i, needle.len()))
            }
            Delimiter::AnyLiteral(alternation) => {
                alternation.find(rest).map(|(i, len)| at(i, len))
            }
            Delimiter::LineBreak => {
                let i = rest.find(|c: char| c == '\r' || c == '\n')?;
                line_break_at(&rest[i..]).map(|len| at(i, len))
            }
            Delimiter::CharType { .. } => {
                let camel_case = self.camel_case(camel_case);
                let mut chars = rest.char_indices();
                let (_, mut prev) = chars.next()?;
                for (i, cur) in chars {
                    if char_type_boundary(prev, &rest[i..], camel_case) {
                        return Some(at(i, 0));
                    }
                    prev = cur;
                }
                None
            }
        }
    }
}

impl From<char> for Delimiter {
    fn from(delim: char) -> Self {
        Delimiter::Char(delim)
    }
}

impl From<&str> for Delimiter {
    fn from(needle: &str) -> Self {
        Delimiter::literal(needle)
    }
}

impl From<CharSet> for Delimiter {
    fn from(set: CharSet) -> Self {
        Delimiter::CharSet(set)
    }
}

/// Whether a class boundary sits between `prev` and the first char of `rest`.
fn char_type_boundary(prev: char, rest: &str, camel_case: bool) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(cur) => is_class_boundary(prev, cur, chars.next(), camel_case),
        None => false,
    }
}

fn line_break_at(rest: &str) -> Option<usize> {
    if rest.starts_with("\r\n") {
        Some(2)
    } else if rest.starts_with('\n') || rest.starts_with('\r') {
        Some(1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_match_at() {
        let delim = Delimiter::Char(',');
        assert_eq!(delim.match_at("a,b", 1, SplitOptions::NONE), Some(1));
        assert_eq!(delim.match_at("a,b", 0, SplitOptions::NONE), None);
        assert_eq!(delim.match_at("a,b", 3, SplitOptions::NONE), None);
        assert_eq!(delim.match_at("a,b", 99, SplitOptions::NONE), None);
    }

    #[test]
    fn test_multibyte_char_width() {
        let delim = Delimiter::Char('€');
        assert_eq!(delim.match_at("a€b", 1, SplitOptions::NONE), Some(3));
        // inside the euro sign
        assert_eq!(delim.match_at("a€b", 2, SplitOptions::NONE), None);
    }

    #[test]
    fn test_char_set_match_at() {
        let delim = Delimiter::chars(";,");
        assert_eq!(delim.match_at("a;b,c", 1, SplitOptions::NONE), Some(1));
        assert_eq!(delim.match_at("a;b,c", 3, SplitOptions::NONE), Some(1));
        assert_eq!(delim.match_at("a;b,c", 2, SplitOptions::NONE), None);
    }

    #[test]
    fn test_empty_char_set_never_matches() {
        let delim = Delimiter::chars("");
        assert_eq!(delim.match_at(",", 0, SplitOptions::NONE), None);
        assert_eq!(delim.find(",,,", 0, false), None);
    }

    #[test]
    fn test_char_set_from_slice() {
        let set = CharSet::from(&['a', 'b', 'a'][..]);
        assert_eq!(set.len(), 2);
        assert!(set.contains('b'));
        assert!(!set.contains('c'));
    }

    #[test]
    fn test_literal_match_at() {
        let delim = Delimiter::literal(";;");
        assert_eq!(delim.match_at("a;;b", 1, SplitOptions::NONE), Some(2));
        assert_eq!(delim.match_at("a;b", 1, SplitOptions::NONE), None);
        assert_eq!(delim.match_at(";", 0, SplitOptions::NONE), None);
    }

    #[test]
    fn test_empty_literal_never_matches() {
        let delim = Delimiter::literal("");
        assert_eq!(delim.match_at("abc", 0, SplitOptions::NONE), None);
        assert_eq!(delim.find("abc", 0, false), None);
    }

    #[test]
    fn test_literal_find_is_leftmost() {
        let delim = Delimiter::literal(";;");
        assert_eq!(delim.find(";;;;;", 0, false), Some(Match { start: 0, len: 2 }));
        assert_eq!(delim.find(";;;;;", 2, false), Some(Match { start: 2, len: 2 }));
        assert_eq!(delim.find(";;;;;", 4, false), None);
    }

    #[test]
    fn test_line_break_prefers_crlf() {
        let delim = Delimiter::LineBreak;
        assert_eq!(delim.match_at("\r\nx", 0, SplitOptions::NONE), Some(2));
        assert_eq!(delim.match_at("\rx", 0, SplitOptions::NONE), Some(1));
        assert_eq!(delim.match_at("\nx", 0, SplitOptions::NONE), Some(1));
        assert_eq!(delim.match_at("\n\r", 0, SplitOptions::NONE), Some(1));
        assert_eq!(delim.find("ab\r\ncd", 0, false), Some(Match { start: 2, len: 2 }));
        assert_eq!(delim.find("ab\rcd", 0, false), Some(Match { start: 2, len: 1 }));
    }

    #[test]
    fn test_any_literal_first_listed_wins() {
        let delim = Delimiter::any_literal(["ab", "abc", ""]).unwrap();
        assert_eq!(delim.match_at("xabcx", 1, SplitOptions::NONE), Some(2));
        assert_eq!(delim.find("xabcx", 0, false), Some(Match { start: 1, len: 2 }));

        let delim = Delimiter::any_literal(["abc", "ab"]).unwrap();
        assert_eq!(delim.match_at("xabcx", 1, SplitOptions::NONE), Some(3));
        assert_eq!(delim.find("xabcx", 0, false), Some(Match { start: 1, len: 3 }));
    }

    #[test]
    fn test_any_literal_all_empty_never_matches() {
        let delim = Delimiter::any_literal(Vec::<String>::new()).unwrap();
        assert_eq!(delim.find("abc", 0, false), None);
        let delim = Delimiter::any_literal([""]).unwrap();
        assert_eq!(delim.match_at("abc", 0, SplitOptions::NONE), None);
    }

    #[test]
    fn test_char_type_match_at_is_zero_width() {
        let delim = Delimiter::CharType { camel_case: false };
        assert_eq!(delim.match_at("fooBar", 3, SplitOptions::NONE), Some(0));
        assert_eq!(delim.match_at("fooBar", 2, SplitOptions::NONE), None);
        assert_eq!(delim.match_at("fooBar", 0, SplitOptions::NONE), None);
        assert_eq!(delim.match_at("fooBar", 6, SplitOptions::NONE), None);
    }

    #[test]
    fn test_char_type_find_skips_start() {
        let delim = Delimiter::CharType { camel_case: false };
        assert_eq!(delim.find("a1", 0, false), Some(Match { start: 1, len: 0 }));
        assert_eq!(delim.find("a1", 1, false), None);
        assert_eq!(delim.find("", 0, false), None);
    }

    #[test]
    fn test_char_type_camel_flag_from_options() {
        let delim = Delimiter::CharType { camel_case: false };
        assert_eq!(delim.find("ABc", 0, false), Some(Match { start: 2, len: 0 }));
        assert_eq!(delim.find("ABc", 0, true), Some(Match { start: 1, len: 0 }));
        assert_eq!(
            Delimiter::char_type(SplitOptions::CAMEL_CASE),
            Delimiter::CharType { camel_case: true }
        );
    }

    #[test]
    fn test_char_type_match_at_honours_camel_option() {
        let delim = Delimiter::CharType { camel_case: false };
        assert_eq!(delim.match_at("ABc", 1, SplitOptions::NONE), None);
        assert_eq!(delim.match_at("ABc", 2, SplitOptions::NONE), Some(0));
        assert_eq!(delim.match_at("ABc", 1, SplitOptions::CAMEL_CASE), Some(0));
        assert_eq!(delim.match_at("ABc", 2, SplitOptions::CAMEL_CASE), None);

        let delim = Delimiter::CharType { camel_case: true };
        assert_eq!(delim.match_at("ABc", 1, SplitOptions::NONE), Some(0));
    }

    fn short_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
        let mut all = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..max_len {
            let next: Vec<String> = frontier
                .iter()
                .flat_map(|prefix| alphabet.iter().map(move |&c| format!("{prefix}{c}")))
                .collect();
            all.extend(next.iter().cloned());
            frontier = next;
        }
        all
    }

    #[test]
    fn test_find_agrees_with_match_at() {
        let delimiters = [
            Delimiter::Char(','),
            Delimiter::chars(",;"),
            Delimiter::literal(";;"),
            Delimiter::any_literal([";;", ";"]).unwrap(),
            Delimiter::any_literal([";", ";;"]).unwrap(),
            Delimiter::LineBreak,
            Delimiter::CharType { camel_case: false },
            Delimiter::CharType { camel_case: true },
        ];
        for s in short_strings(&['a', 'B', '1', ',', ';', '\r', '\n'], 4) {
            for delim in &delimiters {
                for options in [SplitOptions::NONE, SplitOptions::CAMEL_CASE] {
                    let camel_case = options.contains(SplitOptions::CAMEL_CASE);
                    let zero_width = matches!(delim, Delimiter::CharType { .. });
                    for from in 0..=s.len() {
                        let expected = (from..=s.len())
                            .filter(|&pos| !(zero_width && pos == from))
                            .find_map(|pos| {
                                delim
                                    .match_at(&s, pos, options)
                                    .map(|len| Match { start: pos, len })
                            });
                        assert_eq!(
                            delim.find(&s, from, camel_case),
                            expected,
                            "{:?} in {:?} from {} with {}",
                            delim,
                            s,
                            from,
                            options
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Delimiter::from('x'), Delimiter::Char('x'));
        assert_eq!(Delimiter::from("--"), Delimiter::Literal("--".to_string()));
        assert_eq!(
            Delimiter::from(CharSet::from("ab")),
            Delimiter::chars("ba")
        );
    }
}
