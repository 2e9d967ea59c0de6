/// Character class used by character-type splitting.
///
/// Classification is locale-independent and relies only on the Unicode
/// case and numeric properties of the code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    /// Any Unicode numeric character (`Nd`, `Nl` or `No`), not only decimal
    /// digits: `"1½²"` is a single digit run.
    Digit,
    /// Anything else. Two `Other` characters never belong to the same run.
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }

    /// Whether adjacent characters of this class merge into one run.
    pub fn coalesces(self) -> bool {
        self != CharClass::Other
    }
}

pub fn is_blank(c: char) -> bool {
    c.is_whitespace()
}

/// Visible, non-blank character.
pub fn is_graph(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

/// Whether a zero-width boundary sits between `prev` and `cur`.
///
/// `next` is the character after `cur`, needed for the acronym rule: in
/// camel-case mode an upper-case run followed by lower case gives up its last
/// capital to the lower-case word ("ASFRules" -> "ASF", "Rules").
pub fn is_class_boundary(prev: char, cur: char, next: Option<char>, camel_case: bool) -> bool {
    let prev_class = CharClass::of(prev);
    let cur_class = CharClass::of(cur);

    if camel_case && prev_class == CharClass::Upper {
        match cur_class {
            CharClass::Lower => return false,
            CharClass::Upper if next.map(CharClass::of) == Some(CharClass::Lower) => return true,
            _ => {}
        }
    }

    prev_class != cur_class || !prev_class.coalesces()
}
