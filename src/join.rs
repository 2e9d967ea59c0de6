// Joiner - inverse of split
use std::borrow::Cow;
use std::fmt::Display;

use crate::engine::range::clamp_range;

/// Text placed between joined elements. A missing separator is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Separator<'a>(Cow<'a, str>);

impl Separator<'_> {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<char> for Separator<'_> {
    fn from(separator: char) -> Self {
        Separator(Cow::Owned(separator.to_string()))
    }
}

impl<'a> From<&'a str> for Separator<'a> {
    fn from(separator: &'a str) -> Self {
        Separator(Cow::Borrowed(separator))
    }
}

impl<'a> From<&'a String> for Separator<'a> {
    fn from(separator: &'a String) -> Self {
        Separator(Cow::Borrowed(separator.as_str()))
    }
}

impl From<String> for Separator<'_> {
    fn from(separator: String) -> Self {
        Separator(Cow::Owned(separator))
    }
}

impl<'a> From<Option<&'a str>> for Separator<'a> {
    fn from(separator: Option<&'a str>) -> Self {
        Separator(Cow::Borrowed(separator.unwrap_or_default()))
    }
}

impl From<Option<char>> for Separator<'_> {
    fn from(separator: Option<char>) -> Self {
        separator.map(Separator::from).unwrap_or_default()
    }
}

/// Concatenates elements with a separator, optionally over an index range.
///
/// A `None` source joins to `None`, never to an empty string; a `None`
/// element renders as nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Joiner<'a> {
    separator: Separator<'a>,
    range: Option<(isize, isize)>,
}

impl<'a> Joiner<'a> {
    pub fn new(separator: impl Into<Separator<'a>>) -> Self {
        Self {
            separator: separator.into(),
            range: None,
        }
    }

    /// Restricts joining to elements `[from, to)`, clamped to the source.
    pub fn range(mut self, from: isize, to: isize) -> Self {
        self.range = Some((from, to));
        self
    }

    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }

    pub fn join<T: Display>(&self, source: Option<&[Option<T>]>) -> Option<String> {
        let elements = source?;
        Some(match self.select(elements) {
            Some(selected) => self.concat(selected.iter().map(Option::as_ref)),
            None => String::new(),
        })
    }

    /// Joins non-null string elements, the shape `split` produces.
    pub fn join_strs<S: AsRef<str>>(&self, source: Option<&[S]>) -> Option<String> {
        let elements = source?;
        Some(match self.select(elements) {
            Some(selected) => self.concat(selected.iter().map(|s| Some(s.as_ref()))),
            None => String::new(),
        })
    }

    /// Joins any iterable; the range is applied while iterating.
    pub fn join_iter<I, T>(&self, source: Option<I>) -> Option<String>
    where
        I: IntoIterator<Item = Option<T>>,
        T: Display,
    {
        let elements = source?.into_iter();
        Some(match self.range {
            None => self.concat(elements),
            Some((from, to)) => {
                let from = usize::try_from(from).unwrap_or(0);
                let to = usize::try_from(to).unwrap_or(0);
                if from >= to {
                    String::new()
                } else {
                    self.concat(elements.skip(from).take(to - from))
                }
            }
        })
    }

    fn select<'s, E>(&self, elements: &'s [E]) -> Option<&'s [E]> {
        match self.range {
            None => Some(elements),
            Some((from, to)) => {
                clamp_range(elements.len(), from, to).map(|range| &elements[range])
            }
        }
    }

    fn concat<T: Display>(&self, elements: impl Iterator<Item = Option<T>>) -> String {
        let mut joined = String::new();
        for (i, element) in elements.enumerate() {
            if i > 0 {
                joined.push_str(self.separator.as_str());
            }
            if let Some(element) = element {
                joined.push_str(&element.to_string());
            }
        }
        joined
    }
}

pub fn join<'a, T: Display>(
    separator: impl Into<Separator<'a>>,
    source: Option<&[Option<T>]>,
) -> Option<String> {
    Joiner::new(separator).join(source)
}

pub fn join_range<'a, T: Display>(
    separator: impl Into<Separator<'a>>,
    source: Option<&[Option<T>]>,
    from: isize,
    to: isize,
) -> Option<String> {
    Joiner::new(separator).range(from, to).join(source)
}

pub fn join_strs<'a, S: AsRef<str>>(
    separator: impl Into<Separator<'a>>,
    source: Option<&[S]>,
) -> Option<String> {
    Joiner::new(separator).join_strs(source)
}

pub fn join_iter<'a, I, T>(
    separator: impl Into<Separator<'a>>,
    source: Option<I>,
) -> Option<String>
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    Joiner::new(separator).join_iter(source)
}
