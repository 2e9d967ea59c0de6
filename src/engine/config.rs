// Configuration for split and line-splitting calls.
// Every struct defaults to the plain behaviour: no flags, no limit.

use crate::split::SplitOptions;

/// Settings for the general tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitConfig {
    /// Post-processing flags (default NONE)
    pub options: SplitOptions,

    /// Maximum number of pieces to cut; the last piece keeps the unsplit
    /// remainder. `None` or `Some(0)` means unlimited (default `None`).
    pub max_tokens: Option<usize>,
}

impl SplitConfig {
    pub fn new(options: SplitOptions) -> Self {
        Self {
            options,
            max_tokens: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// The effective piece limit, with `0` folded into "unlimited".
    pub(crate) fn limit(&self) -> Option<usize> {
        self.max_tokens.filter(|&max| max > 0)
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            options: SplitOptions::NONE,
            max_tokens: None,
        }
    }
}

impl From<SplitOptions> for SplitConfig {
    fn from(options: SplitOptions) -> Self {
        Self::new(options)
    }
}

/// Settings for line splitting; independent of [`SplitOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LineConfig {
    /// Strip trailing blanks from every line (default false)
    pub trim: bool,

    /// Drop the final line when it is empty (default false)
    pub trim_trailing_empty_line: bool,
}

impl LineConfig {
    pub fn new(trim: bool, trim_trailing_empty_line: bool) -> Self {
        Self {
            trim,
            trim_trailing_empty_line,
        }
    }
}

/// Master configuration combining both splitters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub split: SplitConfig,
    pub lines: LineConfig,
}
