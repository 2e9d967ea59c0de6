use thiserror::Error;

/// Caller contract violations raised at the API boundary.
///
/// Splitting and joining themselves never fail; these only come from building
/// options or delimiters out of untrusted input.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Unknown split option: {0}")]
    UnknownOption(String),

    #[error("Undefined split option bits: {0:#010b}")]
    UnknownBits(u8),

    #[error("Aho-Corasick build error: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}
