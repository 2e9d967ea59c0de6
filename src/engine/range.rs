use std::ops::Range;

/// Clamps a caller-supplied `[from, to)` index range against `len`.
///
/// Negative `from` becomes 0 and `to` past the end becomes `len`. Returns
/// `None` when the clamped range is empty or inverted.
pub fn clamp_range(len: usize, from: isize, to: isize) -> Option<Range<usize>> {
    let from = usize::try_from(from).unwrap_or(0);
    let to = usize::try_from(to).unwrap_or(0).min(len);
    if from >= to {
        None
    } else {
        Some(from..to)
    }
}

/// Byte offset of the `index`-th code point, or `source.len()` past the end.
pub fn char_to_byte(source: &str, index: usize) -> usize {
    source
        .char_indices()
        .nth(index)
        .map_or(source.len(), |(offset, _)| offset)
}
