use core::{cmp::Ordering, ops::Range};

/// Recursive binary search for `value`.
///
/// Each level narrows index bounds into the same slice instead of building a
/// new sub-slice, so both time and stack depth are *O*(log *n*).
#[must_use]
pub fn contains_recursive<T: Ord>(sequence: &[T], value: &T) -> bool {
    contains_within(sequence, value, 0..sequence.len(), 0)
}

fn contains_within<T: Ord>(sequence: &[T], value: &T, bounds: Range<usize>, depth: u32) -> bool {
    // a halving interval over `usize` indices cannot nest deeper than this
    debug_assert!(depth <= usize::BITS);
    if bounds.is_empty() {
        return false;
    }
    let Range { start, end } = bounds;
    let middle = start + (end - 1 - start) / 2;
    match sequence[middle].cmp(value) {
        Ordering::Equal => true,
        Ordering::Less => contains_within(sequence, value, middle + 1..end, depth + 1),
        Ordering::Greater => contains_within(sequence, value, start..middle, depth + 1),
    }
}
