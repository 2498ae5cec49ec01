//! Windows into an endlessly repeating pattern
//!
//! Frame pieces are built independently (left column, right column, padding on
//! either side of a text line) yet must read as one unbroken ribbon. Each piece
//! is therefore cut from the same infinite repetition, starting at the phase
//! where the previous piece stopped.

/// Return `length` characters of `pattern` repeated forever, starting at `phase`
///
/// Character `i` of the result is `pattern[(phase + i) % pattern.len()]`, with
/// lengths counted in `char`s. An empty pattern yields an empty string.
pub fn repeat(pattern: &str, length: usize, phase: usize) -> String {
    let cycle: Vec<char> = pattern.chars().collect();
    if cycle.is_empty() || length == 0 {
        return String::new();
    }

    let offset = phase % cycle.len();
    cycle
        .iter()
        .cycle()
        .skip(offset)
        .take(length)
        .collect()
}
