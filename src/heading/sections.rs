//! Splitting input text into newline-delimited sections

/// Non-empty runs of input text, in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub sections: Vec<String>,
    /// Length in chars of the longest section, 0 when there are none
    pub longest: usize,
}

impl Sections {
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Split `text` on `'\n'`, dropping empty runs
///
/// Consecutive newlines never produce empty sections, so blank lines in the
/// input do not show up in the heading.
pub fn split(text: &str) -> Sections {
    let mut result = Sections::default();

    for run in text.split('\n').filter(|run| !run.is_empty()) {
        result.longest = result.longest.max(run.chars().count());
        result.sections.push(run.to_string());
    }

    result
}
