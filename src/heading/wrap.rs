//! Word wrapping and centering of section text

use super::pattern::repeat;

/// Characters a line may be broken at
fn is_break(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

/// Wrap one section into lines of at most `max_width` chars
///
/// A section that already fits is returned untouched. Otherwise the section is
/// walked in windows of `max_width` chars. Inside a window the line starts at
/// the first printable character and breaks at the last whitespace or control
/// character. A space break point is dropped, any other break character stays
/// at the end of its line. When a window has no break candidate the line is
/// cut hard at the window end.
///
/// A window holding nothing but break characters is skipped. When only its
/// final char is printable, the next window starts at that char so it is
/// never lost.
pub fn wrap(section: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let chars: Vec<char> = section.chars().collect();
    if chars.len() <= max_width {
        return vec![section.to_string()];
    }

    let last = chars.len() - 1;
    let mut lines = Vec::new();
    let mut window_start = 0;

    while window_start <= last {
        let end = (window_start + max_width - 1).min(last);

        let mut start = window_start;
        while start < end && is_break(chars[start]) {
            start += 1;
        }
        if start == end && is_break(chars[end]) {
            window_start = end + 1;
            continue;
        }
        if start == end && start != window_start {
            window_start = end;
            continue;
        }

        let (line_end, next_start) = if end == last {
            (end + 1, end + 1)
        } else {
            match (start..=end).rev().find(|&i| is_break(chars[i])) {
                Some(b) if chars[b] == ' ' => (b, b + 1),
                Some(b) => (b + 1, b + 1),
                None => (end + 1, end + 1),
            }
        };

        lines.push(chars[start..line_end].iter().collect());
        window_start = next_start;
    }

    lines
}

/// Center `line` in `max_width + 2 * horizontal_buffer` columns of `fill`
///
/// The fill on the right continues the pattern as if it had run underneath
/// the text, so a multi-character fill reads as one ribbon across the line.
pub fn pad(line: &str, max_width: usize, horizontal_buffer: usize, fill: &str) -> String {
    let len = line.chars().count();
    let needed = max_width.saturating_sub(len) + 2 * horizontal_buffer;
    if needed == 0 {
        return line.to_string();
    }

    let left = needed / 2;
    let right = needed - left;

    let mut padded = repeat(fill, left, 0);
    padded.push_str(line);
    padded.push_str(&repeat(fill, right, left + len));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_wrap_short_section_untouched() {
        assert_eq!(wrap("  Hi  ", 10), vec!["  Hi  "]);
        assert_eq!(wrap("exactly10!", 10), vec!["exactly10!"]);
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        assert_eq!(
            wrap(FOX, 10),
            vec!["The quick", "brown fox", "jumps", "over the", "lazy dog"]
        );
    }

    #[test]
    fn test_wrap_lines_never_exceed_width() {
        for width in 1..=FOX.len() {
            for line in wrap(FOX, width) {
                assert!(line.chars().count() <= width, "width {width}: {line:?}");
                assert!(!line.is_empty());
            }
        }
    }

    #[test]
    fn test_wrap_hard_cut_without_whitespace() {
        let section = "a".repeat(50);
        let lines = wrap(&section, 10);
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l == &"a".repeat(10)));
    }

    #[test]
    fn test_wrap_hard_cut_with_remainder() {
        assert_eq!(wrap("abcdefghijk", 4), vec!["abcd", "efgh", "ijk"]);
    }

    #[test]
    fn test_wrap_indented_section_keeps_window_in_place() {
        // The window is measured from the indentation, not from the first letter
        assert_eq!(wrap("    abcdefgh", 6), vec!["ab", "cdefgh"]);
        assert_eq!(wrap("      hello world", 8), vec!["he", "llo", "world"]);
    }

    #[test]
    fn test_wrap_last_printable_char_of_window_is_kept() {
        assert_eq!(wrap("     abc", 6), vec!["abc"]);
        assert_eq!(wrap("     a", 3), vec!["a"]);
    }

    #[test]
    fn test_wrap_single_column() {
        assert_eq!(wrap("a b", 1), vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_whitespace_only_windows_are_dropped() {
        // Only the break space itself is trimmed
        assert_eq!(wrap("ab            cd", 4), vec!["ab ", "cd"]);
    }

    #[test]
    fn test_wrap_keeps_non_space_break_character() {
        assert_eq!(wrap("one\ttwo three", 5), vec!["one\t", "two", "three"]);
    }

    #[test]
    fn test_wrap_preserves_reading_order() {
        let lines = wrap(FOX, 7);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, FOX);
    }

    #[test]
    fn test_wrap_is_idempotent_on_its_own_output() {
        for width in 6..=20 {
            let first = wrap(FOX, width);
            let second = wrap(&first.join(" "), width);
            assert_eq!(first, second, "width {width}");
        }
    }

    #[test]
    fn test_wrap_counts_chars() {
        assert_eq!(wrap("ééé ééé", 4), vec!["ééé", "ééé"]);
    }

    #[test]
    fn test_pad_centers_text() {
        let padded = pad("Hi", 80, 0, "-");
        assert_eq!(padded.chars().count(), 80);
        assert_eq!(padded, format!("{}Hi{}", "-".repeat(39), "-".repeat(39)));
    }

    #[test]
    fn test_pad_odd_remainder_goes_right() {
        assert_eq!(pad("abc", 6, 0, "."), ".abc..");
    }

    #[test]
    fn test_pad_includes_horizontal_buffer() {
        assert_eq!(pad("ab", 2, 2, "*"), "**ab**");
    }

    #[test]
    fn test_pad_nothing_needed() {
        assert_eq!(pad("full", 4, 0, "-"), "full");
    }

    #[test]
    fn test_pad_fill_continues_through_text() {
        let padded = pad("ab", 5, 1, "123");
        assert_eq!(padded, "12ab231");

        let ribbon = repeat("123", 7, 0);
        assert_eq!(&padded[..2], &ribbon[..2]);
        assert_eq!(&padded[4..], &ribbon[4..]);
    }
}
