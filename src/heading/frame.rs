//! Frame assembly
//!
//! Vertical order of a rendered heading:
//!
//! ```text
//! boundary lines      x vertical_boundary_size
//! buffer lines        x vertical_buffer_size
//! section lines       (wrapped, one framed line each)
//! buffer lines        x section_buffer_size   (between sections only)
//! section lines ...
//! buffer lines        x vertical_buffer_size
//! boundary lines      x vertical_boundary_size
//! ```

use std::iter;

use super::pattern::repeat;
use super::sections::{split, Sections};
use super::wrap::{pad, wrap};
use super::HeadingSettings;

/// Separator placed between the lines of a rendered heading
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
/// Separator placed between the lines of a rendered heading
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Render `text` as a framed heading
///
/// Every line of the result has the same length in chars:
/// `width + 2 * horizontal_buffer + 2 * horizontal_boundary`, where `width` is
/// the fixed size when fixed width is on and the longest section otherwise.
/// Empty text yields only boundary and buffer lines.
pub fn render(settings: &HeadingSettings, text: &str) -> String {
    let Sections { sections, longest } = split(text);

    let width = if settings.use_fixed_width() {
        settings.fixed_size()
    } else {
        longest
    };

    let boundary = settings.boundary_sequence();
    let fill = settings.fill_sequence();
    let side = settings.horizontal_boundary_size();
    let buffer = settings.horizontal_buffer_size();
    let interior = width + 2 * buffer;
    let total = interior + 2 * side;

    // The right column picks the boundary pattern up at its own column so it
    // lines up with the full boundary lines above and below.
    let full_boundary = repeat(boundary, total, 0);
    let left = repeat(boundary, side, 0);
    let right = repeat(boundary, side, side + interior);
    let buffer_line = format!("{left}{}{right}", repeat(fill, interior, 0));

    let boundary_lines =
        || iter::repeat(full_boundary.as_str()).take(settings.vertical_boundary_size());
    let buffer_lines = |count: usize| iter::repeat(buffer_line.as_str()).take(count);

    let mut lines: Vec<String> = Vec::new();
    lines.extend(boundary_lines().map(str::to_string));
    lines.extend(buffer_lines(settings.vertical_buffer_size()).map(str::to_string));

    for (index, section) in sections.iter().enumerate() {
        for sub_line in wrap(section, width) {
            lines.push(format!("{left}{}{right}", pad(&sub_line, width, buffer, fill)));
        }
        if index + 1 < sections.len() {
            lines.extend(buffer_lines(settings.section_buffer_size()).map(str::to_string));
        }
    }

    lines.extend(buffer_lines(settings.vertical_buffer_size()).map(str::to_string));
    lines.extend(boundary_lines().map(str::to_string));

    lines.join(LINE_TERMINATOR)
}
