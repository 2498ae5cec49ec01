//! Heading layout engine
//!
//! Turns multi-line text into a framed block: boundary lines and columns drawn
//! with a repeating boundary pattern, interior space drawn with a repeating
//! fill pattern, and the text centered inside, word-wrapped when a fixed width
//! is in effect.
//!
//! The engine performs no I/O and keeps no state between calls. Everything it
//! needs comes from [`HeadingSettings`] and the text passed to [`render`].

pub mod frame;
pub mod pattern;
pub mod sections;
pub mod wrap;

pub use frame::{render, LINE_TERMINATOR};

use serde::{Deserialize, Deserializer, Serialize};

/// Boundary pattern used when none (or an empty one) is supplied
pub const DEFAULT_BOUNDARY_SEQUENCE: &str = "/";
/// Fill pattern used when none (or an empty one) is supplied
pub const DEFAULT_FILL_SEQUENCE: &str = "-";

/// Largest value any size setting accepts; larger requests are capped
pub const MAX_SIZE: usize = 1000;

const DEFAULT_VERTICAL_BOUNDARY_SIZE: usize = 1;
const DEFAULT_HORIZONTAL_BOUNDARY_SIZE: usize = 10;
const DEFAULT_SECTION_BUFFER_SIZE: usize = 1;
const DEFAULT_FIXED_SIZE: usize = 80;

/// Layout settings for a single heading
///
/// Fields are private so every write goes through a setter, which clamps sizes
/// and refuses empty patterns. A value read back from disk is passed through
/// the same rules (see [`HeadingSettings::sanitized`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSettings {
    boundary_sequence: String,
    fill_sequence: String,
    #[serde(deserialize_with = "deserialize_size")]
    vertical_boundary_size: usize,
    #[serde(deserialize_with = "deserialize_size")]
    horizontal_boundary_size: usize,
    #[serde(deserialize_with = "deserialize_size")]
    vertical_buffer_size: usize,
    #[serde(deserialize_with = "deserialize_size")]
    horizontal_buffer_size: usize,
    #[serde(deserialize_with = "deserialize_size")]
    section_buffer_size: usize,
    use_fixed_width: bool,
    #[serde(deserialize_with = "deserialize_size")]
    fixed_size: usize,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            boundary_sequence: DEFAULT_BOUNDARY_SEQUENCE.to_string(),
            fill_sequence: DEFAULT_FILL_SEQUENCE.to_string(),
            vertical_boundary_size: DEFAULT_VERTICAL_BOUNDARY_SIZE,
            horizontal_boundary_size: DEFAULT_HORIZONTAL_BOUNDARY_SIZE,
            vertical_buffer_size: 0,
            horizontal_buffer_size: 0,
            section_buffer_size: DEFAULT_SECTION_BUFFER_SIZE,
            use_fixed_width: true,
            fixed_size: DEFAULT_FIXED_SIZE,
        }
    }
}

/// Clamp a user supplied size into `0..=MAX_SIZE`
fn clamp_size(value: i64) -> usize {
    usize::try_from(value.clamp(0, MAX_SIZE as i64)).unwrap_or(MAX_SIZE)
}

/// Stored sizes go through the same cap as the setters
fn deserialize_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u64::deserialize(deserializer)?;
    Ok(usize::try_from(value).map_or(MAX_SIZE, |v| v.min(MAX_SIZE)))
}

impl HeadingSettings {
    /// Create settings with the default layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the setter rules to a record that bypassed the setters
    /// (for example one read from disk)
    pub fn sanitized(mut self) -> Self {
        if self.boundary_sequence.is_empty() {
            self.boundary_sequence = DEFAULT_BOUNDARY_SEQUENCE.to_string();
        }
        if self.fill_sequence.is_empty() {
            self.fill_sequence = DEFAULT_FILL_SEQUENCE.to_string();
        }
        for size in [
            &mut self.vertical_boundary_size,
            &mut self.horizontal_boundary_size,
            &mut self.vertical_buffer_size,
            &mut self.horizontal_buffer_size,
            &mut self.section_buffer_size,
            &mut self.fixed_size,
        ] {
            *size = (*size).min(MAX_SIZE);
        }
        self.fixed_size = self.fixed_size.max(1);
        self
    }

    pub fn boundary_sequence(&self) -> &str {
        &self.boundary_sequence
    }

    /// Set the boundary pattern. An empty pattern is ignored.
    ///
    /// Returns whether the value changed.
    pub fn set_boundary_sequence(&mut self, sequence: &str) -> bool {
        if sequence.is_empty() {
            return false;
        }
        self.boundary_sequence = sequence.to_string();
        true
    }

    pub fn fill_sequence(&self) -> &str {
        &self.fill_sequence
    }

    /// Set the fill pattern. An empty pattern is ignored.
    ///
    /// Returns whether the value changed.
    pub fn set_fill_sequence(&mut self, sequence: &str) -> bool {
        if sequence.is_empty() {
            return false;
        }
        self.fill_sequence = sequence.to_string();
        true
    }

    pub fn vertical_boundary_size(&self) -> usize {
        self.vertical_boundary_size
    }

    pub fn set_vertical_boundary_size(&mut self, size: i64) {
        self.vertical_boundary_size = clamp_size(size);
    }

    pub fn horizontal_boundary_size(&self) -> usize {
        self.horizontal_boundary_size
    }

    pub fn set_horizontal_boundary_size(&mut self, size: i64) {
        self.horizontal_boundary_size = clamp_size(size);
    }

    pub fn vertical_buffer_size(&self) -> usize {
        self.vertical_buffer_size
    }

    pub fn set_vertical_buffer_size(&mut self, size: i64) {
        self.vertical_buffer_size = clamp_size(size);
    }

    pub fn horizontal_buffer_size(&self) -> usize {
        self.horizontal_buffer_size
    }

    pub fn set_horizontal_buffer_size(&mut self, size: i64) {
        self.horizontal_buffer_size = clamp_size(size);
    }

    pub fn section_buffer_size(&self) -> usize {
        self.section_buffer_size
    }

    pub fn set_section_buffer_size(&mut self, size: i64) {
        self.section_buffer_size = clamp_size(size);
    }

    pub fn use_fixed_width(&self) -> bool {
        self.use_fixed_width
    }

    pub fn set_use_fixed_width(&mut self, enabled: bool) {
        self.use_fixed_width = enabled;
    }

    pub fn fixed_size(&self) -> usize {
        self.fixed_size
    }

    /// Set the forced interior width, never below one column
    pub fn set_fixed_size(&mut self, size: i64) {
        self.fixed_size = clamp_size(size).max(1);
    }

    /// Human readable summary, one `name = value` pair per line
    pub fn describe(&self) -> String {
        [
            format!("boundary            = {:?}", self.boundary_sequence),
            format!("fill                = {:?}", self.fill_sequence),
            format!("vertical-boundary   = {}", self.vertical_boundary_size),
            format!("horizontal-boundary = {}", self.horizontal_boundary_size),
            format!("vertical-buffer     = {}", self.vertical_buffer_size),
            format!("horizontal-buffer   = {}", self.horizontal_buffer_size),
            format!("section-buffer      = {}", self.section_buffer_size),
            format!("fixed-width         = {}", self.use_fixed_width),
            format!("fixed-size          = {}", self.fixed_size),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = HeadingSettings::default();
        assert_eq!(settings.boundary_sequence(), "/");
        assert_eq!(settings.fill_sequence(), "-");
        assert_eq!(settings.vertical_boundary_size(), 1);
        assert_eq!(settings.horizontal_boundary_size(), 10);
        assert_eq!(settings.vertical_buffer_size(), 0);
        assert_eq!(settings.horizontal_buffer_size(), 0);
        assert_eq!(settings.section_buffer_size(), 1);
        assert!(settings.use_fixed_width());
        assert_eq!(settings.fixed_size(), 80);
    }

    #[test]
    fn test_negative_sizes_clamp_to_zero() {
        let mut settings = HeadingSettings::default();
        settings.set_vertical_boundary_size(-3);
        settings.set_horizontal_boundary_size(-1);
        settings.set_vertical_buffer_size(-10);
        settings.set_horizontal_buffer_size(i64::MIN);
        settings.set_section_buffer_size(-2);

        assert_eq!(settings.vertical_boundary_size(), 0);
        assert_eq!(settings.horizontal_boundary_size(), 0);
        assert_eq!(settings.vertical_buffer_size(), 0);
        assert_eq!(settings.horizontal_buffer_size(), 0);
        assert_eq!(settings.section_buffer_size(), 0);
    }

    #[test]
    fn test_fixed_size_clamps_to_one() {
        let mut settings = HeadingSettings::default();
        settings.set_fixed_size(0);
        assert_eq!(settings.fixed_size(), 1);
        settings.set_fixed_size(-40);
        assert_eq!(settings.fixed_size(), 1);
        settings.set_fixed_size(42);
        assert_eq!(settings.fixed_size(), 42);
    }

    #[test]
    fn test_large_sizes_are_capped() {
        let mut settings = HeadingSettings::default();
        settings.set_horizontal_buffer_size(i64::MAX);
        settings.set_horizontal_boundary_size(MAX_SIZE as i64 + 1);
        settings.set_fixed_size(i64::MAX);
        settings.set_vertical_buffer_size(MAX_SIZE as i64);

        assert_eq!(settings.horizontal_buffer_size(), MAX_SIZE);
        assert_eq!(settings.horizontal_boundary_size(), MAX_SIZE);
        assert_eq!(settings.fixed_size(), MAX_SIZE);
        assert_eq!(settings.vertical_buffer_size(), MAX_SIZE);
    }

    #[test]
    fn test_deserialize_caps_sizes() {
        let parsed: HeadingSettings = serde_json::from_str(
            r#"{"horizontal_buffer_size": 18446744073709551615, "section_buffer_size": 5}"#,
        )
        .unwrap();
        assert_eq!(parsed.horizontal_buffer_size(), MAX_SIZE);
        assert_eq!(parsed.section_buffer_size(), 5);
    }

    #[test]
    fn test_empty_sequence_keeps_previous_value() {
        let mut settings = HeadingSettings::default();
        assert!(!settings.set_boundary_sequence(""));
        assert_eq!(settings.boundary_sequence(), DEFAULT_BOUNDARY_SEQUENCE);

        assert!(settings.set_boundary_sequence("<=>"));
        assert!(!settings.set_boundary_sequence(""));
        assert_eq!(settings.boundary_sequence(), "<=>");

        assert!(settings.set_fill_sequence("~."));
        assert!(!settings.set_fill_sequence(""));
        assert_eq!(settings.fill_sequence(), "~.");
    }

    #[test]
    fn test_deserialize_missing_fields_uses_defaults() {
        let parsed: HeadingSettings = serde_json::from_str(r#"{"fill_sequence": "="}"#).unwrap();
        assert_eq!(parsed.fill_sequence(), "=");
        assert_eq!(parsed.boundary_sequence(), DEFAULT_BOUNDARY_SEQUENCE);
        assert_eq!(parsed.fixed_size(), DEFAULT_FIXED_SIZE);
    }

    #[test]
    fn test_sanitized_repairs_invalid_record() {
        let parsed: HeadingSettings =
            toml::from_str("boundary_sequence = \"\"\nfill_sequence = \"\"\nfixed_size = 0\n")
                .unwrap();
        let settings = parsed.sanitized();
        assert_eq!(settings.boundary_sequence(), DEFAULT_BOUNDARY_SEQUENCE);
        assert_eq!(settings.fill_sequence(), DEFAULT_FILL_SEQUENCE);
        assert_eq!(settings.fixed_size(), 1);
    }

    #[test]
    fn test_describe_lists_every_field() {
        let text = HeadingSettings::default().describe();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("boundary            = \"/\""));
        assert!(text.contains("fixed-size          = 80"));
    }
}
