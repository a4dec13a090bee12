//! Diagnosis code structural validation.
//!
//! A code is one chapter letter, a two-digit category, and an optional
//! `.`-separated extension of 1-4 alphanumerics (`G70.00`). Category bounds
//! are looked up per chapter so individual chapters can narrow their range.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use intake_model::ValidationResult;
use regex::Regex;

static CODE_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][0-9]{2}(?:\.[A-Z0-9]{1,4})?$").expect("Invalid code shape regex")
});

/// Undotted form accepted by [`format_code`].
static UNDOTTED_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{2}[A-Z0-9]+$").expect("Invalid undotted regex"));

static STANDARD_TABLE: LazyLock<ChapterTable> = LazyLock::new(ChapterTable::standard);

/// Reserved chapter letter with no categories.
pub const RESERVED_CHAPTER: char = 'U';

/// Inclusive category bounds for one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterRange {
    pub min: u8,
    pub max: u8,
}

impl ChapterRange {
    pub const FULL: Self = Self { min: 0, max: 99 };

    pub fn contains(&self, category: u8) -> bool {
        (self.min..=self.max).contains(&category)
    }
}

/// Category bounds keyed by chapter letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterTable {
    chapters: BTreeMap<char, ChapterRange>,
}

impl Default for ChapterTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ChapterTable {
    /// Every letter except [`RESERVED_CHAPTER`], each spanning 00-99.
    pub fn standard() -> Self {
        let chapters = ('A'..='Z')
            .filter(|letter| *letter != RESERVED_CHAPTER)
            .map(|letter| (letter, ChapterRange::FULL))
            .collect();
        Self { chapters }
    }

    /// Override the category bounds of a single chapter.
    #[must_use]
    pub fn with_range(mut self, letter: char, min: u8, max: u8) -> Self {
        self.chapters
            .insert(letter.to_ascii_uppercase(), ChapterRange { min, max });
        self
    }

    /// Remove a chapter so codes starting with `letter` are rejected.
    #[must_use]
    pub fn without(mut self, letter: char) -> Self {
        self.chapters.remove(&letter.to_ascii_uppercase());
        self
    }

    pub fn range(&self, letter: char) -> Option<ChapterRange> {
        self.chapters.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        let code = raw.trim().to_uppercase();
        if !CODE_SHAPE_REGEX.is_match(&code) {
            return ValidationResult::invalid(format!(
                "invalid format '{}': expected a letter, two digits and an optional '.' with 1-4 characters",
                raw.trim()
            ));
        }

        // Shape guarantees an ASCII letter followed by two ASCII digits.
        let bytes = code.as_bytes();
        let letter = char::from(bytes[0]);
        let Some(range) = self.range(letter) else {
            return ValidationResult::invalid(format!("chapter '{letter}' is not a valid chapter"));
        };

        let category = (bytes[1] - b'0') * 10 + (bytes[2] - b'0');
        if !range.contains(category) {
            return ValidationResult::invalid(format!(
                "category {category:02} is out of range for {letter} ({:02}-{:02})",
                range.min, range.max
            ));
        }

        ValidationResult::ok()
    }
}

/// Validate against the standard chapter table.
pub fn validate_code(raw: &str) -> ValidationResult {
    STANDARD_TABLE.validate(raw)
}

/// Canonicalize to `XNN.rest`, or return the input unchanged when it does not
/// look like a code with an extension.
pub fn format_code(raw: &str) -> String {
    let undotted: String = raw.chars().filter(|c| *c != '.').collect::<String>().to_uppercase();
    if !UNDOTTED_CODE_REGEX.is_match(&undotted) {
        return raw.to_string();
    }
    format!("{}.{}", &undotted[..3], &undotted[3..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_skips_reserved_letter() {
        let table = ChapterTable::standard();
        assert_eq!(table.range('A'), Some(ChapterRange::FULL));
        assert_eq!(table.range('z'), Some(ChapterRange::FULL));
        assert_eq!(table.range(RESERVED_CHAPTER), None);
    }

    #[test]
    fn format_inserts_dot_after_category() {
        assert_eq!(format_code("G7000"), "G70.00");
        assert_eq!(format_code("g70.00"), "G70.00");
        assert_eq!(format_code("G70.00"), "G70.00");
        assert_eq!(format_code("E1165"), "E11.65");
    }

    #[test]
    fn format_leaves_unrecognized_input() {
        assert_eq!(format_code("G70"), "G70");
        assert_eq!(format_code("g7a00"), "g7a00");
        assert_eq!(format_code(""), "");
    }
}
