//! Line classification for pasted outcome text.
//!
//! Each trimmed, non-empty line is classified on its own, independent of any
//! parser state. Precedence matters: a bare proficiency word is checked
//! first, then the single-line legacy record, then the Canvas item-name
//! shape. Whatever matches none of these is inert noise (per-assignment
//! grade tokens like `P` or `NY`, stray headers, and so on).

use common::types::ProficiencyLevel;
use once_cell::sync::Lazy;
use regex::Regex;

/// Legacy single-line record: `<name> - <proficiency word>`, with the
/// proficiency word anchored to the end of the line.
static LEGACY_RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)\s*-\s*(advanced|proficient|developing|not yet)$").unwrap()
});

/// Canvas-exported item name: leading digits, whitespace, then the rest of
/// the title (e.g. `16 Reading (12.6)`).
static ITEM_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s+.+").unwrap());

/// Classification of a single trimmed, non-empty input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A bare proficiency word; closes a pending Canvas record if one is
    /// open.
    Proficiency(ProficiencyLevel),
    /// A complete legacy record, emitted on its own.
    LegacyRecord {
        name: String,
        proficiency: ProficiencyLevel,
    },
    /// A Canvas item-name line; opens (or replaces) the pending record.
    ItemName(String),
    /// Anything else. Skipped without opening or closing a record.
    Noise,
}

/// Classify one line. Callers are expected to pass trimmed, non-empty text.
pub fn classify(line: &str) -> LineKind {
    if let Some(level) = ProficiencyLevel::from_text(line) {
        return LineKind::Proficiency(level);
    }

    if let Some(caps) = LEGACY_RECORD.captures(line) {
        if let Some(level) = ProficiencyLevel::from_text(&caps[2]) {
            let name = caps[1].trim().to_string();
            if !name.is_empty() {
                return LineKind::LegacyRecord {
                    name,
                    proficiency: level,
                };
            }
        }
    }

    if ITEM_NAME.is_match(line) {
        return LineKind::ItemName(line.to_string());
    }

    LineKind::Noise
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_proficiency_words_any_case() {
        assert_eq!(
            classify("Advanced"),
            LineKind::Proficiency(ProficiencyLevel::Advanced)
        );
        assert_eq!(
            classify("not yet"),
            LineKind::Proficiency(ProficiencyLevel::NotYet)
        );
        assert_eq!(
            classify("DEVELOPING"),
            LineKind::Proficiency(ProficiencyLevel::Developing)
        );
    }

    #[test]
    fn legacy_record_captures_name_and_level() {
        assert_eq!(
            classify("Reading 2.1 - Advanced"),
            LineKind::LegacyRecord {
                name: "Reading 2.1".to_string(),
                proficiency: ProficiencyLevel::Advanced,
            }
        );
        assert_eq!(
            classify("Writing 2.2-proficient"),
            LineKind::LegacyRecord {
                name: "Writing 2.2".to_string(),
                proficiency: ProficiencyLevel::Proficient,
            }
        );
    }

    #[test]
    fn legacy_record_keeps_interior_hyphens_in_name() {
        assert_eq!(
            classify("Self-Management 4.2 - Not Yet"),
            LineKind::LegacyRecord {
                name: "Self-Management 4.2".to_string(),
                proficiency: ProficiencyLevel::NotYet,
            }
        );
    }

    #[test]
    fn legacy_outranks_item_name_on_numbered_lines() {
        // Precedence: the dash pattern wins even when the line starts with
        // digits like a Canvas name.
        assert_eq!(
            classify("16 Reading - Advanced"),
            LineKind::LegacyRecord {
                name: "16 Reading".to_string(),
                proficiency: ProficiencyLevel::Advanced,
            }
        );
    }

    #[test]
    fn item_name_requires_leading_digits() {
        assert_eq!(
            classify("16 Reading (12.6)"),
            LineKind::ItemName("16 Reading (12.6)".to_string())
        );
        assert_eq!(classify("Reading (12.6)"), LineKind::Noise);
    }

    #[test]
    fn grade_tokens_and_fragments_are_noise() {
        assert_eq!(classify("P"), LineKind::Noise);
        assert_eq!(classify("NY"), LineKind::Noise);
        assert_eq!(classify("- Advanced"), LineKind::Noise);
        assert_eq!(classify("42"), LineKind::Noise);
        assert_eq!(classify("Advanced Placement"), LineKind::Noise);
    }
}
