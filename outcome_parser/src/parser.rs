//! # Parser Module
//!
//! Single-pass scan over pasted text. Lines are classified by [`crate::line`]
//! and fed through a two-state machine that carries at most one pending item
//! name: a Canvas name line opens (or replaces) the pending record, and a
//! bare proficiency word closes it into an outcome. Legacy records emit
//! immediately and never touch the pending state.
//!
//! Outcomes are emitted in the order their closing condition is satisfied
//! while scanning top to bottom.

use crate::line::{LineKind, classify};
use common::types::Outcome;

/// Scan state carried across lines: either idle, or holding the most recent
/// item name that still awaits its proficiency word.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Idle,
    NameCaptured(String),
}

fn lines_of(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parse pasted text into outcome records.
///
/// Total over all inputs: malformed or unrecognized lines are silently
/// skipped, never reported. A paste with no recognizable records yields an
/// empty vector.
///
/// # Example
///
/// ```
/// use outcome_parser::parse;
///
/// let outcomes = parse("16 Reading (12.6)\nP\nProficient");
/// assert_eq!(outcomes.len(), 1);
/// assert_eq!(outcomes[0].name, "16 Reading (12.6)");
/// ```
pub fn parse(text: &str) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let mut state = ScanState::Idle;

    for line in lines_of(text) {
        match classify(line) {
            LineKind::Proficiency(level) => {
                // A proficiency word with nothing pending is skipped.
                if let ScanState::NameCaptured(name) =
                    std::mem::replace(&mut state, ScanState::Idle)
                {
                    outcomes.push(Outcome::new(name, level));
                }
            }
            LineKind::LegacyRecord { name, proficiency } => {
                outcomes.push(Outcome::new(name, proficiency));
            }
            LineKind::ItemName(name) => {
                // A new name before the previous one closes abandons it.
                state = ScanState::NameCaptured(name);
            }
            LineKind::Noise => {}
        }
    }

    outcomes
}

/// Cheap validity probe for paste content, used to hint at obviously
/// malformed input before committing to a parse. True when the text contains
/// at least one legacy record, or at least one Canvas item-name line plus at
/// least one bare proficiency word line, regardless of whether they pair up.
pub fn looks_parseable(text: &str) -> bool {
    let mut has_item_name = false;
    let mut has_proficiency_word = false;

    for line in lines_of(text) {
        match classify(line) {
            LineKind::LegacyRecord { .. } => return true,
            LineKind::ItemName(_) => has_item_name = true,
            LineKind::Proficiency(_) => has_proficiency_word = true,
            LineKind::Noise => {}
        }
    }

    has_item_name && has_proficiency_word
}
