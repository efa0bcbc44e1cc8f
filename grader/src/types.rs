//! # Types Module
//!
//! Data structures for the grade classifier: proficiency tallies, their
//! fractional projection, and the closed set of grade labels with their
//! display severities. Counts and percentages are always derived from a live
//! outcome collection and never stored.

use serde::{Deserialize, Serialize};

/// Tally of outcomes per proficiency level.
///
/// `total` always equals the sum of the four level fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyCounts {
    pub advanced: usize,
    pub proficient: usize,
    pub developing: usize,
    pub not_yet: usize,
    pub total: usize,
}

/// The same tally as fractions of the total, each in `[0, 1]`.
///
/// All four fields are zero when the total is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProficiencyPercentages {
    pub advanced: f64,
    pub proficient: f64,
    pub developing: f64,
    pub not_yet: f64,
}

/// Final letter grade for a subject, or the `NoData` sentinel when the
/// subject has no outcomes yet. Serialized as the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    Warning,
    #[serde(rename = "No Data")]
    NoData,
}

impl Grade {
    /// The display label for this grade.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::Warning => "Warning",
            Grade::NoData => "No Data",
        }
    }

    /// Display severity for this grade. Used for colouring only, never for
    /// grading decisions.
    pub fn severity(&self) -> Severity {
        match self {
            Grade::A | Grade::AMinus => Severity::Favorable,
            Grade::BPlus | Grade::B | Grade::BMinus => Severity::Good,
            Grade::CPlus | Grade::C | Grade::CMinus => Severity::Caution,
            Grade::Warning => Severity::Alert,
            Grade::NoData => Severity::Neutral,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-only severity classes a host can map to colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Favorable,
    Good,
    Caution,
    Alert,
    Neutral,
}
