//! # Summary Module
//!
//! The display surface's data feed: everything needed to render one
//! subject's grade panel, assembled from the pure grader projections. Always
//! recomputed from the live outcome collection, never stored.

use common::types::Outcome;
use grader::{Grade, ProficiencyCounts, ProficiencyPercentages, Severity};
use serde::Serialize;

/// Counts, percentages, final grade and its display severity for one
/// subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeSummary {
    pub counts: ProficiencyCounts,
    pub percentages: ProficiencyPercentages,
    pub grade: Grade,
    pub severity: Severity,
}

impl GradeSummary {
    /// Build the summary for an outcome collection.
    pub fn for_outcomes(outcomes: &[Outcome]) -> Self {
        let counts = grader::count_by(outcomes);
        let percentages = grader::percentages_of(&counts);
        let grade = grader::classify_counts(&counts);
        GradeSummary {
            counts,
            percentages,
            grade,
            severity: grade.severity(),
        }
    }
}
