//! # Classifier Module
//!
//! Pure projections from an outcome collection to its proficiency tally,
//! fractional distribution, and final letter grade. Only the distribution
//! matters: reordering the input never changes the result.

use crate::types::{Grade, ProficiencyCounts, ProficiencyPercentages};
use common::types::{Outcome, ProficiencyLevel};

/// Tally outcomes by proficiency level.
///
/// The returned `total` equals the input length, and the four level fields
/// always sum to it.
///
/// # Example
///
/// ```
/// use common::types::{Outcome, ProficiencyLevel};
/// use grader::count_by;
///
/// let outcomes = vec![
///     Outcome::new("Reading 2.1", ProficiencyLevel::Advanced),
///     Outcome::new("Writing 2.2", ProficiencyLevel::Developing),
/// ];
/// let counts = count_by(&outcomes);
/// assert_eq!(counts.advanced, 1);
/// assert_eq!(counts.developing, 1);
/// assert_eq!(counts.total, 2);
/// ```
pub fn count_by(outcomes: &[Outcome]) -> ProficiencyCounts {
    let mut counts = ProficiencyCounts {
        total: outcomes.len(),
        ..Default::default()
    };

    for outcome in outcomes {
        match outcome.proficiency {
            ProficiencyLevel::Advanced => counts.advanced += 1,
            ProficiencyLevel::Proficient => counts.proficient += 1,
            ProficiencyLevel::Developing => counts.developing += 1,
            ProficiencyLevel::NotYet => counts.not_yet += 1,
        }
    }

    counts
}

/// Project a tally into fractions of the total.
///
/// All four fields are zero when the total is zero; otherwise they sum to
/// 1.0 within floating tolerance.
pub fn percentages_of(counts: &ProficiencyCounts) -> ProficiencyPercentages {
    if counts.total == 0 {
        return ProficiencyPercentages::default();
    }

    let total = counts.total as f64;
    ProficiencyPercentages {
        advanced: counts.advanced as f64 / total,
        proficient: counts.proficient as f64 / total,
        developing: counts.developing as f64 / total,
        not_yet: counts.not_yet as f64 / total,
    }
}

/// Classify an outcome collection into its final letter grade.
///
/// Returns [`Grade::NoData`] for an empty collection. Otherwise the
/// distribution is matched against an ordered set of mutually exclusive
/// bands, first match wins:
///
/// - only Advanced/Proficient ratings: `A` / `A-` / `B+` by the Advanced
///   share (≥ 0.5, ≥ 0.2, else);
/// - some Developing but no Not Yet: `B` / `B-` / `C+` / `C` by the combined
///   Advanced+Proficient share (≥ 0.6, ≥ 0.5, ≥ 0.2, else);
/// - any Not Yet: `C-` when their share stays under 0.2, `Warning` otherwise.
///
/// # Example
///
/// ```
/// use common::types::{Outcome, ProficiencyLevel};
/// use grader::{Grade, classify};
///
/// let outcomes: Vec<Outcome> = (0..6)
///     .map(|i| Outcome::new(format!("Outcome {i}"), ProficiencyLevel::Advanced))
///     .chain((0..4).map(|i| Outcome::new(format!("Extra {i}"), ProficiencyLevel::Proficient)))
///     .collect();
///
/// // 6 Advanced + 4 Proficient out of 10: Advanced share 0.6 ≥ 0.5.
/// assert_eq!(classify(&outcomes), Grade::A);
/// assert_eq!(classify(&[]), Grade::NoData);
/// ```
pub fn classify(outcomes: &[Outcome]) -> Grade {
    classify_counts(&count_by(outcomes))
}

/// Band decision over a precomputed tally. Exposed for hosts that already
/// hold counts; [`classify`] is the usual entry point.
pub fn classify_counts(counts: &ProficiencyCounts) -> Grade {
    debug_assert_eq!(
        counts.advanced + counts.proficient + counts.developing + counts.not_yet,
        counts.total,
        "proficiency counts must sum to total"
    );

    if counts.total == 0 {
        return Grade::NoData;
    }

    let total = counts.total as f64;
    let adv = counts.advanced as f64 / total;
    let adv_prof = (counts.advanced + counts.proficient) as f64 / total;
    let ny = counts.not_yet as f64 / total;

    if counts.advanced + counts.proficient == counts.total {
        // Only Advanced and Proficient ratings.
        if adv >= 0.5 {
            Grade::A
        } else if adv >= 0.2 {
            Grade::AMinus
        } else {
            Grade::BPlus
        }
    } else if counts.not_yet == 0 {
        // Some Developing, no Not Yet.
        if adv_prof >= 0.6 {
            Grade::B
        } else if adv_prof >= 0.5 {
            Grade::BMinus
        } else if adv_prof >= 0.2 {
            Grade::CPlus
        } else {
            Grade::C
        }
    } else {
        // At least one Not Yet rating. The three bands partition every
        // non-empty tally, so no fallback arm exists.
        if ny < 0.2 { Grade::CMinus } else { Grade::Warning }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn outcomes_of(levels: &[(ProficiencyLevel, usize)]) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        for &(level, count) in levels {
            for i in 0..count {
                outcomes.push(Outcome::new(format!("{level} outcome {i}"), level));
            }
        }
        outcomes
    }

    fn counts_of(advanced: usize, proficient: usize, developing: usize, not_yet: usize) -> ProficiencyCounts {
        ProficiencyCounts {
            advanced,
            proficient,
            developing,
            not_yet,
            total: advanced + proficient + developing + not_yet,
        }
    }

    #[test]
    fn empty_collection_is_no_data() {
        assert_eq!(classify(&[]), Grade::NoData);
        assert_eq!(count_by(&[]).total, 0);
        assert_eq!(percentages_of(&count_by(&[])), ProficiencyPercentages::default());
    }

    #[test]
    fn scenario_six_advanced_four_proficient_is_a() {
        let outcomes = outcomes_of(&[
            (ProficiencyLevel::Advanced, 6),
            (ProficiencyLevel::Proficient, 4),
        ]);
        assert_eq!(classify(&outcomes), Grade::A);
    }

    #[test]
    fn scenario_with_developing_is_b() {
        let outcomes = outcomes_of(&[
            (ProficiencyLevel::Advanced, 5),
            (ProficiencyLevel::Proficient, 3),
            (ProficiencyLevel::Developing, 2),
        ]);
        assert_eq!(classify(&outcomes), Grade::B);
    }

    #[test]
    fn scenario_three_not_yet_of_ten_is_warning() {
        let outcomes = outcomes_of(&[
            (ProficiencyLevel::Advanced, 4),
            (ProficiencyLevel::Proficient, 2),
            (ProficiencyLevel::Developing, 1),
            (ProficiencyLevel::NotYet, 3),
        ]);
        assert_eq!(classify(&outcomes), Grade::Warning);
    }

    #[test]
    fn first_band_thresholds() {
        // Advanced share exactly 0.5 stays an A.
        assert_eq!(classify_counts(&counts_of(5, 5, 0, 0)), Grade::A);
        // Exactly 0.2 is the A- floor.
        assert_eq!(classify_counts(&counts_of(2, 8, 0, 0)), Grade::AMinus);
        assert_eq!(classify_counts(&counts_of(1, 9, 0, 0)), Grade::BPlus);
        assert_eq!(classify_counts(&counts_of(0, 10, 0, 0)), Grade::BPlus);
    }

    #[test]
    fn second_band_thresholds() {
        assert_eq!(classify_counts(&counts_of(3, 3, 4, 0)), Grade::B);
        assert_eq!(classify_counts(&counts_of(2, 3, 5, 0)), Grade::BMinus);
        assert_eq!(classify_counts(&counts_of(1, 1, 8, 0)), Grade::CPlus);
        assert_eq!(classify_counts(&counts_of(0, 1, 9, 0)), Grade::C);
        assert_eq!(classify_counts(&counts_of(0, 0, 10, 0)), Grade::C);
    }

    #[test]
    fn third_band_thresholds() {
        // One Not Yet in ten is 0.1 < 0.2.
        assert_eq!(classify_counts(&counts_of(5, 3, 1, 1)), Grade::CMinus);
        // Exactly 0.2 tips into Warning.
        assert_eq!(classify_counts(&counts_of(5, 2, 1, 2)), Grade::Warning);
        assert_eq!(classify_counts(&counts_of(0, 0, 0, 1)), Grade::Warning);
    }

    #[test]
    fn not_yet_outranks_developing_bands() {
        // A single Not Yet forces the third band no matter how strong the
        // rest of the distribution is.
        assert_eq!(classify_counts(&counts_of(9, 0, 0, 1)), Grade::CMinus);
    }

    #[test]
    fn every_nonempty_tally_lands_in_exactly_one_band() {
        // Adversarial sweep over count grids: a grade is always produced,
        // NoData never leaks out for total > 0, and the three top-level
        // band predicates are mutually exclusive and exhaustive.
        for advanced in 0..=8 {
            for proficient in 0..=8 {
                for developing in 0..=8 {
                    for not_yet in 0..=8 {
                        let counts = counts_of(advanced, proficient, developing, not_yet);
                        if counts.total == 0 {
                            assert_eq!(classify_counts(&counts), Grade::NoData);
                            continue;
                        }

                        let only_adv_prof = advanced + proficient == counts.total;
                        let dev_no_ny = !only_adv_prof && not_yet == 0;
                        let some_ny = not_yet > 0;
                        let bands_hit =
                            only_adv_prof as u8 + dev_no_ny as u8 + some_ny as u8;
                        assert_eq!(bands_hit, 1, "bands must partition {counts:?}");

                        let grade = classify_counts(&counts);
                        assert_ne!(grade, Grade::NoData);
                        match grade {
                            Grade::A | Grade::AMinus | Grade::BPlus => {
                                assert!(only_adv_prof)
                            }
                            Grade::B | Grade::BMinus | Grade::CPlus | Grade::C => {
                                assert!(dev_no_ny)
                            }
                            Grade::CMinus | Grade::Warning => assert!(some_ny),
                            Grade::NoData => unreachable!(),
                        }
                    }
                }
            }
        }
    }

    fn arb_outcomes() -> impl Strategy<Value = Vec<Outcome>> {
        prop::collection::vec(
            prop::sample::select(ProficiencyLevel::ALL.to_vec()),
            0..40,
        )
        .prop_map(|levels| {
            levels
                .into_iter()
                .enumerate()
                .map(|(i, level)| Outcome::new(format!("Outcome {i}"), level))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn counts_sum_to_total(outcomes in arb_outcomes()) {
            let counts = count_by(&outcomes);
            prop_assert_eq!(counts.total, outcomes.len());
            prop_assert_eq!(
                counts.advanced + counts.proficient + counts.developing + counts.not_yet,
                counts.total
            );
        }

        #[test]
        fn percentages_sum_to_one(outcomes in arb_outcomes()) {
            prop_assume!(!outcomes.is_empty());
            let p = percentages_of(&count_by(&outcomes));
            let sum = p.advanced + p.proficient + p.developing + p.not_yet;
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        #[test]
        fn classification_is_order_invariant(outcomes in arb_outcomes()) {
            let mut reversed = outcomes.clone();
            reversed.reverse();
            prop_assert_eq!(classify(&outcomes), classify(&reversed));
        }
    }
}
