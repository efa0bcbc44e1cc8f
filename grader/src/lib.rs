//! # Grader Library
//!
//! This crate provides the deterministic grade classification for a subject's
//! outcome collection: tally outcomes by proficiency level, project the tally
//! into fractions, and map the distribution to a letter grade through a fixed
//! decision table.
//!
//! ## Key Concepts
//! - **Counts**: how many outcomes sit at each proficiency level
//!   ([`count_by`]).
//! - **Percentages**: the same distribution as fractions of the total
//!   ([`percentages_of`]).
//! - **Grade**: a closed set of letter labels plus a "No Data" sentinel for
//!   empty collections ([`classify`]).
//! - **Severity**: a display-only mapping from grade to colour class
//!   ([`types::Grade::severity`]).
//!
//! Everything here is a pure function over immutable inputs; only the
//! distribution matters, never the order of outcomes.

pub mod classifier;
pub mod types;

pub use classifier::{classify, classify_counts, count_by, percentages_of};
pub use types::{Grade, ProficiencyCounts, ProficiencyPercentages, Severity};
