//! # Gradebook Library
//!
//! Host-side state for the grade tracker: named subjects owning ordered
//! outcome collections, mutated through explicit methods that uphold the
//! domain invariants, plus whole-snapshot JSON persistence. The in-memory
//! representation is never a snapshot blob; the whole-document shape only
//! exists at the persistence boundary.
//!
//! ## Key Concepts
//! - **[`Gradebook`]**: the owned subject map and current selection, with
//!   insert/update/delete methods.
//! - **Snapshot**: [`snapshot::load`] / [`snapshot::save`] move the whole
//!   gradebook across the persistence boundary; a missing or corrupt file
//!   degrades to the empty default.
//! - **[`summary::GradeSummary`]**: counts, percentages, grade and severity
//!   for one subject, recomputed from the live collection on demand.

pub mod snapshot;
pub mod store;
pub mod summary;

pub use store::{Gradebook, GradebookError, Subject};
pub use summary::GradeSummary;
