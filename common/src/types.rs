//! # Types Module
//!
//! Shared domain types for the grade tracker: the four-level proficiency
//! scale and the outcome records every other crate consumes. Outcomes are
//! produced by the parser and held in subject collections owned by the
//! gradebook store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four-level proficiency scale an outcome can be rated at.
///
/// Input is matched case-insensitively; output always uses the canonical
/// form (`"Not Yet"` keeps its internal space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Advanced,
    Proficient,
    Developing,
    #[serde(rename = "Not Yet")]
    NotYet,
}

impl ProficiencyLevel {
    /// All levels, ordered from strongest to weakest.
    pub const ALL: [ProficiencyLevel; 4] = [
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Proficient,
        ProficiencyLevel::Developing,
        ProficiencyLevel::NotYet,
    ];

    /// Parse one of the four proficiency words, ignoring case and
    /// surrounding whitespace. Anything else is `None`.
    pub fn from_text(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "advanced" => Some(ProficiencyLevel::Advanced),
            "proficient" => Some(ProficiencyLevel::Proficient),
            "developing" => Some(ProficiencyLevel::Developing),
            "not yet" => Some(ProficiencyLevel::NotYet),
            _ => None,
        }
    }

    /// The canonical display form of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Proficient => "Proficient",
            ProficiencyLevel::Developing => "Developing",
            ProficiencyLevel::NotYet => "Not Yet",
        }
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named learning outcome with its final proficiency rating.
///
/// The `name` is never empty or whitespace-only; the parser only emits
/// outcomes with a captured name and the store rejects blank names on edit.
/// Once created, only `proficiency` may be overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Opaque identifier, unique within a running session.
    pub id: String,
    /// Display name, exactly as captured from the pasted text.
    pub name: String,
    /// Final proficiency rating for this outcome.
    pub proficiency: ProficiencyLevel,
}

impl Outcome {
    /// Create an outcome with a freshly generated identifier.
    pub fn new(name: impl Into<String>, proficiency: ProficiencyLevel) -> Self {
        Outcome {
            id: new_id(),
            name: name.into(),
            proficiency,
        }
    }
}

/// Generate an opaque identifier for a new outcome or subject. Uniqueness is
/// only required within a session, so a random UUID is more than enough.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
