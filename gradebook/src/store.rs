//! # Store Module
//!
//! Owned subject and outcome collections behind explicit mutation methods.
//! Every mutation validates the §3-style invariants: names are never blank,
//! identifiers must resolve, and an existing outcome only ever has its
//! proficiency overwritten.

use std::collections::HashMap;

use common::types::{Outcome, ProficiencyLevel, new_id};
use serde::{Deserialize, Serialize};

use crate::summary::GradeSummary;

/// A named collection of outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub outcomes: Vec<Outcome>,
}

/// All subjects plus the current selection. Mutated only through the methods
/// below; snapshot (de)serialization lives in [`crate::snapshot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradebook {
    pub(crate) subjects: HashMap<String, Subject>,
    pub(crate) current_subject_id: Option<String>,
}

/// Errors from gradebook mutations.
#[derive(Debug, PartialEq, Eq)]
pub enum GradebookError {
    /// A subject or outcome name was empty or whitespace-only.
    BlankName,
    /// No subject with the given id.
    SubjectNotFound(String),
    /// No outcome with the given id in the addressed subject.
    OutcomeNotFound(String),
}

impl std::fmt::Display for GradebookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradebookError::BlankName => write!(f, "Name must not be blank"),
            GradebookError::SubjectNotFound(id) => write!(f, "Subject not found: {id}"),
            GradebookError::OutcomeNotFound(id) => write!(f, "Outcome not found: {id}"),
        }
    }
}

impl std::error::Error for GradebookError {}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a subject and select it as current. Returns the new id.
    pub fn create_subject(&mut self, name: &str) -> Result<String, GradebookError> {
        let name = non_blank(name)?;
        let id = new_id();
        self.subjects.insert(
            id.clone(),
            Subject {
                id: id.clone(),
                name,
                outcomes: Vec::new(),
            },
        );
        self.current_subject_id = Some(id.clone());
        Ok(id)
    }

    /// Rename an existing subject.
    pub fn rename_subject(&mut self, id: &str, name: &str) -> Result<(), GradebookError> {
        let name = non_blank(name)?;
        self.subject_mut(id)?.name = name;
        Ok(())
    }

    /// Remove a subject and everything it owns. Clears the current selection
    /// if it pointed at the removed subject.
    pub fn delete_subject(&mut self, id: &str) -> Result<(), GradebookError> {
        self.subjects
            .remove(id)
            .ok_or_else(|| GradebookError::SubjectNotFound(id.to_string()))?;
        if self.current_subject_id.as_deref() == Some(id) {
            self.current_subject_id = None;
        }
        Ok(())
    }

    /// Make an existing subject the current one.
    pub fn select_subject(&mut self, id: &str) -> Result<(), GradebookError> {
        if !self.subjects.contains_key(id) {
            return Err(GradebookError::SubjectNotFound(id.to_string()));
        }
        self.current_subject_id = Some(id.to_string());
        Ok(())
    }

    /// Append parsed outcomes to a subject, preserving their order. Rejects
    /// the whole batch if any outcome carries a blank name.
    pub fn add_outcomes(
        &mut self,
        subject_id: &str,
        outcomes: Vec<Outcome>,
    ) -> Result<usize, GradebookError> {
        if outcomes.iter().any(|o| o.name.trim().is_empty()) {
            return Err(GradebookError::BlankName);
        }
        let subject = self.subject_mut(subject_id)?;
        let added = outcomes.len();
        subject.outcomes.extend(outcomes);
        Ok(added)
    }

    /// Overwrite the proficiency of an existing outcome. The only field of
    /// an outcome that may change after creation.
    pub fn set_proficiency(
        &mut self,
        subject_id: &str,
        outcome_id: &str,
        level: ProficiencyLevel,
    ) -> Result<(), GradebookError> {
        let subject = self.subject_mut(subject_id)?;
        let outcome = subject
            .outcomes
            .iter_mut()
            .find(|o| o.id == outcome_id)
            .ok_or_else(|| GradebookError::OutcomeNotFound(outcome_id.to_string()))?;
        outcome.proficiency = level;
        Ok(())
    }

    /// Remove a single outcome from a subject.
    pub fn remove_outcome(
        &mut self,
        subject_id: &str,
        outcome_id: &str,
    ) -> Result<(), GradebookError> {
        let subject = self.subject_mut(subject_id)?;
        let index = subject
            .outcomes
            .iter()
            .position(|o| o.id == outcome_id)
            .ok_or_else(|| GradebookError::OutcomeNotFound(outcome_id.to_string()))?;
        subject.outcomes.remove(index);
        Ok(())
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.get(id)
    }

    pub fn current_subject(&self) -> Option<&Subject> {
        self.current_subject_id
            .as_deref()
            .and_then(|id| self.subjects.get(id))
    }

    pub fn current_subject_id(&self) -> Option<&str> {
        self.current_subject_id.as_deref()
    }

    /// Iterate all subjects in no particular order.
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.values()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Counts, percentages, grade and severity for one subject's live
    /// outcome collection.
    pub fn grade_summary(&self, subject_id: &str) -> Result<GradeSummary, GradebookError> {
        let subject = self
            .subjects
            .get(subject_id)
            .ok_or_else(|| GradebookError::SubjectNotFound(subject_id.to_string()))?;
        Ok(GradeSummary::for_outcomes(&subject.outcomes))
    }

    fn subject_mut(&mut self, id: &str) -> Result<&mut Subject, GradebookError> {
        self.subjects
            .get_mut(id)
            .ok_or_else(|| GradebookError::SubjectNotFound(id.to_string()))
    }
}

fn non_blank(name: &str) -> Result<String, GradebookError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GradebookError::BlankName);
    }
    Ok(trimmed.to_string())
}
