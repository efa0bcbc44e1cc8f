//! # Snapshot Module
//!
//! Whole-gradebook JSON persistence. The snapshot document mirrors the
//! legacy local-storage payload (`subjects` map plus `currentSubjectId`), so
//! an exported file from the old tracker loads unchanged. Loading never
//! fails: a missing or corrupt file degrades to the empty default, with the
//! problem logged rather than surfaced.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use common::config::Config;
use serde::{Deserialize, Serialize};

use crate::store::{Gradebook, Subject};

/// On-disk snapshot document. Field names match the legacy payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDoc {
    subjects: HashMap<String, Subject>,
    current_subject_id: Option<String>,
}

/// Errors from writing a snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for SnapshotError {
    fn from(err: io::Error) -> Self {
        SnapshotError::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err)
    }
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(err) => write!(f, "Snapshot I/O error: {err}"),
            SnapshotError::Json(err) => write!(f, "Snapshot JSON error: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Snapshot location from the environment-driven configuration.
pub fn default_path() -> PathBuf {
    PathBuf::from(&Config::get().data_path)
}

/// Load the last saved snapshot, or an empty gradebook when no usable
/// snapshot exists.
pub fn load(path: &Path) -> Gradebook {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("no snapshot at {}, starting empty", path.display());
            return Gradebook::default();
        }
        Err(err) => {
            log::warn!("failed to read snapshot {}: {err}", path.display());
            return Gradebook::default();
        }
    };

    match serde_json::from_str::<SnapshotDoc>(&raw) {
        Ok(doc) => {
            log::info!(
                "loaded {} subject(s) from {}",
                doc.subjects.len(),
                path.display()
            );
            Gradebook {
                subjects: doc.subjects,
                current_subject_id: doc.current_subject_id,
            }
        }
        Err(err) => {
            log::warn!(
                "corrupt snapshot {}, starting empty: {err}",
                path.display()
            );
            Gradebook::default()
        }
    }
}

/// Persist the whole gradebook, creating parent directories on demand. The
/// write replaces any previous snapshot at the path.
pub fn save(path: &Path, gradebook: &Gradebook) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let doc = SnapshotDoc {
        subjects: gradebook.subjects.clone(),
        current_subject_id: gradebook.current_subject_id.clone(),
    };
    let content = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    log::debug!(
        "saved {} subject(s) to {}",
        gradebook.subject_count(),
        path.display()
    );
    Ok(())
}
