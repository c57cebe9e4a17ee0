//! Validation report accumulated over one skill folder

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Findings for a single validation run.
///
/// Errors and warnings are append-only and ordered by detection sequence.
/// A skill is valid iff the error list is empty; warnings never affect
/// validity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Path of the skill folder that was validated
    pub skill_path: PathBuf,
    /// Must-fix findings
    pub errors: Vec<String>,
    /// Advisory findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new(skill_path: impl Into<PathBuf>) -> Self {
        Self {
            skill_path: skill_path.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Whether the skill passed validation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn path(&self) -> &Path {
        &self.skill_path
    }
}
