//! Skill folder validator
//!
//! Runs the fixed check pipeline over one folder and accumulates findings.
//! Structural failures short-circuit the run; frontmatter field checks are
//! independent and all execute.

use crate::constants::{
    DEEP_REFERENCE_PATTERN, KNOWN_FRONTMATTER_KEYS, MAX_DESCRIPTION_LENGTH, MAX_LINES,
    MAX_NAME_LENGTH, NAME_PATTERN,
};
use crate::error::FrontmatterError;
use crate::frontmatter;
use crate::report::ValidationReport;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Recommended content sections: display name and the lowercase needle
/// searched for in the document
const RECOMMENDED_SECTIONS: [(&str, &str); 3] = [
    ("When to Use", "when to use"),
    ("Quick Start", "quick start"),
    ("Examples", "example"),
];

/// Boolean-typed frontmatter fields
const BOOLEAN_FIELDS: [&str; 2] = ["disable-model-invocation", "user-invocable"];

/// Validates one skill folder and its SKILL.md file
#[derive(Debug, Clone)]
pub struct SkillValidator {
    skill_path: PathBuf,
}

impl SkillValidator {
    pub fn new(skill_path: impl Into<PathBuf>) -> Self {
        Self {
            skill_path: skill_path.into(),
        }
    }

    /// Run all validation checks and return the accumulated report.
    ///
    /// Never fails: filesystem faults are recorded as findings so that a run
    /// always completes with a structured result.
    pub fn validate(&self) -> ValidationReport {
        debug!(path = %self.skill_path.display(), "validating skill");

        let mut report = ValidationReport::new(&self.skill_path);
        self.check_structure(&mut report);
        self.check_skill_md(&mut report);
        report
    }

    /// Base name of the skill folder, the fallback identity when the
    /// frontmatter carries no `name`
    fn folder_name(&self) -> String {
        self.skill_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn check_structure(&self, report: &mut ValidationReport) {
        if !self.skill_path.exists() {
            report.error(format!(
                "Skill folder does not exist: {}",
                self.skill_path.display()
            ));
            return;
        }

        if !self.skill_path.is_dir() {
            report.error(format!(
                "Path is not a directory: {}",
                self.skill_path.display()
            ));
            return;
        }

        if !self.skill_path.join("SKILL.md").exists() {
            report.error(format!(
                "SKILL.md not found in {}",
                self.skill_path.display()
            ));
            return;
        }

        let folder_name = self.folder_name();
        if !NAME_PATTERN.is_match(&folder_name) {
            report.error(format!(
                "Folder name '{}' invalid. Use lowercase letters, numbers, and hyphens only.",
                folder_name
            ));
        }
    }

    fn check_skill_md(&self, report: &mut ValidationReport) {
        let skill_md = self.skill_path.join("SKILL.md");
        if !skill_md.exists() {
            return;
        }

        let content = match fs::read_to_string(&skill_md) {
            Ok(content) => content,
            Err(e) => {
                // Read faults beyond non-existence are structural errors so
                // the run still completes with a report
                report.error(format!("Failed to read SKILL.md: {}", e));
                return;
            }
        };

        let line_count = content.split('\n').count();
        if line_count > MAX_LINES {
            report.warning(format!(
                "SKILL.md has {} lines (recommended max: {})",
                line_count, MAX_LINES
            ));
        }

        let frontmatter = match frontmatter::parse(&content) {
            Ok(mapping) => mapping,
            Err(err) => {
                if matches!(err, FrontmatterError::Yaml(_)) {
                    report.error(err.to_string());
                }
                report.error("Invalid or missing YAML frontmatter");
                return;
            }
        };

        self.check_frontmatter(&frontmatter, report);
        self.check_content(&content, report);
    }

    fn check_frontmatter(&self, frontmatter: &Mapping, report: &mut ValidationReport) {
        for key in frontmatter.keys() {
            let known = key
                .as_str()
                .map(|k| KNOWN_FRONTMATTER_KEYS.contains(&k))
                .unwrap_or(false);
            if !known {
                report.warning(format!(
                    "Unknown frontmatter key: '{}'",
                    scalar_display(key)
                ));
            }
        }

        self.check_name_field(frontmatter, report);
        self.check_description_field(frontmatter, report);

        for field in BOOLEAN_FIELDS {
            match frontmatter.get(field) {
                None | Some(Value::Null) | Some(Value::Bool(_)) => {}
                Some(_) => {
                    report.error(format!("'{}' must be a boolean (true/false)", field));
                }
            }
        }
    }

    fn check_name_field(&self, frontmatter: &Mapping, report: &mut ValidationReport) {
        match frontmatter.get("name") {
            Some(Value::String(name)) if !name.is_empty() => {
                if name.chars().count() > MAX_NAME_LENGTH {
                    report.error(format!(
                        "Name '{}' exceeds max length ({} chars)",
                        name, MAX_NAME_LENGTH
                    ));
                }

                if !NAME_PATTERN.is_match(name) {
                    report.error(format!(
                        "Name '{}' invalid. Use lowercase, numbers, hyphens only.",
                        name
                    ));
                }

                // Exact string comparison: case differences count as mismatch
                let folder_name = self.folder_name();
                if *name != folder_name {
                    report.warning(format!(
                        "Name '{}' doesn't match folder '{}'",
                        name, folder_name
                    ));
                }
            }
            None | Some(Value::Null) | Some(Value::String(_)) => {
                report.warning("No 'name' field in frontmatter (will use folder name)");
            }
            Some(_) => {
                report.error("'name' must be a string");
            }
        }
    }

    fn check_description_field(&self, frontmatter: &Mapping, report: &mut ValidationReport) {
        match frontmatter.get("description") {
            Some(Value::String(description)) if !description.is_empty() => {
                if description.chars().count() > MAX_DESCRIPTION_LENGTH {
                    report.error(format!(
                        "Description exceeds max length ({} chars)",
                        MAX_DESCRIPTION_LENGTH
                    ));
                }

                let lower = description.to_lowercase();
                if !lower.contains("use when") {
                    report.warning("Description should include 'Use when...' trigger conditions");
                }

                if lower.starts_with("i ") || lower.starts_with("i'") || lower.starts_with("we ") {
                    report.warning("Description should be in third person (avoid 'I' or 'We')");
                }
            }
            None | Some(Value::Null) | Some(Value::String(_)) => {
                report.error("Missing required 'description' field");
            }
            Some(_) => {
                report.error("'description' must be a string");
            }
        }
    }

    fn check_content(&self, content: &str, report: &mut ValidationReport) {
        let content_lower = content.to_lowercase();
        for (section, needle) in RECOMMENDED_SECTIONS {
            if !content_lower.contains(needle) {
                report.warning(format!("Missing recommended section: '{}'", section));
            }
        }

        // One warning regardless of how many deep links appear
        if DEEP_REFERENCE_PATTERN.is_match(content) {
            report.warning("Deeply nested file references detected (avoid ../..)");
        }
    }
}

fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
