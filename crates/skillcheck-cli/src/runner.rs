// Validation runs and console reporting

use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use skillcheck_core::SkillValidator;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

const SEPARATOR_WIDTH: usize = 60;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Validate a single skill folder and print its report.
///
/// Returns whether the skill passed.
pub fn validate_skill(skill_path: &Path, style: &OutputStyle) -> bool {
    println!("\n{}", separator());
    println!("Validating: {}", skill_path.display());
    println!("{}", separator());

    let report = SkillValidator::new(skill_path).validate();

    if !report.errors.is_empty() {
        println!("\n{}", style.error("ERRORS:"));
        for error in &report.errors {
            println!("   • {}", error);
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", style.warning("WARNINGS:"));
        for warning in &report.warnings {
            println!("   • {}", warning);
        }
    }

    if report.is_valid() {
        println!("\n{}", style.success("Skill is valid!"));
    } else {
        println!("\n{}", style.error("Skill has errors that must be fixed."));
    }

    report.is_valid()
}

/// Validate every skill folder directly under `skills_dir`.
///
/// Immediate subdirectories are processed one at a time in lexicographic
/// order; dot-prefixed names are skipped. Returns whether every skill passed.
pub fn validate_all_skills(skills_dir: &Path, style: &OutputStyle) -> CliResult<bool> {
    if !skills_dir.exists() {
        return Err(CliError::SkillsDirNotFound {
            path: skills_dir.to_path_buf(),
        });
    }

    let mut skill_count = 0usize;
    let mut valid_count = 0usize;

    for entry in WalkDir::new(skills_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        debug!(skill = %entry.path().display(), "running validation");
        skill_count += 1;
        if validate_skill(entry.path(), style) {
            valid_count += 1;
        }
    }

    println!("\n{}", separator());
    println!("SUMMARY: {}/{} skills valid", valid_count, skill_count);
    println!("{}", separator());

    Ok(valid_count == skill_count)
}
