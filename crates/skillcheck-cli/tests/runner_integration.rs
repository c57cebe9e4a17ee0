//! Integration tests for the --all aggregation over a skills tree

use skillcheck_cli::{runner, CliError, OutputStyle};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VALID_SKILL_MD: &str = "---\n\
name: PLACEHOLDER\n\
description: \"Does X. Use when Y.\"\n\
---\n\
## When to Use\n\n## Quick Start\n\n## Examples\n";

fn plain_style() -> OutputStyle {
    OutputStyle { use_colors: false }
}

fn create_valid_skill(skills_dir: &Path, name: &str) {
    let dir = skills_dir.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("SKILL.md"),
        VALID_SKILL_MD.replace("PLACEHOLDER", name),
    )
    .unwrap();
}

#[test]
fn test_all_valid_skills_pass() {
    let root = TempDir::new().unwrap();
    let skills_dir = root.path().join("skills");
    for name in ["alpha", "beta", "gamma"] {
        create_valid_skill(&skills_dir, name);
    }

    let result = runner::validate_all_skills(&skills_dir, &plain_style()).unwrap();
    assert!(result);
}

#[test]
fn test_one_broken_skill_fails_the_aggregate() {
    let root = TempDir::new().unwrap();
    let skills_dir = root.path().join("skills");
    for name in ["alpha", "beta", "gamma"] {
        create_valid_skill(&skills_dir, name);
    }
    // Fourth skill has no SKILL.md
    fs::create_dir_all(skills_dir.join("delta")).unwrap();

    let result = runner::validate_all_skills(&skills_dir, &plain_style()).unwrap();
    assert!(!result);
}

#[test]
fn test_dot_directories_and_files_are_skipped() {
    let root = TempDir::new().unwrap();
    let skills_dir = root.path().join("skills");
    create_valid_skill(&skills_dir, "alpha");
    fs::create_dir_all(skills_dir.join(".hidden")).unwrap();
    fs::write(skills_dir.join("README.md"), "not a skill").unwrap();

    // The hidden dir has no SKILL.md; skipping it keeps the run green
    let result = runner::validate_all_skills(&skills_dir, &plain_style()).unwrap();
    assert!(result);
}

#[test]
fn test_missing_skills_directory() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("skills");

    match runner::validate_all_skills(&missing, &plain_style()) {
        Err(CliError::SkillsDirNotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected SkillsDirNotFound, got {:?}", other),
    }
}

#[test]
fn test_empty_skills_directory_is_valid() {
    let root = TempDir::new().unwrap();
    let skills_dir = root.path().join("skills");
    fs::create_dir_all(&skills_dir).unwrap();

    let result = runner::validate_all_skills(&skills_dir, &plain_style()).unwrap();
    assert!(result);
}

#[test]
fn test_single_skill_run_reports_validity() {
    let root = TempDir::new().unwrap();
    let skills_dir = root.path().join("skills");
    create_valid_skill(&skills_dir, "alpha");

    assert!(runner::validate_skill(&skills_dir.join("alpha"), &plain_style()));
    assert!(!runner::validate_skill(&skills_dir.join("missing"), &plain_style()));
}
