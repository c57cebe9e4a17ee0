//! Property tests for the folder/name format rule

use proptest::prelude::*;
use skillcheck_core::constants::NAME_PATTERN;
use skillcheck_core::SkillValidator;
use std::fs;
use tempfile::TempDir;

/// Generate names the format rule must accept
fn valid_name_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z0-9]{1,8}", 1..4).prop_map(|segments| segments.join("-"))
}

fn run_validator(folder: &str) -> skillcheck_core::ValidationReport {
    let root = TempDir::new().unwrap();
    let dir = root.path().join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("SKILL.md"),
        format!(
            "---\nname: \"{}\"\ndescription: \"Does X. Use when Y.\"\n---\nwhen to use, quick start, example\n",
            folder
        ),
    )
    .unwrap();
    SkillValidator::new(&dir).validate()
}

proptest! {
    #[test]
    fn prop_hyphenated_lowercase_names_pass(name in valid_name_strategy()) {
        prop_assert!(NAME_PATTERN.is_match(&name));

        let report = run_validator(&name);
        prop_assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
        prop_assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
    }
}

proptest! {
    #[test]
    fn prop_uppercase_or_underscore_names_fail(
        name in "[A-Z][A-Za-z0-9_]{0,10}|[a-z0-9]+_[a-z0-9]+"
    ) {
        prop_assert!(!NAME_PATTERN.is_match(&name));
    }
}

#[test]
fn test_edge_case_names() {
    for bad in ["", "-bad-", "bad-", "-bad", "double--hyphen", "My_Skill", "Bad", "skill_name"] {
        assert!(!NAME_PATTERN.is_match(bad), "{:?} should be rejected", bad);
    }
    for good in ["a", "0", "my-skill", "a-b-c", "skill2", "2fast"] {
        assert!(NAME_PATTERN.is_match(good), "{:?} should be accepted", good);
    }
}
