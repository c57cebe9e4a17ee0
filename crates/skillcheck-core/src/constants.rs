//! Validation limits and patterns shared across checks
//!
//! These are process-wide read-only configuration. Extending the recognized
//! key set is a data change here, not a code change in the validator.

use once_cell::sync::Lazy;
use regex::Regex;

/// Recommended maximum line count for SKILL.md (advisory only)
pub const MAX_LINES: usize = 500;

/// Maximum length of the frontmatter `name` field
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum length of the frontmatter `description` field
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Frontmatter keys the validator recognizes; anything else is warned about
pub const KNOWN_FRONTMATTER_KEYS: &[&str] = &[
    "name",
    "description",
    "allowed-tools",
    "disable-model-invocation",
    "user-invocable",
    "context",
    "agent",
    "hooks",
    "model",
    "argument-hint",
    "license",
    "metadata",
    "compatibility",
];

/// Format required for skill folder names and the `name` field:
/// lowercase alphanumeric segments separated by single hyphens
pub static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Markdown link whose target climbs two or more directory levels
pub static DEEP_REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]\((?:\.\./){2,}.*?\)").unwrap());
