// Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Default root directory scanned by `--all`
pub const DEFAULT_SKILLS_DIR: &str = "skills";

/// Skillcheck - SKILL.md validator
#[derive(Parser, Debug)]
#[command(name = "skillcheck")]
#[command(bin_name = "skillcheck")]
#[command(about = "Validate SKILL.md skill folders for structure, frontmatter, and content conventions")]
#[command(
    long_about = "Skillcheck validates skill folders: a folder holding a SKILL.md file whose\nYAML frontmatter and markdown content must follow the repository conventions.\n\nErrors must be fixed before a skill is considered valid; warnings are advisory.\n\nUsage:\n  skillcheck skills/my-skill/    Validate a single skill folder\n  skillcheck --all               Validate every skill under ./skills"
)]
#[command(version)]
pub struct Cli {
    /// Path to a skill folder to validate
    #[arg(value_name = "SKILL_PATH")]
    pub skill_path: Option<PathBuf>,

    /// Validate every skill in the skills directory
    #[arg(long, conflicts_with = "skill_path")]
    pub all: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
