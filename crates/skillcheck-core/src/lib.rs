//! Validation rule engine for skill folders
//!
//! A skill is a folder containing a `SKILL.md` file: YAML frontmatter followed
//! by markdown content. The engine runs a fixed pipeline of checks over one
//! folder and accumulates findings into a [`ValidationReport`]:
//!
//! 1. Folder structure (existence, `SKILL.md` presence, folder name format)
//! 2. Line-count advisory
//! 3. Frontmatter extraction and YAML decoding
//! 4. Frontmatter field rules (known keys, name, description, boolean fields)
//! 5. Content conventions (recommended sections, deep relative references)
//!
//! Errors must be fixed for a skill to be valid; warnings are advisory and
//! never affect validity.

pub mod constants;
pub mod error;
pub mod frontmatter;
pub mod report;
pub mod validator;

pub use error::FrontmatterError;
pub use report::ValidationReport;
pub use validator::SkillValidator;
