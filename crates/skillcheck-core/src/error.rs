//! Error types for frontmatter extraction

use thiserror::Error;

/// Ways the leading frontmatter block can fail to parse
///
/// Any of these is fatal for the run's frontmatter and content checks; the
/// caller records the failure on the report and stops.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Document does not begin with a `---` delimiter
    #[error("document does not start with a '---' frontmatter delimiter")]
    Missing,

    /// Opening `---` found but no closing delimiter
    #[error("frontmatter block is not closed by a second '---' delimiter")]
    Unclosed,

    /// The block decoded to a scalar or sequence instead of a mapping
    #[error("frontmatter is not a YAML mapping")]
    NotAMapping,

    /// The YAML decoder rejected the block
    #[error("YAML parsing error: {0}")]
    Yaml(String),
}
