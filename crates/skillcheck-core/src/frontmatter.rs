//! Frontmatter extraction from SKILL.md content
//!
//! Expects the document to open with a `---` delimited YAML block:
//!
//! ```text
//! ---
//! name: my-skill
//! description: Does X. Use when Y.
//! ---
//! # Markdown content
//! ```

use crate::error::FrontmatterError;
use serde_yaml::{Mapping, Value};

/// Extract and decode the YAML frontmatter block.
///
/// The delimiter must sit at offset 0 and appear at least twice. A blank
/// block decodes to an empty mapping; a block holding anything other than a
/// mapping is rejected.
pub fn parse(content: &str) -> Result<Mapping, FrontmatterError> {
    if !content.starts_with("---") {
        return Err(FrontmatterError::Missing);
    }

    let parts: Vec<&str> = content.splitn(3, "---").collect();
    if parts.len() < 3 {
        return Err(FrontmatterError::Unclosed);
    }

    let value: Value =
        serde_yaml::from_str(parts[1]).map_err(|e| FrontmatterError::Yaml(e.to_string()))?;

    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(FrontmatterError::NotAMapping),
    }
}
