use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("No skill path provided")]
    MissingSkillPath,

    #[error("Skills directory not found: {}", path.display())]
    SkillsDirNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::MissingSkillPath => {
                "No skill path provided.\n\nRun 'skillcheck --help' for usage information."
                    .to_string()
            }
            CliError::SkillsDirNotFound { path } => {
                format!(
                    "Skills directory not found: {}\n\nRun 'skillcheck <path>' to validate a single skill folder instead.",
                    path.display()
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
