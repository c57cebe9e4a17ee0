// Skillcheck CLI Library

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use output::OutputStyle;
