use thiserror::Error;

use crate::pass::GenerateError;
use crate::pass::output::OutputError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("aborted")]
    Aborted,
}

impl From<OutputError> for CliError {
    fn from(e: OutputError) -> Self {
        match e {
            OutputError::Generate(e) => CliError::Generate(e),
            OutputError::Io(e) => CliError::Io(e),
        }
    }
}
