use crate::input::InputError;
use crate::output::OutputError;
use thiserror::Error;

/// Top-level errors for the command-line run
///
/// The recommender itself cannot fail; everything here comes from the
/// surrounding configuration and terminal I/O.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
