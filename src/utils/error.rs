use crate::models::SelectionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudentKitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),
}

pub type Result<T> = std::result::Result<T, StudentKitError>;
