use bloom_gateway::DirectoryError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't load profiles: {0}")]
    LoadError(String),

    #[error("No profile with id {0}")]
    ProfileNotFound(String),

    #[error("Failed to export profile: {0}")]
    ExportError(String),

    #[error("Unknown command: {0}")]
    UnknownInput(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    DirectoryError(#[from] DirectoryError),
}
