use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CategorizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not read category dict {}: {source}", .path.display())]
    Mapping {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("File provided not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("No category known for transaction {index}: {description}")]
    UnknownDescription { index: usize, description: String },
}

pub type Result<T> = std::result::Result<T, CategorizeError>;
