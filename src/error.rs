use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameCountError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Directory not found: {}", path.display())]
    MissingDir { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid frame index {slice:?} in {}", path.display())]
    FrameIndex { path: PathBuf, slice: String },

    #[error("Unreadable record {} (content {content:?})", path.display())]
    CorruptRecord { path: PathBuf, content: String },

    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FrameCountError>;
