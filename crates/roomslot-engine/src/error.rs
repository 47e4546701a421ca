//! Error types for roomslot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown campus: {0}")]
    UnknownCampus(String),

    #[error("Invalid snapshot: {0}")]
    SnapshotParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
