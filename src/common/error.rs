use thiserror::Error;

use super::types::{FrameId, PageId};

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum JoinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page {0} not found")]
    PageNotFound(PageId),

    #[error("Invalid frame ID: {0}")]
    InvalidFrameId(FrameId),

    #[error("Page is full")]
    PageFull,

    #[error("Hash table frame overflowed while building bucket {bucket}")]
    HashTableOverflow { bucket: usize },

    #[error("Buffer pool has {frames} frames, the join needs at least 3")]
    PoolTooSmall { frames: usize },
}

pub type Result<T> = std::result::Result<T, JoinError>;
