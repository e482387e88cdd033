use std::path::PathBuf;
use thiserror::Error;

/// Per-file failures. All of these are caught at the processor boundary and
/// reported; none of them aborts the batch.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("resize failed: {0}")]
    Resize(String),

    #[error("WebP encoding failed: {0}")]
    Encode(String),

    #[error("source file is empty, cannot compute compression ratio")]
    EmptySource,

    #[error("cannot derive output name from {0}")]
    InvalidFilename(PathBuf),
}
