use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageMatrixMgrError {
    #[error("Image root directory does not exist or is not a directory: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid inference rule: {0}")]
    Rule(#[from] regex::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
