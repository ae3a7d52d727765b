use std::path::PathBuf;

use thiserror::Error;

/// Failures caused by the operator's inputs, raised before the engine is touched.
#[derive(Debug, Error)]
pub enum RecapError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read text file {}: {source}", .path.display())]
    ReadText {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty text file: {}", .path.display())]
    EmptyText { path: PathBuf },
}
