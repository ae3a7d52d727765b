use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::RecapError;

/// Creates the directory that will hold `out`. Safe to call repeatedly.
pub fn ensure_parent_dir(out: &Path) -> Result<(), RecapError> {
    let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|source| RecapError::CreateOutputDir {
        path: parent.to_path_buf(),
        source,
    })?;
    debug!("Output directory ready: {}", parent.display());
    Ok(())
}

/// Reads the recap text and trims surrounding whitespace. Empty content is an error.
pub fn load_recap_text(path: &Path) -> Result<String, RecapError> {
    let raw = fs::read_to_string(path).map_err(|source| RecapError::ReadText {
        path: path.to_path_buf(),
        source,
    })?;
    let text = raw.trim();
    if text.is_empty() {
        return Err(RecapError::EmptyText {
            path: path.to_path_buf(),
        });
    }
    Ok(text.to_string())
}
