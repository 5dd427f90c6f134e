use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ExtractError, Result};

/// Write `contents` to `path` as UTF-8, replacing any existing file.
///
/// Missing parent directories are created first.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExtractError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = contents.len(), "wrote extracted text");
    Ok(())
}
