// src/document/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;
use std::io;
use std::path::Path;

/// Make sure the output file can be written.
///
/// - Missing parent directory → created
/// - Output path is a directory → error
pub(crate) fn ensure_writable(path: &Path) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::from(io::Error::other(format!(
            "Output path is a directory: {}",
            path.display()
        ))));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
        info(format!("Created output directory {}", parent.display()));
    }

    Ok(())
}
