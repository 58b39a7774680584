use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `find` occurred and the file was written back.
    Rewritten,
    /// `find` did not occur; the file was left alone.
    Unchanged,
}

/// Reads the whole file as UTF-8.
///
/// # Errors
/// Returns [`Error::FileAccess`] if the file cannot be read or is not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrites `path` with `text`, creating parent directories if needed.
///
/// # Errors
/// Returns [`Error::FileAccess`] if a directory or the file cannot be written.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let access = |source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(access)?;
    }
    fs::write(path, text).map_err(access)
}

/// Replaces every non-overlapping occurrence of `find` with `replace` in the
/// file at `path`, scanning left to right. The file is only written when
/// `find` occurs at least once.
///
/// # Errors
/// Returns [`Error::FileAccess`] if the file cannot be read, decoded or written.
pub fn replace_in_file(path: &Path, find: &str, replace: &str) -> Result<Outcome> {
    let text = read_text(path)?;
    if !text.contains(find) {
        return Ok(Outcome::Unchanged);
    }
    write_text(path, &text.replace(find, replace))?;
    tracing::info!("Rewrote {}", path.display());
    Ok(Outcome::Rewritten)
}
