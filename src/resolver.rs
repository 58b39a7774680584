//! Turns a job into the concrete list of files it will touch.

use crate::job::ReplaceText;
use crate::path_util::{escapes_root, is_regular_file, is_reserved, normalize, relative_str};
use crate::{Error, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// `*` stays within a path segment, `**` crosses segments, and dot-files are
/// only matched when the pattern spells the dot out.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Resolves the target file set of the job at position `index`.
///
/// Explicit `files` are used verbatim; otherwise the job's glob is expanded
/// against the tree under `root`. Either way, reserved paths and anything that
/// is not a regular file are dropped. Duplicates are kept.
///
/// # Errors
/// Returns [`Error::InvalidGlob`] if the glob pattern does not parse.
pub fn resolve(job: &ReplaceText, index: usize, root: &Path) -> Result<Vec<PathBuf>> {
    let candidates: Vec<(String, PathBuf)> = if job.has_explicit_files() {
        job.files
            .iter()
            .map(|file| (normalize(file).to_string(), root.join(file)))
            .collect()
    } else {
        expand_glob(&job.glob, index, root)?
    };

    let targets = candidates
        .into_iter()
        .filter_map(|(rel, path)| {
            if is_reserved(&rel) {
                tracing::debug!("Skipping reserved path {rel}");
                None
            } else if !is_regular_file(&path) {
                tracing::debug!("Skipping {}: not a regular file", path.display());
                None
            } else {
                Some(path)
            }
        })
        .collect();
    Ok(targets)
}

/// Walks `root` and returns every entry whose root-relative path matches
/// `pattern`, in file name order. Reserved directories and symbolic links to
/// directories are not descended into.
fn expand_glob(pattern: &str, index: usize, root: &Path) -> Result<Vec<(String, PathBuf)>> {
    if escapes_root(pattern) {
        tracing::warn!(
            "Job #{index}: glob '{pattern}' points outside {} and will match nothing",
            root.display()
        );
    }
    let matcher = Pattern::new(normalize(pattern)).map_err(|source| Error::InvalidGlob {
        index,
        pattern: pattern.to_string(),
        source,
    })?;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            relative_str(entry.path(), root).is_none_or(|rel| !is_reserved(&format!("{rel}/")))
        });

    let mut matches = vec![];
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry while expanding '{pattern}': {e}");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Some(rel) = relative_str(entry.path(), root) else {
            tracing::debug!("Skipping non UTF-8 path {}", entry.path().display());
            continue;
        };
        if matcher.matches_with(&rel, MATCH_OPTIONS) {
            matches.push((rel, entry.into_path()));
        }
    }
    Ok(matches)
}
