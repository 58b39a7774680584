use crate::constants::RESERVED_PREFIXES;
use std::fs;
use std::path::{Component, Path};

/// Strips any leading `./` so that `./ops/x` and `ops/x` compare equal.
pub fn normalize(path: &str) -> &str {
    let mut path = path;
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.trim_start_matches('/');
    }
    path
}

/// Returns true if `path`, relative to the working root, lies under one of the
/// reserved prefixes.
pub fn is_reserved(path: &str) -> bool {
    let path = normalize(path);
    RESERVED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Returns true if a glob pattern is absolute or climbs out of the working
/// root. Such a pattern can never match an entry of the walk.
pub fn escapes_root(pattern: &str) -> bool {
    let pattern = normalize(pattern);
    pattern.starts_with('/')
        || Path::new(pattern).is_absolute()
        || pattern == ".."
        || pattern.starts_with("../")
}

/// Returns true only for an existing regular file. Symbolic links are not
/// followed, so a link to a file is not a regular file.
pub fn is_regular_file(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_file())
        .unwrap_or(false)
}

/// Renders `path` relative to `root` with `/` separators, the form patterns
/// and reserved prefixes are written in. Returns `None` if `path` is not under
/// `root` or is not valid UTF-8.
pub fn relative_str(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(parts.join("/"))
}
