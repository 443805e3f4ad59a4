//! Project directory resolution

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// Resolve a user-supplied target directory to an absolute path.
///
/// Relative targets are joined onto the current directory and `.`/`..`
/// segments are folded lexically. Existing directories are canonicalized
/// (without the `\\?\` prefix on Windows) so every derived path shares one
/// root.
pub fn resolve_project_dir(target: impl AsRef<Path>) -> Result<PathBuf> {
    let target = target.as_ref();
    let absolute = if target.is_absolute() {
        target.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::io(target, e))?;
        cwd.join(target)
    };

    let normalized = normalize_lexically(&absolute);
    if normalized.exists() {
        return dunce::canonicalize(&normalized).map_err(|e| Error::io(&normalized, e));
    }
    Ok(normalized)
}

/// True when `path` lies below `boundary` and is not `boundary` itself.
///
/// Comparison is per path component, so `/a/bc` is not inside `/a/b`.
pub fn is_strictly_within(path: &Path, boundary: &Path) -> bool {
    path != boundary && path.starts_with(boundary)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
