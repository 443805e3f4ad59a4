//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Replace `path` with `content` in one step.
///
/// The bytes go to a hidden sibling file held under an exclusive advisory
/// lock, then the sibling is renamed over `path`. Readers see the old file or
/// the new one, never a prefix. The sibling is removed if any step fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let staging = staging_path(path);
    let staged = stage(&staging, path, content)
        .and_then(|()| fs::rename(&staging, path).map_err(|e| Error::io(path, e)));
    if staged.is_err() {
        let _ = fs::remove_file(&staging);
    }
    staged?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "replaced file");
    Ok(())
}

/// `.<name>.<pid>.amag-tmp` next to `path`, so the rename stays on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.amag-tmp", std::process::id()))
}

fn stage(staging: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(staging)
        .map_err(|e| Error::io(staging, e))?;

    let lock_failed = |_: std::io::Error| Error::LockFailed {
        path: target.to_path_buf(),
    };
    file.lock_exclusive().map_err(lock_failed)?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(staging, e))?;
    file.unlock().map_err(lock_failed)
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Copy one file by reading it fully and writing it atomically to `dest`.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    let bytes = fs::read(src).map_err(|e| Error::io(src, e))?;
    write_atomic(dest, &bytes)
}
