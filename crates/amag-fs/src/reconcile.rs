//! Idempotent reconciliation primitives
//!
//! Every installer command is built from three operations that can be
//! repeated safely: copy a template when missing (or when forced), remove a
//! managed path when present, and prune directories that became empty.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::path::is_strictly_within;
use crate::{Error, Result, io};

/// Result of [`copy_if_absent_or_forced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Destination did not exist and was created
    Created,
    /// Destination existed and was overwritten
    Updated,
    /// Destination existed and `force` was not set
    Skipped,
    /// Source does not exist; nothing was written
    SourceMissing,
}

impl CopyOutcome {
    /// Whether the destination was written.
    pub fn wrote(self) -> bool {
        matches!(self, Self::Created | Self::Updated)
    }
}

/// Copy `src` to `dest` unless `dest` already exists and `force` is false.
///
/// Directories are copied recursively, merging into an existing destination.
/// Each file is written whole through [`io::write_atomic`], so an overwrite
/// never leaves a partially written file behind.
pub fn copy_if_absent_or_forced(src: &Path, dest: &Path, force: bool) -> Result<CopyOutcome> {
    let existed = dest.exists();

    if existed && !force {
        tracing::debug!(dest = %dest.display(), "destination exists, skipping");
        return Ok(CopyOutcome::Skipped);
    }

    if !src.exists() {
        tracing::debug!(src = %src.display(), "template source missing");
        return Ok(CopyOutcome::SourceMissing);
    }

    if src.is_dir() {
        copy_dir_recursive(src, dest)?;
    } else {
        io::copy_file(src, dest)?;
    }

    tracing::debug!(
        src = %src.display(),
        dest = %dest.display(),
        overwrite = existed,
        "copied template"
    );

    Ok(if existed {
        CopyOutcome::Updated
    } else {
        CopyOutcome::Created
    })
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| Error::Walk {
            path: src.to_path_buf(),
            message: e.to_string(),
        })?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::Walk {
                path: entry.path().to_path_buf(),
                message: e.to_string(),
            })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
        } else {
            io::copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Remove a file or a whole directory tree if it exists.
///
/// Returns `true` when something was removed and `false` when the path was
/// already absent.
pub fn remove_if_present(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::io(path, e)),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match removed {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed");
            Ok(true)
        }
        // Raced with another removal: the end state is what we wanted
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Remove empty directories from `start` upward, stopping below `boundary`.
///
/// The walk ends at the first directory that is non-empty, missing or
/// unreadable, at `boundary` itself, or at any path outside `boundary`.
/// `boundary` is never removed.
pub fn prune_empty_ancestors(start: &Path, boundary: &Path) {
    let mut current = start.to_path_buf();

    while is_strictly_within(&current, boundary) {
        let is_empty = match fs::read_dir(&current) {
            Ok(mut entries) => entries.next().is_none(),
            Err(_) => break,
        };
        if !is_empty || fs::remove_dir(&current).is_err() {
            break;
        }
        tracing::debug!(dir = %current.display(), "pruned empty directory");

        if !current.pop() {
            break;
        }
    }
}
