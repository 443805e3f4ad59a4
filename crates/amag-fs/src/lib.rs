//! Filesystem layer for the AMAG installer
//!
//! Provides the idempotent reconciliation primitives (copy, remove, prune)
//! used by every installer command, plus atomic whole-file writes.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod reconcile;

pub use constants::AmagPath;
pub use error::{Error, Result};
pub use path::{is_strictly_within, resolve_project_dir};
pub use reconcile::{CopyOutcome, copy_if_absent_or_forced, prune_empty_ancestors, remove_if_present};
