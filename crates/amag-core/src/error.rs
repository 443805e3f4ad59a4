//! Error types for amag-core

use std::path::PathBuf;

use crate::registry::ComponentKind;

/// Result type for amag-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in amag-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Component kind is not one of rule, workflow, skill
    #[error("Invalid type \"{kind}\". Must be one of: {}", ComponentKind::names().join(", "))]
    InvalidComponentType { kind: String },

    /// Kind is valid but no component with that name is registered
    #[error("Unknown {kind} \"{name}\". Run `amag list` to see available components.")]
    UnknownComponent { kind: ComponentKind, name: String },

    /// Dot path does not name a key of the config shape
    #[error("Invalid config path: {path}")]
    InvalidConfigPath { path: String },

    /// Coerced value does not fit the field it targets
    #[error("Invalid value for {path}: {message}")]
    InvalidConfigValue { path: String, message: String },

    /// No templates directory could be located
    #[error("Templates directory not found (searched: {})", format_searched(.searched))]
    TemplatesNotFound { searched: Vec<PathBuf> },

    /// Filesystem error from amag-fs
    #[error(transparent)]
    Fs(#[from] amag_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_searched(searched: &[PathBuf]) -> String {
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
